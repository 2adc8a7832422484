//! The hand lifecycle: seating, dealing, blinds, turn order, betting rounds,
//! showdown, elimination and dealer rotation.
//!
//! [`Game`] assumes every call satisfies its preconditions; the checks live in
//! [`crate::table::Table`]. Each operation returns the narrative lines that
//! describe what happened, in order.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::best_hand;
use crate::logger::{format_hand_id, ActionRecord, BlindRecord, HandRecord, Payout, Street};
use crate::options::GameOptions;
use crate::player::{Chips, Player, PlayerAction, SeatId, UserId};
use crate::pot::PotManager;

/// How far the table has progressed. Hands cycle from `NoHands` through
/// `RiverDealt` and back; the game returns to `NoGame` once one player holds
/// every chip.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// No game has been created
    NoGame,
    /// Waiting for players to join
    Waiting,
    /// Between hands, waiting for the dealer to deal
    NoHands,
    /// Hole cards are out, pre-flop betting
    HandsDealt,
    FlopDealt,
    TurnDealt,
    RiverDealt,
}

impl GameState {
    pub fn hand_in_progress(self) -> bool {
        self >= GameState::HandsDealt
    }

    pub fn street(self) -> Street {
        match self {
            GameState::FlopDealt => Street::Flop,
            GameState::TurnDealt => Street::Turn,
            GameState::RiverDealt => Street::River,
            _ => Street::Preflop,
        }
    }
}

/// One table's worth of game state.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    options: GameOptions,
    /// Seating order, which is join order; dealer rotation follows it
    players: Vec<Player>,
    next_seat: usize,
    /// Players who can still act this hand, in seating order
    in_hand: Vec<SeatId>,
    dealer_index: usize,
    /// Seating position post-flop rounds start looking for an actor from
    first_bettor: usize,
    /// Seating position the next turn starts looking for an actor from
    turn_from: usize,
    turn: Option<SeatId>,
    deck: Deck,
    /// Hole cards of the latest deal, kept after the hand ends
    last_deal: Vec<(UserId, [Card; 2])>,
    seed: Option<u64>,
    shared_cards: Vec<Card>,
    pot: PotManager,
    last_raise: Option<DateTime<Utc>>,
    hands_dealt: u32,
    record: Option<HandRecord>,
    last_hand: Option<HandRecord>,
}

impl Game {
    /// A table with a seeded deck, or a randomly seeded one when `seed` is
    /// `None`.
    pub fn new(options: GameOptions, seed: Option<u64>) -> Self {
        let deck = Deck::new_with_seed(seed.unwrap_or_else(rand::random));
        Self::build(options, deck, seed)
    }

    /// A table dealing from the given deck, e.g. [`Deck::stacked`].
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self::build(options, deck, None)
    }

    fn build(options: GameOptions, deck: Deck, seed: Option<u64>) -> Self {
        Self {
            state: GameState::NoGame,
            options,
            players: Vec::new(),
            next_seat: 0,
            in_hand: Vec::new(),
            dealer_index: 0,
            first_bettor: 0,
            turn_from: 0,
            turn: None,
            deck,
            last_deal: Vec::new(),
            seed,
            shared_cards: Vec::with_capacity(5),
            pot: PotManager::new(),
            last_raise: None,
            hands_dealt: 0,
            record: None,
            last_hand: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: SeatId) -> Option<&Player> {
        self.players.iter().find(|p| p.seat() == seat)
    }

    pub fn player_by_user(&self, user: &UserId) -> Option<&Player> {
        self.players.iter().find(|p| p.user() == user)
    }

    pub fn is_player(&self, user: &UserId) -> bool {
        self.player_by_user(user).is_some()
    }

    /// Seats that can still act this hand, in seating order.
    pub fn in_hand(&self) -> &[SeatId] {
        &self.in_hand
    }

    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }

    pub fn dealer(&self) -> &Player {
        &self.players[self.dealer_index]
    }

    /// The player whose turn it is, while a betting round is running.
    pub fn current_player(&self) -> Option<&Player> {
        self.turn.and_then(|seat| self.player(seat))
    }

    pub fn current_bet(&self) -> Chips {
        self.pot.current_bet_to_match()
    }

    pub fn pot(&self) -> &PotManager {
        &self.pot
    }

    pub fn shared_cards(&self) -> &[Card] {
        &self.shared_cards
    }

    /// Record of the most recently finished hand.
    pub fn last_hand(&self) -> Option<&HandRecord> {
        self.last_hand.as_ref()
    }

    /// Every chip at the table: balances plus whatever sits in the pots of
    /// the hand in progress.
    pub fn chips_in_play(&self) -> Chips {
        let balances: Chips = self.players.iter().map(Player::balance).sum();
        if self.state.hand_in_progress() {
            balances + self.pot.total_value()
        } else {
            balances
        }
    }

    /// Clears per-game state, seats `creator` and waits for others to join.
    pub fn new_game(&mut self, creator: UserId) -> Vec<String> {
        self.players.clear();
        self.in_hand.clear();
        self.last_deal.clear();
        self.dealer_index = 0;
        self.first_bettor = 0;
        self.turn_from = 0;
        self.turn = None;
        self.shared_cards.clear();
        self.pot = PotManager::new();
        self.last_raise = None;
        self.record = None;
        let name = creator.to_string();
        self.add_player(creator);
        self.state = GameState::Waiting;
        info!(creator = %name, "new game");
        vec![
            format!("A new game has been started by {}!", name),
            "Message !join to join the game.".to_string(),
        ]
    }

    /// Seats a new player, returning false when they are already seated.
    pub fn add_player(&mut self, user: UserId) -> bool {
        if self.is_player(&user) {
            return false;
        }
        let seat = SeatId(self.next_seat);
        self.next_seat += 1;
        debug!(%seat, user = %user, "player joined");
        self.players.push(Player::new(seat, user));
        true
    }

    /// Funds every player to the buy-in and resets the blind.
    pub fn start(&mut self) -> Vec<String> {
        self.state = GameState::NoHands;
        self.dealer_index = 0;
        for player in &mut self.players {
            player.set_balance(self.options.buy_in);
        }
        self.options.blind = self.options.starting_blind;
        info!(
            players = self.players.len(),
            buy_in = self.options.buy_in,
            "game started"
        );
        let mut messages = vec!["The game has begun!".to_string()];
        messages.extend(self.status_between_rounds());
        messages
    }

    pub fn status_between_rounds(&self) -> Vec<String> {
        let mut messages: Vec<String> = self
            .players
            .iter()
            .map(|p| format!("{} has ${}.", p.name(), p.balance()))
            .collect();
        messages.push(format!(
            "{} is the current dealer. Message !deal to deal when you're ready.",
            self.dealer().name()
        ));
        messages
    }

    pub fn chip_count(&self) -> Vec<String> {
        self.players
            .iter()
            .map(|p| format!("{} has ${}.", p.name(), p.balance()))
            .collect()
    }

    /// Hole cards from the latest deal, one message per player, to be
    /// delivered privately. Still available when the deal itself ran the
    /// hand to showdown.
    pub fn hole_card_messages(&self) -> Vec<(UserId, String)> {
        self.last_deal
            .iter()
            .map(|(user, [a, b])| (user.clone(), format!("{}  {}", a, b)))
            .collect()
    }

    pub fn deal_hands(&mut self) -> Vec<String> {
        self.deal_hands_at(Utc::now())
    }

    /// Deals a new hand, with `now` deciding whether the blinds double.
    pub fn deal_hands_at(&mut self, now: DateTime<Utc>) -> Vec<String> {
        self.deck.shuffle();
        self.shared_cards.clear();
        self.in_hand.clear();
        self.last_deal.clear();
        for player in &mut self.players {
            let cards = [self.deck.draw(), self.deck.draw()];
            player.deal(cards);
            self.in_hand.push(player.seat());
            self.last_deal.push((player.user().clone(), cards));
        }

        self.state = GameState::HandsDealt;
        self.hands_dealt += 1;
        let hand_id = format_hand_id(&now.format("%Y%m%d").to_string(), self.hands_dealt);
        info!(
            hand_id = %hand_id,
            players = self.players.len(),
            dealer = %self.dealer().seat(),
            "hands dealt"
        );
        self.record = Some(HandRecord::new(hand_id, self.seed));

        self.pot.start_new_hand(&self.players);

        let n = self.players.len();
        let d = self.dealer_index;
        self.first_bettor = (d + 1) % n;
        self.turn_from = if n > 2 { (d + 3) % n } else { d };
        self.turn = None;

        let mut messages = vec!["The hands have been dealt!".to_string()];
        if self.options.blind > 0 {
            messages.extend(self.pay_blinds(now));
        }
        messages.extend(self.next_turn());
        messages
    }

    fn pay_blinds(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let mut messages = Vec::new();

        let delay = self.options.raise_delay;
        if delay == 0 {
            self.last_raise = None;
        } else {
            match self.last_raise {
                None => self.last_raise = Some(now),
                Some(last) => {
                    let elapsed = i64::try_from(delay)
                        .ok()
                        .and_then(TimeDelta::try_minutes)
                        .is_some_and(|delay| now - last > delay);
                    if elapsed {
                        messages.push("**Blinds are being doubled this round!**".to_string());
                        self.options.blind = self.options.blind.saturating_mul(2);
                        self.last_raise = Some(now);
                        info!(blind = self.options.blind, "blinds doubled");
                    }
                }
            }
        }

        let blind = self.options.blind;
        let n = self.players.len();
        let d = self.dealer_index;
        // heads-up the dealer posts the small blind
        let (small, big) = if n > 2 {
            (self.players[(d + 1) % n].seat(), self.players[(d + 2) % n].seat())
        } else {
            (self.players[d].seat(), self.players[(d + 1) % n].seat())
        };

        let big_blind = blind.saturating_mul(2);
        for (seat, amount, label) in [(small, blind, "small"), (big, big_blind, "big")] {
            let name = self.name_of(seat);
            messages.push(format!("{} has paid the {} blind of ${}.", name, label, amount));
            let before = self.pot.total_value();
            let all_in = self.pot.pay_blind(&mut self.players, seat, amount);
            let paid = self.pot.total_value() - before;
            if let Some(record) = &mut self.record {
                record.blinds.push(BlindRecord { seat, amount: paid });
            }
            if all_in {
                messages.push(format!("{} is all in!", name));
                self.leave_hand(seat);
            }
        }
        messages
    }

    /// Describes the current player's situation and legal commands.
    pub fn cur_options(&self) -> Vec<String> {
        let p = self.actor();
        let to_match = self.current_bet();
        let mut messages = vec![format!(
            "It is {}'s turn. {} currently has ${}. The pot is currently ${}.",
            p.name(),
            p.name(),
            p.balance(),
            self.pot.total_value()
        )];
        if to_match > 0 {
            messages.push(format!(
                "The current bet to meet is ${}, and {} has bet ${}.",
                to_match,
                p.name(),
                p.cur_bet()
            ));
        } else {
            messages.push(format!("The current bet to meet is ${}.", to_match));
        }
        if p.cur_bet() == to_match {
            messages.push("Message !check, !raise or !fold.".to_string());
        } else if p.max_bet() > to_match {
            messages.push("Message !call, !raise or !fold.".to_string());
        } else {
            messages.push("Message !all-in or !fold.".to_string());
        }
        messages
    }

    /// Removes a player from the turn order after a fold or an all-in.
    ///
    /// Turns are tracked by seat rather than by index into `in_hand`, so the
    /// next actor is found by searching seating order from the removed
    /// player's position and nothing needs re-indexing.
    pub fn leave_hand(&mut self, seat: SeatId) {
        self.in_hand.retain(|&s| s != seat);
        debug!(%seat, remaining = self.in_hand.len(), "left the turn order");
    }

    /// Ends the current player's turn: passes the turn on, deals the next
    /// street, or goes to showdown.
    pub fn next_turn(&mut self) -> Vec<String> {
        if self.pot.round_is_over(&self.players) {
            if self.pot.betting_is_over(&self.players) {
                self.showdown()
            } else {
                self.next_round()
            }
        } else {
            self.turn = Some(self.first_live_from(self.turn_from));
            self.cur_options()
        }
    }

    fn next_round(&mut self) -> Vec<String> {
        let mut messages = Vec::new();
        let (label, count, next) = match self.state {
            GameState::HandsDealt => ("Dealing the flop:", 3, GameState::FlopDealt),
            GameState::FlopDealt => ("Dealing the turn:", 1, GameState::TurnDealt),
            GameState::TurnDealt => ("Dealing the river:", 1, GameState::RiverDealt),
            GameState::RiverDealt => return self.showdown(),
            other => panic!("no betting round follows {:?}", other),
        };
        messages.push(label.to_string());
        for _ in 0..count {
            let card = self.deck.draw();
            self.shared_cards.push(card);
        }
        self.state = next;
        debug!(state = ?next, board = %self.board_line(), "next round");
        messages.push(self.board_line());

        self.pot.advance_round(&mut self.players);
        self.turn = Some(self.first_live_from(self.first_bettor));
        messages.extend(self.cur_options());
        messages
    }

    /// Reveals the remaining board and every live hand, pays each pot to its
    /// best hands, then eliminates busted players and rotates the dealer.
    pub fn showdown(&mut self) -> Vec<String> {
        while self.shared_cards.len() < 5 {
            let card = self.deck.draw();
            self.shared_cards.push(card);
        }

        let mut messages = vec![
            "We have reached the end of betting. All cards will be revealed.".to_string(),
            self.board_line(),
        ];
        for &seat in self.pot.in_pot() {
            if let Some(p) = self.player(seat) {
                if let Some([a, b]) = p.hole_cards() {
                    messages.push(format!("{}'s hand: {}  {}", p.name(), a, b));
                }
            }
        }

        let winnings = self.pot.get_winners(
            &self.shared_cards,
            &self.players,
            self.dealer_index,
            self.options.odd_chip,
        );
        let mut winnings: Vec<(SeatId, Chips)> = winnings.into_iter().collect();
        winnings.sort_by_key(|&(_, amount)| amount);
        let mut payouts = Vec::with_capacity(winnings.len());
        for (seat, amount) in winnings {
            let board = self.shared_cards.clone();
            let p = self.player_mut(seat);
            let hand = match p.hole_cards() {
                Some(hole) => best_hand(&board, hole),
                None => panic!("{} won a pot without hole cards", seat),
            };
            p.add_chips(amount);
            let name = p.name().to_string();
            info!(%seat, amount, hand = %hand, "pot awarded");
            messages.push(format!("{} wins ${} with a {}.", name, amount, hand));
            payouts.push(Payout { seat, name, amount });
        }
        for (seat, amount) in self.pot.refunds() {
            let p = self.player_mut(seat);
            p.add_chips(amount);
            let name = p.name().to_string();
            messages.push(format!("{} takes back ${} that nobody called.", name, amount));
            payouts.push(Payout { seat, name, amount });
        }

        messages.extend(self.end_hand("showdown", payouts));
        messages
    }

    fn end_hand(&mut self, result: &str, payouts: Vec<Payout>) -> Vec<String> {
        if let Some(mut record) = self.record.take() {
            record.board = self.shared_cards.clone();
            record.result = Some(result.to_string());
            record.payouts = payouts;
            self.last_hand = Some(record);
        }
        self.turn = None;
        self.in_hand.clear();
        for player in &mut self.players {
            player.clear_hand();
        }

        let mut messages = Vec::new();
        let seating: Vec<SeatId> = self.players.iter().map(Player::seat).collect();
        for p in self.players.iter().filter(|p| p.balance() == 0) {
            info!(seat = %p.seat(), "player eliminated");
            messages.push(format!("{} has been knocked out of the game!", p.name()));
        }
        self.players.retain(|p| p.balance() > 0);

        if self.players.len() <= 1 {
            if let Some(winner) = self.players.first() {
                info!(seat = %winner.seat(), "game over");
                messages.push(format!(
                    "{} wins the game! Congratulations!",
                    winner.name()
                ));
            }
            self.state = GameState::NoGame;
            return messages;
        }

        // the button moves to the first surviving seat after the old dealer
        let n = seating.len();
        let next_dealer = (1..=n)
            .map(|k| seating[(self.dealer_index + k) % n])
            .find(|&seat| self.player(seat).is_some());
        self.dealer_index = next_dealer
            .and_then(|seat| self.players.iter().position(|p| p.seat() == seat))
            .unwrap_or(0);

        self.state = GameState::NoHands;
        messages.extend(self.status_between_rounds());
        messages
    }

    /// The current player checks, betting nothing more.
    pub fn check(&mut self) -> Vec<String> {
        let seat = self.current_seat();
        let p = self.player_mut(seat);
        p.set_placed_bet(true);
        let message = format!("{} checks.", p.name());
        self.record_action(seat, PlayerAction::Check);
        self.pass_turn(seat, vec![message])
    }

    /// The current player matches the bet, or goes all in trying.
    pub fn call(&mut self) -> Vec<String> {
        self.commit(PlayerAction::Call, None)
    }

    /// The current player raises the bet by `amount`.
    pub fn raise_bet(&mut self, amount: Chips) -> Vec<String> {
        self.commit(PlayerAction::Raise(amount), Some(amount))
    }

    /// The current player commits their whole stack: a raise when it exceeds
    /// the bet, otherwise a call for whatever they have.
    pub fn all_in(&mut self) -> Vec<String> {
        let max = self.actor().max_bet();
        let to_match = self.current_bet();
        if to_match >= max {
            self.commit(PlayerAction::AllIn, None)
        } else {
            self.commit(PlayerAction::AllIn, Some(max - to_match))
        }
    }

    fn commit(&mut self, action: PlayerAction, raise: Option<Chips>) -> Vec<String> {
        let seat = self.current_seat();
        let name = self.name_of(seat);
        let mut messages = Vec::new();
        match raise {
            Some(amount) => {
                self.pot.handle_raise(&mut self.players, seat, amount);
                messages.push(format!("{} raises by ${}.", name, amount));
            }
            None => {
                self.pot.handle_call(&mut self.players, seat);
                messages.push(format!("{} calls.", name));
            }
        }
        self.record_action(seat, action);
        if self.player_mut(seat).is_all_in() {
            messages.push(format!("{} is all in!", name));
            self.leave_hand(seat);
        }
        self.pass_turn(seat, messages)
    }

    /// The current player folds. When only one player is left in the pot they
    /// take it immediately without a showdown.
    pub fn fold(&mut self) -> Vec<String> {
        let seat = self.current_seat();
        let mut messages = vec![format!("{} has folded.", self.name_of(seat))];
        self.record_action(seat, PlayerAction::Fold);
        self.pot.handle_fold(seat);
        self.leave_hand(seat);

        if self.pot.in_pot().len() == 1 {
            let winner = self.pot.in_pot().iter().copied().next();
            if let Some(winner) = winner {
                let value = self.pot.total_value();
                let p = self.player_mut(winner);
                p.add_chips(value);
                let name = p.name().to_string();
                info!(seat = %winner, amount = value, "pot awarded uncontested");
                messages.push(format!("{} wins ${}!", name, value));
                let payout = Payout {
                    seat: winner,
                    name,
                    amount: value,
                };
                messages.extend(self.end_hand("fold", vec![payout]));
                return messages;
            }
        }

        if self.pot.betting_is_over(&self.players) {
            messages.extend(self.showdown());
            return messages;
        }
        self.pass_turn(seat, messages)
    }

    fn pass_turn(&mut self, seat: SeatId, mut messages: Vec<String>) -> Vec<String> {
        self.turn_from = self.position_of(seat) + 1;
        messages.extend(self.next_turn());
        messages
    }

    fn record_action(&mut self, seat: SeatId, action: PlayerAction) {
        debug!(%seat, ?action, state = ?self.state, "action");
        let street = self.state.street();
        if let Some(record) = &mut self.record {
            record.actions.push(ActionRecord {
                seat,
                street,
                action,
            });
        }
    }

    // First seat still in the hand, searching seating order from `start`.
    fn first_live_from(&self, start: usize) -> SeatId {
        let n = self.players.len();
        (0..n)
            .map(|k| self.players[(start + k) % n].seat())
            .find(|seat| self.in_hand.contains(seat))
            .unwrap_or_else(|| panic!("no player left to act while betting continues"))
    }

    fn current_seat(&self) -> SeatId {
        match self.turn {
            Some(seat) => seat,
            None => panic!("no player is on the clock in state {:?}", self.state),
        }
    }

    fn actor(&self) -> &Player {
        let seat = self.current_seat();
        &self.players[self.position_of(seat)]
    }

    fn position_of(&self, seat: SeatId) -> usize {
        match self.players.iter().position(|p| p.seat() == seat) {
            Some(i) => i,
            None => panic!("{} is not seated", seat),
        }
    }

    fn player_mut(&mut self, seat: SeatId) -> &mut Player {
        let i = self.position_of(seat);
        &mut self.players[i]
    }

    fn name_of(&self, seat: SeatId) -> String {
        self.players[self.position_of(seat)].name().to_string()
    }

    fn board_line(&self) -> String {
        self.shared_cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join("  ")
    }
}
