//! Main pot and side pot accounting.
//!
//! Pots form a chain ordered from the lowest cap to the highest. Each pot
//! tracks how much a player must put in on top of the pots below it this
//! round (`cur_bet`), what has been collected (`amount`), and the ceiling at
//! which the shortest eligible stack is all in (`max_bet`). Raising past the
//! ceiling caps the top pot and spins off a side pot for the deeper stacks.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::hand::{best_hand, Hand};
use crate::player::{Chips, Player, SeatId};

/// What happens to the chips left over when a pot splits unevenly.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OddChipRule {
    /// Leftover chips are not awarded to anyone.
    #[default]
    Burn,
    /// Leftover chips go one at a time to the tied winners closest to the
    /// dealer's left.
    LeftOfDealer,
}

/// One pot or side pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    players: BTreeSet<SeatId>,
    cur_bet: Chips,
    amount: Chips,
    max_bet: Chips,
    // what each seat has put into this pot
    paid: BTreeMap<SeatId, Chips>,
}

impl Pot {
    fn new(players: BTreeSet<SeatId>, table: &[Player]) -> Pot {
        let max_bet = ceiling(&players, table);
        Pot {
            players,
            cur_bet: 0,
            amount: 0,
            max_bet,
            paid: BTreeMap::new(),
        }
    }

    /// Players who have not folded and can still win this pot.
    pub fn eligible(&self) -> &BTreeSet<SeatId> {
        &self.players
    }

    pub fn cur_bet(&self) -> Chips {
        self.cur_bet
    }

    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn max_bet(&self) -> Chips {
        self.max_bet
    }

    fn side_pot(&self, table: &[Player]) -> Pot {
        let players = self
            .players
            .iter()
            .copied()
            .filter(|&seat| player(table, seat).max_bet() != self.max_bet)
            .collect();
        Pot::new(players, table)
    }

    fn winners(&self, community: &[Card], table: &[Player]) -> Vec<SeatId> {
        let mut winners = Vec::new();
        let mut best: Option<Hand> = None;
        for &seat in &self.players {
            let Some(hole) = player(table, seat).hole_cards() else {
                continue;
            };
            let hand = best_hand(community, hole);
            match best {
                Some(b) if hand < b => {}
                Some(b) if hand == b => winners.push(seat),
                _ => {
                    best = Some(hand);
                    winners = vec![seat];
                }
            }
        }
        winners
    }
}

// Smallest max_bet among the eligible players. With nobody eligible the pot
// can never be reached, so it gets a ceiling no bet can exceed.
fn ceiling(players: &BTreeSet<SeatId>, table: &[Player]) -> Chips {
    players
        .iter()
        .map(|&seat| player(table, seat).max_bet())
        .min()
        .unwrap_or(Chips::MAX)
}

fn position(table: &[Player], seat: SeatId) -> usize {
    match table.iter().position(|p| p.seat() == seat) {
        Some(i) => i,
        None => panic!("{} is not seated at this table", seat),
    }
}

fn player(table: &[Player], seat: SeatId) -> &Player {
    &table[position(table, seat)]
}

/// Owns the pots of the hand in progress and moves chips into them.
///
/// The manager never owns players: every operation borrows the table's
/// seating list and addresses players by [`SeatId`].
#[derive(Debug, Clone, Default)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to a single empty pot contested by every seated player.
    pub fn start_new_hand(&mut self, table: &[Player]) {
        let everyone = table.iter().map(Player::seat).collect();
        self.pots = vec![Pot::new(everyone, table)];
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    /// Total a player must have committed this round to stay live.
    pub fn current_bet_to_match(&self) -> Chips {
        self.pots.iter().map(|p| p.cur_bet).sum()
    }

    /// Chips collected across every pot.
    pub fn total_value(&self) -> Chips {
        self.pots.iter().map(|p| p.amount).sum()
    }

    /// Everyone who has not folded this hand.
    pub fn in_pot(&self) -> &BTreeSet<SeatId> {
        match self.pots.first() {
            Some(pot) => &pot.players,
            None => panic!("no pots; start_new_hand was not called"),
        }
    }

    fn top_mut(&mut self) -> &mut Pot {
        match self.pots.last_mut() {
            Some(pot) => pot,
            None => panic!("no pots; start_new_hand was not called"),
        }
    }

    /// Raises the bet to match to `new_total`, capping full pots and opening
    /// side pots until the top pot can hold the bet.
    pub fn increase_bet(&mut self, table: &[Player], new_total: Chips) {
        let below: Chips = self.pots[..self.pots.len().saturating_sub(1)]
            .iter()
            .map(|p| p.cur_bet)
            .sum();
        let mut accumulated = below;
        while self.top_mut().max_bet < new_total {
            let top = self.top_mut();
            top.cur_bet = match top.max_bet.checked_sub(accumulated) {
                Some(bet) => bet,
                None => panic!(
                    "pot ceiling {} below bets already placed {}",
                    top.max_bet, accumulated
                ),
            };
            accumulated += top.cur_bet;
            let side = top.side_pot(table);
            info!(
                cap = top.max_bet,
                eligible = side.players.len(),
                "opening side pot"
            );
            self.pots.push(side);
        }
        let top = self.top_mut();
        top.cur_bet = new_total - accumulated;
        debug!(bet = new_total, pots = self.pots.len(), "bet increased");
    }

    /// Moves chips from `seat` so their commitment reaches the bet to match,
    /// or as much of it as their stack allows, crediting each pot with the
    /// slice of the contribution that falls inside its band.
    pub fn handle_call(&mut self, table: &mut [Player], seat: SeatId) {
        let target = self.current_bet_to_match();
        let idx = position(table, seat);
        let p = &mut table[idx];
        let old = p.cur_bet();
        let new_total = p.max_bet().min(target).max(old);
        let paid = p.bet(new_total);
        p.set_placed_bet(true);

        let mut floor = 0;
        let mut attributed = 0;
        for pot in &mut self.pots {
            let top = floor + pot.cur_bet;
            let lo = old.max(floor);
            let hi = new_total.min(top);
            if hi > lo {
                pot.amount += hi - lo;
                *pot.paid.entry(seat).or_insert(0) += hi - lo;
                attributed += hi - lo;
            }
            floor = top;
        }
        assert_eq!(
            attributed, paid,
            "contribution of {} from {} not fully attributed to pots",
            paid, seat
        );
        debug!(%seat, paid, total = new_total, "call");
    }

    /// Raises the bet by `amount` above the current bet, then calls it.
    pub fn handle_raise(&mut self, table: &mut [Player], seat: SeatId, amount: Chips) {
        let new_total = self.current_bet_to_match() + amount;
        self.increase_bet(table, new_total);
        self.handle_call(table, seat);
    }

    /// Posts a forced blind. The player has not acted afterwards. Returns
    /// whether the blind put them all in.
    pub fn pay_blind(&mut self, table: &mut [Player], seat: SeatId, blind: Chips) -> bool {
        self.increase_bet(table, blind);
        self.handle_call(table, seat);
        let idx = position(table, seat);
        let p = &mut table[idx];
        p.set_placed_bet(false);
        p.is_all_in()
    }

    /// Removes a folding player from every pot they could have won.
    pub fn handle_fold(&mut self, seat: SeatId) {
        for pot in &mut self.pots {
            pot.players.remove(&seat);
        }
    }

    /// Whether every player who can still bet has acted and matched the bet.
    pub fn round_is_over(&self, table: &[Player]) -> bool {
        if self.betting_is_over(table) {
            return true;
        }
        let to_match = self.current_bet_to_match();
        self.in_pot().iter().all(|&seat| {
            let p = player(table, seat);
            p.is_all_in() || (p.placed_bet() && p.cur_bet() >= to_match)
        })
    }

    /// Whether no more betting can happen this hand: at most one un-folded
    /// player still has chips, and that player has already matched the bet.
    pub fn betting_is_over(&self, table: &[Player]) -> bool {
        let to_match = self.current_bet_to_match();
        let mut someone_betting = false;
        for &seat in self.in_pot() {
            let p = player(table, seat);
            if p.is_all_in() {
                continue;
            }
            if someone_betting || !p.placed_bet() || p.cur_bet() < to_match {
                return false;
            }
            someone_betting = true;
        }
        true
    }

    /// Splits every pot among its best hands. Pots without an eligible
    /// player are left to [`PotManager::refunds`].
    ///
    /// `dealer` is the dealer's position in `table`; it decides who receives
    /// leftover chips under [`OddChipRule::LeftOfDealer`].
    pub fn get_winners(
        &self,
        community: &[Card],
        table: &[Player],
        dealer: usize,
        rule: OddChipRule,
    ) -> BTreeMap<SeatId, Chips> {
        let mut payouts: BTreeMap<SeatId, Chips> = BTreeMap::new();
        for (i, pot) in self.pots.iter().enumerate() {
            let mut winners = pot.winners(community, table);
            if winners.is_empty() {
                continue;
            }
            let count = winners.len() as Chips;
            let share = pot.amount / count;
            let mut remainder = pot.amount % count;
            if share > 0 {
                for &seat in &winners {
                    *payouts.entry(seat).or_insert(0) += share;
                }
            }
            if remainder > 0 {
                match rule {
                    OddChipRule::Burn => {
                        info!(pot = i, chips = remainder, "odd chips not awarded");
                    }
                    OddChipRule::LeftOfDealer => {
                        let n = table.len();
                        winners.sort_by_key(|&seat| (position(table, seat) + n - dealer - 1) % n);
                        for &seat in &winners {
                            if remainder == 0 {
                                break;
                            }
                            *payouts.entry(seat).or_insert(0) += 1;
                            remainder -= 1;
                        }
                    }
                }
            }
        }
        payouts
    }

    /// Chips in pots nobody is left to win, returned to the seats that paid
    /// them. This is the uncalled part of a bet whose maker folded after
    /// everyone else was all in for less.
    pub fn refunds(&self) -> BTreeMap<SeatId, Chips> {
        let mut refunds: BTreeMap<SeatId, Chips> = BTreeMap::new();
        for (i, pot) in self.pots.iter().enumerate() {
            if !pot.players.is_empty() || pot.amount == 0 {
                continue;
            }
            info!(pot = i, chips = pot.amount, "returning uncontested pot");
            for (&seat, &amount) in &pot.paid {
                *refunds.entry(seat).or_insert(0) += amount;
            }
        }
        refunds
    }

    /// Closes the betting round: clears every pot's bet, resets the live
    /// players' round state, and recomputes the top pot's ceiling.
    pub fn advance_round(&mut self, table: &mut [Player]) {
        for pot in &mut self.pots {
            pot.cur_bet = 0;
            pot.max_bet = 0;
        }
        let live: Vec<SeatId> = self.top_mut().players.iter().copied().collect();
        for seat in live {
            let idx = position(table, seat);
            table[idx].reset_round();
        }
        let table: &[Player] = table;
        let top = self.top_mut();
        top.max_bet = ceiling(&top.players, table);
    }
}
