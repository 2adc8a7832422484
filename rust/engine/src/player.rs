use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Chip amounts. Balances are abstract chips, never negative.
pub type Chips = u64;

/// Stable identity of a seat, assigned in join order and never reused within
/// a game. Pots and the turn order refer to players through it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SeatId(pub usize);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// Opaque reference to the external user behind a player.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a player action during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid when the current bet is already matched)
    Check,
    /// Call the current bet
    Call,
    /// Raise the current bet by the given amount
    Raise(Chips),
    /// Bet all remaining chips
    AllIn,
}

/// A participant at the table with their chips and per-hand betting state.
#[derive(Debug, Clone)]
pub struct Player {
    seat: SeatId,
    user: UserId,
    /// Chips behind, not yet committed to any pot
    balance: Chips,
    /// Hole cards, dealt at the start of each hand
    cards: Option<[Card; 2]>,
    /// Chips committed during the current betting round
    cur_bet: Chips,
    /// Whether the player has acted this round; separates a check from no action
    placed_bet: bool,
}

impl Player {
    pub fn new(seat: SeatId, user: UserId) -> Self {
        Self {
            seat,
            user,
            balance: 0,
            cards: None,
            cur_bet: 0,
            placed_bet: false,
        }
    }

    pub fn seat(&self) -> SeatId {
        self.seat
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn name(&self) -> &str {
        self.user.name()
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn set_balance(&mut self, balance: Chips) {
        self.balance = balance;
    }

    pub fn add_chips(&mut self, amount: Chips) {
        self.balance += amount;
    }

    pub fn cur_bet(&self) -> Chips {
        self.cur_bet
    }

    pub fn placed_bet(&self) -> bool {
        self.placed_bet
    }

    pub fn set_placed_bet(&mut self, placed: bool) {
        self.placed_bet = placed;
    }

    /// The most this player can have committed this round.
    pub fn max_bet(&self) -> Chips {
        self.cur_bet + self.balance
    }

    pub fn is_all_in(&self) -> bool {
        self.balance == 0
    }

    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.cards
    }

    pub fn deal(&mut self, cards: [Card; 2]) {
        self.cards = Some(cards);
        self.cur_bet = 0;
        self.placed_bet = false;
    }

    pub fn clear_hand(&mut self) {
        self.cards = None;
        self.cur_bet = 0;
        self.placed_bet = false;
    }

    pub(crate) fn reset_round(&mut self) {
        self.cur_bet = 0;
        self.placed_bet = false;
    }

    /// Raises this round's commitment to `new_total`, returning the chips moved
    /// out of the balance.
    pub fn bet(&mut self, new_total: Chips) -> Chips {
        assert!(
            new_total >= self.cur_bet && new_total <= self.max_bet(),
            "{} cannot bet to {} (committed {}, max {})",
            self.name(),
            new_total,
            self.cur_bet,
            self.max_bet()
        );
        let moved = new_total - self.cur_bet;
        self.balance -= moved;
        self.cur_bet = new_total;
        moved
    }
}
