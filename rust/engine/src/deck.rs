use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card source drawn from without replacement.
///
/// Shuffles come from a seeded ChaCha20 stream, so a table created with the
/// same seed deals the same sequence of hands. A stacked deck replays a fixed
/// order on every shuffle, which is how tests place specific cards.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
    stacked: Option<Vec<Card>>,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
            stacked: None,
        }
    }

    /// A deck that deals `cards` front to back after every shuffle.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.clone(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
            stacked: Some(cards),
        }
    }

    pub fn shuffle(&mut self) {
        self.position = 0;
        match &self.stacked {
            Some(order) => self.cards = order.clone(),
            None => {
                self.cards = full_deck();
                self.cards.shuffle(&mut self.rng);
            }
        }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Draws the next card. Running out of cards mid-hand means the engine
    /// dealt more than a hand can use, so it is treated as fatal.
    pub fn draw(&mut self) -> Card {
        match self.deal_card() {
            Some(card) => card,
            None => panic!("deck exhausted after {} cards", self.position),
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
