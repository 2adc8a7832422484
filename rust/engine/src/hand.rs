use std::cmp::Ordering;
use std::fmt;

use crate::cards::{Card, Rank};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// An evaluated five-card hand.
///
/// `cards` is arranged from least to most significant: unmatched cards in
/// ascending order first, then the duplicate groups (the larger group of a
/// full house last). In an ace-low straight the ace sits at the front.
/// Two hands are equal when their category and arranged ranks match, so
/// hands that differ only by suit tie.
#[derive(Debug, Copy, Clone)]
pub struct Hand {
    category: Category,
    cards: [Card; 5],
    // ranks most significant first, ace counted as 1 in a wheel
    key: [u8; 5],
}

impl Hand {
    pub fn new(mut cards: [Card; 5]) -> Hand {
        cards.sort_by_key(|c| c.rank);

        let flush = cards.iter().all(|c| c.suit == cards[0].suit);
        let wheel = is_wheel(&cards);
        let straight = wheel || cards.windows(2).all(|w| w[1].rank.value() == w[0].rank.value() + 1);
        if wheel {
            cards.rotate_right(1);
        }

        let groups = duplicate_groups(&cards);
        let category = if flush && straight {
            Category::StraightFlush
        } else if flush {
            Category::Flush
        } else if straight {
            Category::Straight
        } else {
            match groups.iter().map(|&(_, n)| n).collect::<Vec<_>>().as_slice() {
                [] => Category::HighCard,
                [2] => Category::Pair,
                [3] => Category::ThreeOfAKind,
                [4] => Category::FourOfAKind,
                [2, 2] => Category::TwoPair,
                [2, 3] => Category::FullHouse,
                other => unreachable!("impossible rank grouping {:?} in five cards", other),
            }
        };

        if !groups.is_empty() {
            let mut arranged: Vec<Card> = cards
                .iter()
                .copied()
                .filter(|c| groups.iter().all(|&(r, _)| r != c.rank))
                .collect();
            for &(rank, _) in &groups {
                arranged.extend(cards.iter().copied().filter(|c| c.rank == rank));
            }
            cards.copy_from_slice(&arranged);
        }

        let mut key = [0u8; 5];
        for (slot, card) in key.iter_mut().zip(cards.iter().rev()) {
            *slot = card.rank.value();
        }
        if wheel {
            key[4] = 1;
        }

        Hand {
            category,
            cards,
            key,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The five cards, least significant first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    fn top(&self) -> Rank {
        self.cards[4].rank
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.key == other.key
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.top();
        match self.category {
            Category::HighCard => write!(f, "{} high", top.name()),
            Category::Pair => write!(f, "pair of {}", top.plural()),
            Category::TwoPair => write!(
                f,
                "two pair, {} and {}",
                top.plural(),
                self.cards[2].rank.plural()
            ),
            Category::ThreeOfAKind => write!(f, "three of a kind, {}", top.plural()),
            Category::Straight => write!(f, "{}-high straight", top.name()),
            Category::Flush => write!(f, "{}-high flush", top.name()),
            Category::FullHouse => write!(
                f,
                "full house, {} over {}",
                top.plural(),
                self.cards[1].rank.plural()
            ),
            Category::FourOfAKind => write!(f, "four of a kind, {}", top.plural()),
            Category::StraightFlush if top == Rank::Ace => write!(f, "royal flush"),
            Category::StraightFlush => write!(f, "{}-high straight flush", top.name()),
        }
    }
}

fn is_wheel(sorted: &[Card; 5]) -> bool {
    let ranks: Vec<Rank> = sorted.iter().map(|c| c.rank).collect();
    ranks == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace]
}

// Runs of equal rank in a rank-sorted hand, ordered by (size, rank) ascending
// so the most significant group comes last.
fn duplicate_groups(sorted: &[Card; 5]) -> Vec<(Rank, usize)> {
    let mut groups: Vec<(Rank, usize)> = Vec::new();
    let mut run = (sorted[0].rank, 1usize);
    for card in &sorted[1..] {
        if card.rank == run.0 {
            run.1 += 1;
        } else {
            if run.1 > 1 {
                groups.push(run);
            }
            run = (card.rank, 1);
        }
    }
    if run.1 > 1 {
        groups.push(run);
    }
    groups.sort_by_key(|&(rank, n)| (n, rank));
    groups
}

/// Returns the strongest five-card hand that can be made from the community
/// cards and a player's two hole cards.
///
/// Every 5-card subset of the pooled cards is evaluated (21 subsets once the
/// river is out). Fewer than five pooled cards cannot form a hand and is an
/// engine bug.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::cards::Card;
/// use tablestakes_engine::hand::{best_hand, Category};
///
/// let board: Vec<Card> = ["Ah", "Kh", "Qh", "2c", "7d"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let hole = ["Jh".parse().unwrap(), "10h".parse().unwrap()];
/// let hand = best_hand(&board, hole);
/// assert_eq!(hand.category(), Category::StraightFlush);
/// assert_eq!(hand.to_string(), "royal flush");
/// ```
pub fn best_hand(community: &[Card], hole: [Card; 2]) -> Hand {
    let mut pool: Vec<Card> = community.to_vec();
    pool.extend_from_slice(&hole);
    assert!(
        pool.len() >= 5,
        "cannot evaluate a hand from {} cards",
        pool.len()
    );

    let n = pool.len();
    let mut best: Option<Hand> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let hand = Hand::new([pool[a], pool[b], pool[c], pool[d], pool[e]]);
                        if best.map_or(true, |h| hand > h) {
                            best = Some(hand);
                        }
                    }
                }
            }
        }
    }
    match best {
        Some(hand) => hand,
        None => unreachable!("at least one five-card subset exists"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: [&str; 5]) -> Hand {
        Hand::new(cards.map(|s| s.parse().unwrap()))
    }

    #[test]
    fn full_house_puts_trips_last_regardless_of_rank() {
        let h = hand(["9s", "9h", "3d", "3c", "3s"]);
        assert_eq!(h.category(), Category::FullHouse);
        assert_eq!(h.cards()[4].rank, Rank::Three);
        assert_eq!(h.cards()[1].rank, Rank::Nine);
    }

    #[test]
    fn two_pair_orders_high_pair_last() {
        let h = hand(["5s", "Kh", "5d", "Kc", "2s"]);
        assert_eq!(h.category(), Category::TwoPair);
        let ranks: Vec<Rank> = h.cards().iter().map(|c| c.rank).collect();
        assert_eq!(
            ranks,
            vec![Rank::Two, Rank::Five, Rank::Five, Rank::King, Rank::King]
        );
    }

    #[test]
    fn wheel_moves_ace_to_the_front() {
        let h = hand(["As", "2h", "3d", "4c", "5s"]);
        assert_eq!(h.category(), Category::Straight);
        assert_eq!(h.cards()[0].rank, Rank::Ace);
        assert_eq!(h.cards()[4].rank, Rank::Five);
    }
}
