//! # tablestakes-engine: Texas Hold'em Rules Engine
//!
//! Owns the complete state of one poker table: seats and chip balances,
//! blinds, betting rounds with main and side pots, community cards, showdown
//! and elimination. Commands go in, ordered narrative lines come out, and
//! every finished hand leaves an auditable [`logger::HandRecord`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded shuffling with ChaCha20 and sequential draws
//! - [`hand`] - Five-card hand ranking and best-of-seven selection
//! - [`player`] - Seats, chip balances and per-round betting state
//! - [`pot`] - Main pot and side pot accounting, round completion, payouts
//! - [`game`] - Hand lifecycle and turn order
//! - [`table`] - Precondition checks in front of [`game::Game`]
//! - [`rules`] - Betting validation for check and raise
//! - [`options`] - Blinds, buy-in and blind schedule settings
//! - [`logger`] - Hand records and JSONL hand history
//! - [`errors`] - User-facing rejection reasons
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_engine::game::GameState;
//! use tablestakes_engine::options::GameOptions;
//! use tablestakes_engine::player::UserId;
//! use tablestakes_engine::table::Table;
//!
//! let alice = UserId::new("alice");
//! let bob = UserId::new("bob");
//!
//! let mut table = Table::new(GameOptions::default(), Some(42));
//! table.new_game(&alice).unwrap();
//! table.join(&bob).unwrap();
//! table.start(&alice).unwrap();
//!
//! // alice deals first; heads-up the dealer posts the small blind and acts first
//! let lines = table.deal(&alice).unwrap();
//! assert_eq!(lines[0], "The hands have been dealt!");
//! assert_eq!(table.game().state(), GameState::HandsDealt);
//!
//! // bob cannot act out of turn
//! let err = table.check(&bob).unwrap_err();
//! assert_eq!(err.to_string(), "You can't check, bob, because it's alice's turn.");
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use tablestakes_engine::cards::Card;
//! use tablestakes_engine::hand::best_hand;
//!
//! let board: Vec<Card> = ["2c", "3d", "4h", "9s", "Kd"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let hand = best_hand(&board, ["As".parse().unwrap(), "5h".parse().unwrap()]);
//! assert_eq!(hand.to_string(), "five-high straight");
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod options;
pub mod player;
pub mod pot;
pub mod rules;
pub mod table;
