use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tablestakes_engine::game::GameState;
use tablestakes_engine::options::GameOptions;
use tablestakes_engine::player::{Chips, UserId};
use tablestakes_engine::pot::OddChipRule;
use tablestakes_engine::table::Table;

const NAMES: [&str; 6] = ["ann", "ben", "cat", "dan", "eve", "fay"];

// Plays random commands at a fresh table until one player holds every chip,
// checking after each command that no chip was created or lost.
fn play_out(seed: u64, players: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let buy_in: Chips = rng.random_range(1..=60);
    let options = GameOptions {
        blind: 0,
        buy_in,
        raise_delay: 0,
        starting_blind: rng.random_range(0..=buy_in / 2 + 1),
        odd_chip: OddChipRule::LeftOfDealer,
    };
    let names: Vec<UserId> = NAMES[..players].iter().map(|n| UserId::new(*n)).collect();
    let mut t = Table::new(options, Some(seed));
    t.new_game(&names[0]).unwrap();
    for name in &names[1..] {
        t.join(name).unwrap();
    }
    t.start(&names[0]).unwrap();
    let total = buy_in * players as Chips;

    for step in 0..3_000 {
        let state = t.game().state();
        // refused commands are fine; they must leave the chips alone too
        let _ = match state {
            GameState::NoGame => return,
            GameState::NoHands => {
                let dealer = t.game().dealer().user().clone();
                t.deal(&dealer)
            }
            _ => {
                let who = t.game().current_player().unwrap().user().clone();
                match rng.random_range(0..6) {
                    0 => t.check(&who),
                    1 | 2 => t.call(&who),
                    3 => t.raise_bet(&who, rng.random_range(1..=30)),
                    4 => t.fold(&who),
                    _ => t.all_in(&who),
                }
            }
        };
        assert_eq!(
            t.game().chips_in_play(),
            total,
            "seed {} with {} players, step {}",
            seed,
            players,
            step
        );
    }
}

#[test]
fn random_games_never_create_or_lose_chips() {
    for players in [2, 3, 4, 6] {
        for seed in 0..150 {
            play_out(seed, players);
        }
    }
}

#[test]
fn shoving_every_hand_ends_with_one_player_holding_everything() {
    let mut t = Table::new(
        GameOptions {
            buy_in: 30,
            starting_blind: 10,
            raise_delay: 0,
            odd_chip: OddChipRule::LeftOfDealer,
            ..GameOptions::default()
        },
        Some(11),
    );
    let names: Vec<UserId> = NAMES[..4].iter().map(|n| UserId::new(*n)).collect();
    t.new_game(&names[0]).unwrap();
    for name in &names[1..] {
        t.join(name).unwrap();
    }
    t.start(&names[0]).unwrap();

    for _ in 0..10_000 {
        match t.game().state() {
            GameState::NoGame => break,
            GameState::NoHands => {
                let dealer = t.game().dealer().user().clone();
                t.deal(&dealer).unwrap();
            }
            _ => {
                let who = t.game().current_player().unwrap().user().clone();
                t.all_in(&who).unwrap();
            }
        }
        assert_eq!(t.game().chips_in_play(), 120);
    }
    let players = t.game().players();
    assert_eq!(t.game().state(), GameState::NoGame);
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].balance(), 120);
}
