use std::cmp::Ordering;

use tablestakes_engine::cards::{Card, Rank, Suit};
use tablestakes_engine::hand::{best_hand, Category, Hand};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

fn hole(s: &str) -> [Card; 2] {
    let v = cards(s);
    [v[0], v[1]]
}

fn five(s: &str) -> Hand {
    let v = cards(s);
    Hand::new([v[0], v[1], v[2], v[3], v[4]])
}

// (board, first hole cards, second hole cards, how the first compares to the second)
const SHOWDOWNS: &[(&str, &str, &str, Ordering)] = &[
    // the higher card wins
    ("9s 4c 5h 6s 7h", "Kc Qc", "Ac 2c", Ordering::Less),
    // next highest card breaks a tie at the top
    ("Js 2c 5h 9s 10h", "Ac 8c", "Ad 7c", Ordering::Greater),
    // board plays for both
    ("Js 10c 9h 8s 6h", "5c 4c", "3c 2c", Ordering::Equal),
    // straight over ace high
    ("2s 4c 5h 6d 7c", "2c 3c", "Ac Kc", Ordering::Greater),
    ("2s 3d 5h 6d 7c", "2c Ac", "3c 4c", Ordering::Less),
    // pair kicker decides
    ("2s 4c 5h 6d 7c", "2c Ac", "2h Kc", Ordering::Greater),
    // pair kickers below the board don't play
    ("2s Kc Qh Jd 7c", "Kd 3c", "Ks 6c", Ordering::Equal),
    ("2s 4c 5h 6d 7c", "5c 6s", "2c 7s", Ordering::Less),
    // second pair decides two pair
    ("2c 4s 6d 8h 10c", "10s 4c", "10h 2s", Ordering::Greater),
    // kicker decides equal two pair
    ("Kc 9s 9h 3d 2s", "Ks 4c", "Kh 5c", Ordering::Less),
    ("Kc 9s 9h 5d 2s", "Ks 4c", "Kh 3c", Ordering::Equal),
    ("Kc Qs 5h 4h 3h", "Ks Kh", "Qc Qh", Ordering::Greater),
    ("10c 10s Jh 6d 2c", "10d Kd", "10h Ac", Ordering::Less),
    ("10c 10s Jh 6d Kc", "10d 3d", "10h 2c", Ordering::Equal),
    // straight over trips
    ("10c 9s 8d Ah As", "Ac Ks", "6c 7c", Ordering::Less),
    ("10c 9s 8d 7h As", "Jc 2s", "6c Ac", Ordering::Greater),
    ("10c 9s 8d 7h As", "6c 2s", "6s Ac", Ordering::Equal),
    // flush over straight
    ("5c 6c 7c As Qs", "3c 2c", "8h 9h", Ordering::Greater),
    ("7s 4s 8s Kd Kc", "Ks Qs", "As 2s", Ordering::Less),
    // full house: trips decide, then the pair
    ("As Ks Jc Jh 3d", "Ac Jd", "Kc Kd", Ordering::Less),
    ("As Ac Ah Jc 10c", "Jh 2c", "10h Kc", Ordering::Greater),
    ("3s 3c 2h 2c 4d", "3d As", "3h 5c", Ordering::Equal),
    ("2s 2c Qs 2h 9d", "2d 3h", "Ks Ac", Ordering::Greater),
    // quads kicker
    ("2s 2c 7s 2h 2d", "Kd Qh", "3s As", Ordering::Less),
    ("2s 2c As 2h 2d", "Kd Qh", "3s 4c", Ordering::Equal),
    // straight flushes
    ("Qs Js 10s 2c 3h", "Ks As", "9s 8s", Ordering::Greater),
    ("2s 3s 4s Qc Jc", "5s 6s", "As Ks", Ordering::Greater),
    ("As 2s 3s 4s 5s", "6c 7c", "Ah Ac", Ordering::Equal),
];

#[test]
fn showdown_comparisons_follow_hand_rankings() {
    for (i, &(board, a, b, expected)) in SHOWDOWNS.iter().enumerate() {
        let board = cards(board);
        let ha = best_hand(&board, hole(a));
        let hb = best_hand(&board, hole(b));
        assert_eq!(
            ha.cmp(&hb),
            expected,
            "case {}: {} ({:?}) vs {} ({:?})",
            i,
            ha,
            ha.cards(),
            hb,
            hb.cards()
        );
        // the reverse comparison must agree
        assert_eq!(hb.cmp(&ha), expected.reverse(), "case {} reversed", i);
    }
}

#[test]
fn descriptions_name_the_deciding_ranks() {
    let expected = [
        ("2s 3h 4h 5h 7h", "seven high"),
        ("Js Ah Kh 10h 9h", "ace high"),
        ("2s 2h 4h 5h 7h", "pair of deuces"),
        ("As 6h Kh Qh 6s", "pair of sixes"),
        ("2s 6h 2h Ah 6s", "two pair, sixes and deuces"),
        ("As 2s Kh 2h Ks", "two pair, kings and deuces"),
        ("7c 7d 7h Ah Ks", "three of a kind, sevens"),
        ("6c 7d 8h 9h 10s", "ten-high straight"),
        ("2c 9c Jc 4c 6c", "jack-high flush"),
        ("9s 9h 3d 3c 3s", "full house, threes over nines"),
        ("Qs Qh Qd Qc 3s", "four of a kind, queens"),
        ("5d 6d 7d 8d 9d", "nine-high straight flush"),
        ("10h Jh Qh Kh Ah", "royal flush"),
    ];
    for (hand, description) in expected {
        assert_eq!(five(hand).to_string(), description, "{}", hand);
    }
}

#[test]
fn ace_low_straight_is_five_high() {
    let wheel = five("Ac 2d 3h 4s 5c");
    assert_eq!(wheel.category(), Category::Straight);
    assert_eq!(wheel.to_string(), "five-high straight");
    assert!(wheel < five("2c 3d 4h 5s 6c"));
    assert!(wheel > five("Ac Ad Ah Ks Qc"));

    let steel_wheel = five("As 2s 3s 4s 5s");
    assert_eq!(steel_wheel.category(), Category::StraightFlush);
    assert_eq!(steel_wheel.to_string(), "five-high straight flush");
}

#[test]
fn every_category_beats_every_lower_category() {
    let ladder = [
        five("2c 4d 6h 8s 10c"),
        five("2c 2d 6h 8s 10c"),
        five("2c 2d 6h 6s 10c"),
        five("2c 2d 2h 8s 10c"),
        five("Ac 2d 3h 4s 5c"),
        five("2c 4c 6c 8c 10c"),
        five("2c 2d 2h 3s 3c"),
        five("2c 2d 2h 2s 3c"),
        five("As 2s 3s 4s 5s"),
    ];
    // strongest hand of each lower category still loses to the weakest above
    let tops = [
        five("Ac Kd Qh Js 9c"),
        five("Ac Ad Kh Qs Jc"),
        five("Ac Ad Kh Ks Qc"),
        five("Ac Ad Ah Ks Qc"),
        five("10c Jd Qh Ks Ac"),
        five("Ac Kc Qc Jc 9c"),
        five("Ac Ad Ah Ks Kc"),
        five("Ac Ad Ah As Kc"),
    ];
    for (i, weak) in ladder.iter().enumerate().skip(1) {
        assert!(*weak > tops[i - 1], "{} should beat {}", weak, tops[i - 1]);
        for lower in &ladder[..i] {
            assert!(weak > lower);
            assert_ne!(weak, lower);
        }
    }
}

#[test]
fn hands_differing_only_by_suit_tie() {
    let a = five("Ac Kd Qh Js 9c");
    let b = five("Ad Kh Qs Jc 9d");
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Equal);
    assert_ne!(a.cards(), b.cards());
}

#[test]
fn best_hand_prefers_flush_across_seven_cards() {
    let board = vec![
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let hand = best_hand(&board, [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Diamonds),
    ]);
    assert_eq!(hand.category(), Category::Flush);
    assert_eq!(hand.to_string(), "ace-high flush");
}

#[test]
#[should_panic]
fn fewer_than_five_cards_is_fatal() {
    best_hand(&cards("2c 3d"), hole("4h 5s"));
}
