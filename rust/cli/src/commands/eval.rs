//! # Eval Command
//!
//! Finds the best five-card hand among five to seven cards given on the
//! command line, e.g. `tablestakes eval Qh Jh 10h 2c 7d Ah Kh`.

use std::collections::HashSet;
use std::io::Write;

use tablestakes_engine::cards::Card;
use tablestakes_engine::hand::best_hand;

use crate::error::CliError;

/// Handle the eval command.
///
/// The last two cards are treated as hole cards and the rest as the board;
/// since every five-card subset is considered the split does not change the
/// result.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for unparsable or repeated cards, or a
/// card count outside 5..=7.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = cards
        .iter()
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<Card>, _>>()?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|&&c| !seen.insert(c)) {
        return Err(CliError::InvalidInput(format!("{} appears more than once", dup)));
    }

    let (board, hole) = cards.split_at(cards.len() - 2);
    let hand = best_hand(board, [hole[0], hole[1]]);
    let shown: Vec<String> = hand.cards().iter().rev().map(Card::to_string).collect();
    writeln!(out, "{}", shown.join("  "))?;
    writeln!(out, "{}", hand)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cards: &[&str]) -> Result<String, CliError> {
        let cards: Vec<String> = cards.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_eval_command(&cards, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_cards_most_significant_first_then_description() {
        let output = eval(&["9s", "9h", "3d", "3c", "3s"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "♠3  ♣3  ♦3  ♥9  ♠9");
        assert_eq!(lines[1], "full house, threes over nines");
    }

    #[test]
    fn picks_the_best_five_of_seven() {
        let output = eval(&["Qh", "Jh", "10h", "2c", "7d", "Ah", "Kh"]).unwrap();
        assert!(output.ends_with("royal flush\n"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(eval(&["As", "Kd"]), Err(CliError::InvalidInput(_))));
        assert!(matches!(
            eval(&["As", "Kd", "Qc", "Jh", "Xx"]),
            Err(CliError::InvalidInput(_))
        ));
        let err = eval(&["As", "Kd", "Qc", "Jh", "As"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: ♠A appears more than once");
    }
}
