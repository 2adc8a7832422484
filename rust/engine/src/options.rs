use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Chips;
use crate::pot::OddChipRule;

/// Settable table options as `(name, description)`, in display order.
pub const OPTIONS: [(&str, &str); 4] = [
    ("blind", "The current price of the small blind"),
    ("buy-in", "The amount of money all players start out with"),
    ("raise-delay", "The number of minutes before blinds double"),
    ("starting-blind", "The starting price of the small blind"),
];

/// Per-table settings. The big blind is always twice `blind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    pub blind: Chips,
    pub buy_in: Chips,
    /// Minutes between blind doublings; 0 turns doubling off
    pub raise_delay: u64,
    pub starting_blind: Chips,
    #[serde(default)]
    pub odd_chip: OddChipRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            blind: 5,
            buy_in: 500,
            raise_delay: 30,
            starting_blind: 5,
            odd_chip: OddChipRule::Burn,
        }
    }
}

impl GameOptions {
    pub fn get(&self, name: &str) -> Option<u64> {
        match name {
            "blind" => Some(self.blind),
            "buy-in" => Some(self.buy_in),
            "raise-delay" => Some(self.raise_delay),
            "starting-blind" => Some(self.starting_blind),
            _ => None,
        }
    }

    pub fn set(&mut self, name: &str, value: i64) -> Result<(), GameError> {
        if self.get(name).is_none() {
            return Err(GameError::UnknownOption(name.to_string()));
        }
        let Ok(value) = u64::try_from(value) else {
            return Err(GameError::NegativeOption(name.to_string()));
        };
        match name {
            "blind" => self.blind = value,
            "buy-in" => self.buy_in = value,
            "raise-delay" => self.raise_delay = value,
            _ => self.starting_blind = value,
        }
        Ok(())
    }

    /// One aligned line per option: name, current value, description.
    pub fn describe(&self) -> Vec<String> {
        let name_width = OPTIONS.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        let values: Vec<String> = OPTIONS
            .iter()
            .map(|(n, _)| self.get(n).unwrap_or_default().to_string())
            .collect();
        let value_width = values.iter().map(String::len).max().unwrap_or(0);
        OPTIONS
            .iter()
            .zip(values)
            .map(|((name, desc), value)| {
                format!("{name:<name_width$}  {value:<value_width$}  {desc}")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_rejects_unknown_and_negative() {
        let mut o = GameOptions::default();
        assert_eq!(
            o.set("ante", 3),
            Err(GameError::UnknownOption("ante".into()))
        );
        assert_eq!(
            o.set("blind", -1),
            Err(GameError::NegativeOption("blind".into()))
        );
        o.set("buy-in", 1000).unwrap();
        assert_eq!(o.buy_in, 1000);
    }

    #[test]
    fn describe_lists_every_option() {
        let lines = GameOptions::default().describe();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("buy-in"));
        assert!(lines[1].contains("500"));
    }
}
