//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tablestakes",
    version,
    about = "Texas Hold'em tables driven by chat-style commands"
)]
pub struct TablestakesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a session of table commands from a script or stdin
    Play {
        /// Seed for shuffling; overrides the configured seed
        #[arg(long)]
        seed: Option<u64>,
        /// File of `[#table] <user>: <message>` lines (default: stdin)
        #[arg(long)]
        script: Option<PathBuf>,
        /// Write finished hands to this JSONL file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Show the best five-card hand among 5 to 7 cards (e.g. As Kd 10h)
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        for args in [
            vec!["tablestakes", "cfg"],
            vec!["tablestakes", "play"],
            vec!["tablestakes", "play", "--seed", "7", "--script", "s.txt", "--history", "h.jsonl"],
            vec!["tablestakes", "eval", "As", "Kd", "Qc", "Jh", "10s"],
        ] {
            assert!(TablestakesCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn seed_must_be_a_number() {
        assert!(TablestakesCli::try_parse_from(["tablestakes", "play", "--seed", "x"]).is_err());
        assert!(TablestakesCli::try_parse_from(["tablestakes", "eval"]).is_err());
    }
}
