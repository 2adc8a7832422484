//! Tables keyed by name, created on first use.
//!
//! Each table is an independent [`Table`]; the lobby only routes commands and
//! collects what should be said publicly and privately.

use std::collections::BTreeMap;

use tablestakes_engine::logger::HandRecord;
use tablestakes_engine::options::GameOptions;
use tablestakes_engine::player::UserId;
use tablestakes_engine::table::Table;
use tracing::debug;

use crate::validation::{help_lines, TableCommand};

/// Table used by lines that do not name one.
pub const DEFAULT_TABLE: &str = "main";

/// What a command produced.
#[derive(Debug, Default, PartialEq)]
pub struct Reply {
    /// Narrative for everyone at the table, in order
    pub public: Vec<String>,
    /// Messages for single players, sent after the public lines
    pub private: Vec<(UserId, String)>,
    /// The hand this command finished, if any
    pub finished_hand: Option<HandRecord>,
}

#[derive(Debug)]
pub struct Lobby {
    tables: BTreeMap<String, Table>,
    options: GameOptions,
    seed: Option<u64>,
}

impl Lobby {
    /// `options` seed every new table. With a seed, the n-th table created
    /// shuffles from `seed + n`.
    pub fn new(options: GameOptions, seed: Option<u64>) -> Self {
        Self {
            tables: BTreeMap::new(),
            options,
            seed,
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Runs `command` from `user` at the named table.
    pub fn handle(&mut self, table: &str, user: &UserId, command: &TableCommand) -> Reply {
        let created = self.tables.len() as u64;
        let options = &self.options;
        let seed = self.seed.map(|s| s.wrapping_add(created));
        let t = self.tables.entry(table.to_string()).or_insert_with(|| {
            debug!(table, "opening table");
            Table::new(options.clone(), seed)
        });
        let before = t.game().last_hand().map(|r| r.hand_id.clone());

        let result = match command {
            TableCommand::NewGame => t.new_game(user),
            TableCommand::Join => t.join(user),
            TableCommand::Start => t.start(user),
            TableCommand::Deal => t.deal(user),
            TableCommand::Call => t.call(user),
            TableCommand::Raise(amount) => t.raise_bet(user, *amount),
            TableCommand::Check => t.check(user),
            TableCommand::Fold => t.fold(user),
            TableCommand::AllIn => t.all_in(user),
            TableCommand::Count => t.chip_count(),
            TableCommand::Options => t.options(),
            TableCommand::Set { name, value } => t.set_option(name, *value),
            TableCommand::Help => Ok(help_lines()),
        };

        let mut reply = Reply::default();
        match result {
            Ok(lines) => {
                if *command == TableCommand::Deal {
                    reply.private = t.game().hole_card_messages();
                }
                reply.public = lines;
            }
            Err(e) => reply.public.push(e.to_string()),
        }
        reply.finished_hand = t
            .game()
            .last_hand()
            .filter(|r| Some(&r.hand_id) != before.as_ref())
            .cloned();
        reply
    }
}
