//! Input parsing for session scripts.
//!
//! A session line has the shape `[#table] <user>: <message>`. Messages that
//! start with `!` are table commands; anything else is chat and ignored.
//! Malformed command arguments are reported back to the table as narrative,
//! the same way the table reports rejected commands.

/// Commands a player can send to a table, with the help text shown by `!help`.
pub const COMMANDS: [(&str, &str); 13] = [
    ("!newgame", "Starts a new game, allowing players to join."),
    ("!join", "Lets you join a game that is about to begin"),
    ("!start", "Begins a game after all players have joined"),
    ("!deal", "Deals the hole cards to all the players"),
    ("!call", "Matches the current bet"),
    ("!raise", "Increase the size of current bet"),
    ("!check", "Bet no money"),
    ("!fold", "Discard your hand and forfeit the pot"),
    ("!help", "Show the list of commands"),
    ("!options", "Show the list of options and their current values"),
    ("!set", "Set the value of an option"),
    ("!count", "Shows how many chips each player has left"),
    ("!all-in", "Bets the entirety of your remaining chips"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    NewGame,
    Join,
    Start,
    Deal,
    Call,
    /// Raise by this many chips; the sign is checked by the table
    Raise(i64),
    Check,
    Fold,
    AllIn,
    Count,
    Options,
    Set { name: String, value: i64 },
    Help,
}

/// Result type for parsing a chat message.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A well-formed table command
    Command(TableCommand),
    /// Not addressed to the table
    Chat,
    /// A command with bad arguments; the message explains the problem
    Invalid(String),
}

/// One line of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLine<'a> {
    /// Table name without the `#`, if the line names one
    pub table: Option<&'a str>,
    pub user: &'a str,
    pub message: &'a str,
}

/// Splits `[#table] <user>: <message>`. Returns `None` for lines without a
/// user.
///
/// # Example
///
/// ```rust
/// # use tablestakes_cli::validation::parse_session_line;
/// let line = parse_session_line("#high alice: !raise 20").unwrap();
/// assert_eq!(line.table, Some("high"));
/// assert_eq!(line.user, "alice");
/// assert_eq!(line.message, "!raise 20");
/// ```
pub fn parse_session_line(line: &str) -> Option<SessionLine<'_>> {
    let line = line.trim();
    let (table, rest) = match line.strip_prefix('#') {
        Some(tagged) => {
            let (name, rest) = tagged.split_once(char::is_whitespace)?;
            (Some(name), rest.trim_start())
        }
        None => (None, line),
    };
    let (user, message) = rest.split_once(':')?;
    let user = user.trim();
    if user.is_empty() || user.contains(char::is_whitespace) {
        return None;
    }
    Some(SessionLine {
        table: table.filter(|t| !t.is_empty()),
        user,
        message: message.trim(),
    })
}

/// Parses a chat message into a table command.
///
/// # Example
///
/// ```rust
/// # use tablestakes_cli::validation::{parse_table_command, ParseResult, TableCommand};
/// assert_eq!(
///     parse_table_command("!raise 50"),
///     ParseResult::Command(TableCommand::Raise(50))
/// );
/// assert_eq!(parse_table_command("nice hand"), ParseResult::Chat);
/// ```
pub fn parse_table_command(message: &str) -> ParseResult {
    let tokens: Vec<&str> = message.split_whitespace().collect();
    let Some(&command) = tokens.first() else {
        return ParseResult::Chat;
    };
    if !command.starts_with('!') {
        return ParseResult::Chat;
    }

    let parsed = match command {
        "!newgame" => TableCommand::NewGame,
        "!join" => TableCommand::Join,
        "!start" => TableCommand::Start,
        "!deal" => TableCommand::Deal,
        "!call" => TableCommand::Call,
        "!check" => TableCommand::Check,
        "!fold" => TableCommand::Fold,
        "!all-in" => TableCommand::AllIn,
        "!count" => TableCommand::Count,
        "!options" => TableCommand::Options,
        "!help" => TableCommand::Help,
        "!raise" => {
            let Some(amount) = tokens.get(1) else {
                return ParseResult::Invalid(
                    "Please follow !raise with the amount that you would like to raise it by."
                        .to_string(),
                );
            };
            match amount.parse::<i64>() {
                Ok(amount) => TableCommand::Raise(amount),
                Err(_) => {
                    return ParseResult::Invalid(format!(
                        "Please follow !raise with an integer. '{}' is not an integer.",
                        amount
                    ));
                }
            }
        }
        "!set" => match tokens[1..] {
            [] => {
                return ParseResult::Invalid(
                    "You must specify an option and value to set when using the !set command."
                        .to_string(),
                );
            }
            [_] => {
                return ParseResult::Invalid(
                    "You must specify a new value after the name of an option when using the !set command."
                        .to_string(),
                );
            }
            [name, value, ..] => match value.parse::<i64>() {
                Ok(value) => TableCommand::Set {
                    name: name.to_string(),
                    value,
                },
                Err(_) => {
                    return ParseResult::Invalid(format!(
                        "{} must be set to an integer, and '{}' is not a valid integer.",
                        name, value
                    ));
                }
            },
        },
        _ => {
            return ParseResult::Invalid(format!(
                "{} is not a valid command. Message !help to see the list of commands.",
                message.trim()
            ));
        }
    };
    ParseResult::Command(parsed)
}

/// The `!help` listing: one aligned line per command, sorted by name.
pub fn help_lines() -> Vec<String> {
    let width = COMMANDS.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
    let mut commands = COMMANDS.to_vec();
    commands.sort_by_key(|&(c, _)| c);
    commands
        .into_iter()
        .map(|(command, info)| format!("{command:<width$}  {info}"))
        .collect()
}
