use thiserror::Error;

use crate::player::Chips;

/// A command that was rejected before touching game state.
///
/// The `Display` text is addressed to the player who sent the command and
/// says what to do instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("There is already a game in progress, you can't start a new game.")]
    GameInProgress,
    #[error(
        "There is already a game in progress, you can't start a new game. \
         It still hasn't started yet, so you can still message !join to join that game."
    )]
    GameWaiting,
    #[error("No game has been started yet. Message !newgame to start one.")]
    NoGame,
    #[error("No game has been started yet for you to join. Message !newgame to start a new game.")]
    NoGameToJoin,
    #[error("Message !newgame if you would like to start a new game.")]
    NoGameToStart,
    #[error("No game has been started for you to deal. Message !newgame to start one.")]
    NoGameToDeal,
    #[error("The game is already in progress, {user}. You're not allowed to join right now.")]
    JoinClosed { user: String },
    #[error("You've already joined the game {user}!")]
    AlreadyJoined { user: String },
    #[error("The game has already started, {user}. It can't be started twice.")]
    AlreadyStarted { user: String },
    #[error(
        "You are not a part of that game yet, {user}. \
         Please message !join if you are interested in playing."
    )]
    NotJoined { user: String },
    #[error("The game must have at least two players before it can be started.")]
    NotEnoughPlayers,
    #[error("A buy-in of ${buy_in} for {players} players is more money than the table can hold. Message !set buy-in with a smaller amount.")]
    BuyInTooLarge { buy_in: Chips, players: usize },
    #[error("You can't {action} because the game hasn't started yet.")]
    NotStarted { action: &'static str },
    #[error("The cards have already been dealt.")]
    AlreadyDealt,
    #[error("You aren't the dealer, {user}. Please wait for {dealer} to !deal.")]
    NotDealer { user: String, dealer: String },
    #[error("You can't {action}, because you're not playing, {user}.")]
    NotPlaying { action: &'static str, user: String },
    #[error("You can't {action} because the hands haven't been dealt yet.")]
    HandsNotDealt { action: &'static str },
    #[error("You can't {action}, {user}, because it's {current}'s turn.")]
    NotYourTurn {
        action: &'static str,
        user: String,
        current: String,
    },
    #[error("You can't check, {user}, because you need to put in ${to_call} to call.")]
    MustCall { user: String, to_call: Chips },
    #[error("You can only raise by a positive amount, and {amount} is not positive.")]
    RaiseNotPositive { amount: i64 },
    #[error("You don't have enough money to raise the current bet of ${current_bet}.")]
    CannotAffordRaise { current_bet: Chips },
    #[error("You don't have enough money to raise by ${amount}. The most you can raise it by is ${max}.")]
    RaiseTooLarge { amount: Chips, max: Chips },
    #[error("You can't request a chip count because the game hasn't started yet.")]
    NoChipCount,
    #[error("'{0}' is not an option. Message !options to see the list of options.")]
    UnknownOption(String),
    #[error("Cannot set {0} to a negative value!")]
    NegativeOption(String),
}
