//! The command surface offered to a host.
//!
//! Every method validates its preconditions (game phase, membership, turn,
//! chips) and either rejects the command with a [`GameError`] without
//! touching state, or forwards it to the [`Game`] and returns its narrative.

use crate::errors::GameError;
use crate::game::{Game, GameState};
use crate::options::GameOptions;
use crate::player::{Chips, Player, PlayerAction, UserId};
use crate::rules::validate_action;

/// Narrative lines for a successful command, or the reason it was refused.
pub type CommandResult = Result<Vec<String>, GameError>;

/// One table: a [`Game`] behind precondition checks.
#[derive(Debug)]
pub struct Table {
    game: Game,
}

impl Table {
    pub fn new(options: GameOptions, seed: Option<u64>) -> Self {
        Self {
            game: Game::new(options, seed),
        }
    }

    pub fn with_game(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn new_game(&mut self, user: &UserId) -> CommandResult {
        match self.game.state() {
            GameState::NoGame => Ok(self.game.new_game(user.clone())),
            GameState::Waiting => Err(GameError::GameWaiting),
            _ => Err(GameError::GameInProgress),
        }
    }

    pub fn join(&mut self, user: &UserId) -> CommandResult {
        match self.game.state() {
            GameState::NoGame => Err(GameError::NoGameToJoin),
            GameState::Waiting => {
                if self.game.add_player(user.clone()) {
                    Ok(vec![
                        format!("{} has joined the game!", user),
                        "Message !join to join the game, or !start to start the game."
                            .to_string(),
                    ])
                } else {
                    Err(GameError::AlreadyJoined {
                        user: user.to_string(),
                    })
                }
            }
            _ => Err(GameError::JoinClosed {
                user: user.to_string(),
            }),
        }
    }

    pub fn start(&mut self, user: &UserId) -> CommandResult {
        let players = self.game.players().len();
        let buy_in = self.game.options().buy_in;
        match self.game.state() {
            GameState::NoGame => Err(GameError::NoGameToStart),
            GameState::Waiting if !self.game.is_player(user) => Err(GameError::NotJoined {
                user: user.to_string(),
            }),
            GameState::Waiting if players < 2 => Err(GameError::NotEnoughPlayers),
            // every chip at the table has to fit in one sum
            GameState::Waiting if buy_in.checked_mul(players as Chips).is_none() => {
                Err(GameError::BuyInTooLarge { buy_in, players })
            }
            GameState::Waiting => Ok(self.game.start()),
            _ => Err(GameError::AlreadyStarted {
                user: user.to_string(),
            }),
        }
    }

    pub fn deal(&mut self, user: &UserId) -> CommandResult {
        match self.game.state() {
            GameState::NoGame => Err(GameError::NoGameToDeal),
            GameState::Waiting => Err(GameError::NotStarted { action: "deal" }),
            GameState::NoHands if self.game.dealer().user() != user => {
                Err(GameError::NotDealer {
                    user: user.to_string(),
                    dealer: self.game.dealer().name().to_string(),
                })
            }
            GameState::NoHands => Ok(self.game.deal_hands()),
            _ => Err(GameError::AlreadyDealt),
        }
    }

    pub fn check(&mut self, user: &UserId) -> CommandResult {
        self.ensure_action(user, "check", PlayerAction::Check)?;
        Ok(self.game.check())
    }

    pub fn call(&mut self, user: &UserId) -> CommandResult {
        self.ensure_action(user, "call", PlayerAction::Call)?;
        Ok(self.game.call())
    }

    /// Raises by `amount` chips above the current bet. The amount arrives
    /// signed so that a negative number from the host is refused here.
    pub fn raise_bet(&mut self, user: &UserId, amount: i64) -> CommandResult {
        self.ensure_turn(user, "raise")?;
        let amount = match u64::try_from(amount) {
            Ok(a) if a > 0 => a,
            _ => return Err(GameError::RaiseNotPositive { amount }),
        };
        self.ensure_action(user, "raise", PlayerAction::Raise(amount))?;
        Ok(self.game.raise_bet(amount))
    }

    pub fn fold(&mut self, user: &UserId) -> CommandResult {
        self.ensure_action(user, "fold", PlayerAction::Fold)?;
        Ok(self.game.fold())
    }

    pub fn all_in(&mut self, user: &UserId) -> CommandResult {
        self.ensure_action(user, "go all in", PlayerAction::AllIn)?;
        Ok(self.game.all_in())
    }

    pub fn chip_count(&self) -> CommandResult {
        match self.game.state() {
            GameState::NoGame | GameState::Waiting => Err(GameError::NoChipCount),
            _ => Ok(self.game.chip_count()),
        }
    }

    pub fn options(&self) -> CommandResult {
        Ok(self.game.options().describe())
    }

    pub fn set_option(&mut self, name: &str, value: i64) -> CommandResult {
        self.game.options_mut().set(name, value)?;
        Ok(vec![format!("The {} is now set to {}.", name, value)])
    }

    // The acting player, provided a hand is running and it is `user`'s turn.
    fn ensure_turn(&self, user: &UserId, verb: &'static str) -> Result<&Player, GameError> {
        match self.game.state() {
            GameState::NoGame => return Err(GameError::NoGame),
            GameState::Waiting => return Err(GameError::NotStarted { action: verb }),
            _ => {}
        }
        if !self.game.is_player(user) {
            return Err(GameError::NotPlaying {
                action: verb,
                user: user.to_string(),
            });
        }
        let Some(current) = self.game.current_player() else {
            return Err(GameError::HandsNotDealt { action: verb });
        };
        if current.user() != user {
            return Err(GameError::NotYourTurn {
                action: verb,
                user: user.to_string(),
                current: current.name().to_string(),
            });
        }
        Ok(current)
    }

    fn ensure_action(
        &self,
        user: &UserId,
        verb: &'static str,
        action: PlayerAction,
    ) -> Result<(), GameError> {
        let current = self.ensure_turn(user, verb)?;
        validate_action(current, self.game.current_bet(), action)
    }
}
