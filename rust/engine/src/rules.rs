use crate::errors::GameError;
use crate::player::{Chips, Player, PlayerAction as A};

/// Checks a betting action against the acting player's chips.
///
/// `to_match` is the total the player must have committed this round. Turn
/// order and game phase are checked by the caller; this only covers the
/// money rules.
///
/// # Errors
///
/// - [`GameError::MustCall`] when checking while behind the bet
/// - [`GameError::CannotAffordRaise`] when the bet already covers the stack
/// - [`GameError::RaiseTooLarge`] when the raise exceeds the stack
///
/// # Examples
///
/// ```
/// use tablestakes_engine::errors::GameError;
/// use tablestakes_engine::player::{Player, PlayerAction, SeatId, UserId};
/// use tablestakes_engine::rules::validate_action;
///
/// let mut p = Player::new(SeatId(0), UserId::new("ada"));
/// p.set_balance(100);
///
/// assert!(validate_action(&p, 0, PlayerAction::Check).is_ok());
/// assert_eq!(
///     validate_action(&p, 40, PlayerAction::Raise(80)),
///     Err(GameError::RaiseTooLarge { amount: 80, max: 60 })
/// );
/// ```
pub fn validate_action(player: &Player, to_match: Chips, action: A) -> Result<(), GameError> {
    match action {
        A::Check => {
            if player.cur_bet() == to_match {
                Ok(())
            } else {
                Err(GameError::MustCall {
                    user: player.name().to_string(),
                    to_call: to_match.saturating_sub(player.cur_bet()),
                })
            }
        }
        A::Raise(amount) => {
            if amount == 0 {
                Err(GameError::RaiseNotPositive { amount: 0 })
            } else if to_match >= player.max_bet() {
                Err(GameError::CannotAffordRaise {
                    current_bet: to_match,
                })
            } else if to_match + amount > player.max_bet() {
                Err(GameError::RaiseTooLarge {
                    amount,
                    max: player.max_bet() - to_match,
                })
            } else {
                Ok(())
            }
        }
        A::Fold | A::Call | A::AllIn => Ok(()),
    }
}
