use thiserror::Error;

/// Contradictory or out-of-range data rejected before any decision runs.
/// The engine never clamps bad input on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} of {owner} must be a non-negative number, got {value}")]
    NegativeAmount {
        field: &'static str,
        owner: String,
        value: f64,
    },

    #[error("{field} of {owner} must be within 0-100, got {value}")]
    OutOfRange {
        field: &'static str,
        owner: String,
        value: f64,
    },

    #[error("player {player_id} appears more than once on team {team_id}")]
    DuplicatePlayer { team_id: u32, player_id: u32 },

    #[error("team {team_id} appears more than once in the league week")]
    DuplicateTeam { team_id: u32 },

    #[error("offer {offer_id} has a non-positive amount {amount}")]
    NonPositiveOffer { offer_id: u32, amount: f64 },
}

/// Rejects negative and non-finite money values.
pub fn check_amount(
    field: &'static str,
    owner: impl FnOnce() -> String,
    value: f64,
) -> Result<(), InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::NegativeAmount {
            field,
            owner: owner(),
            value,
        })
    }
}

/// Rejects ratings and traits outside the 0-100 scale.
pub fn check_scale(
    field: &'static str,
    owner: impl FnOnce() -> String,
    value: f64,
) -> Result<(), InputError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            owner: owner(),
            value,
        })
    }
}
