use crate::body::BodyId;

/// Alias for `Result<T, RigelError>`.
pub type RigelResult<T> = Result<T, RigelError>;

/// Errors that can occur in the simulation model.
#[derive(Debug, thiserror::Error)]
pub enum RigelError {
    /// The tank does not hold enough fuel for the attempted trip.
    #[error("insufficient fuel: need {required:.1}, have {available:.1}")]
    InsufficientFuel {
        /// Fuel the trip would cost.
        required: f64,
        /// Fuel currently in the tank.
        available: f64,
    },

    /// An amount that must be strictly positive was zero or below.
    #[error("{what} must be positive, got {amount}")]
    NonPositiveAmount {
        /// What kind of amount was rejected.
        what: &'static str,
        /// The offending value.
        amount: f64,
    },

    /// The requested body ID does not exist in the universe.
    #[error("unknown body: {0}")]
    UnknownBody(BodyId),

    /// Universe generation was asked for zero bodies.
    #[error("cannot generate an empty universe")]
    EmptyUniverse,
}
