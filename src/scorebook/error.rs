//! Notation errors raised while reading a half-inning.

use thiserror::Error;

/// A problem with one shorthand token.
///
/// None of these propagate out of the simulator: an `Unrecognized` token ends
/// the half-inning early and is reported in
/// [`HalfInning::halted_by`](super::HalfInning::halted_by), the others are
/// collected in [`HalfInning::anomalies`](super::HalfInning::anomalies).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The token matches none of the known play codes.
    #[error("Unrecognized play '{token}' (batter: {batter})")]
    Unrecognized { token: String, batter: String },

    /// The `<n>R` annotation claims more runs than there were people who could
    /// score (runners on base plus the batter).
    #[error("Play '{token}' claims {claimed}R with only {runners_on_base} on base")]
    ExcessRuns {
        token: String,
        claimed: u32,
        runners_on_base: u32,
    },

    /// A play was recorded after the side was already retired.
    #[error("Play '{token}' recorded after the third out")]
    AfterThirdOut { token: String },
}

/// Returned by [`Play::parse`](super::Play::parse) when a token matches none of
/// the known play codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized play '{token}'")]
pub struct ParsePlayError {
    pub token: String,
}

impl ParsePlayError {
    /// Names the batter who was up when the token was read.
    pub fn at_bat(self, batter: &str) -> NotationError {
        NotationError::Unrecognized {
            token: self.token,
            batter: batter.to_string(),
        }
    }
}
