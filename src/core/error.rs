//! Error types.
//!
//! Only dealing can fail. Everything a player does at runtime (tapping a
//! matched card, tapping after time runs out) is a no-op, not an error.

use thiserror::Error;

/// Errors raised before a game starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The configuration cannot produce a playable deck.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl MatchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
