//! Errors surfaced by the decision engine.
use arena_core::ArenaError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TacticsError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TacticsError {
    /// The request could not be turned into an arena.
    #[error(transparent)]
    Arena(#[from] ArenaError),

    /// The cascade ended without committing an action. The final rule always
    /// matches, so this means the tree was assembled incorrectly.
    #[error("decision cascade finished without committing an action")]
    NoDecision,
}

impl TacticsError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            TacticsError::Arena(inner) => inner.error_code(),
            TacticsError::NoDecision => "TACTICS_NO_DECISION",
        }
    }
}
