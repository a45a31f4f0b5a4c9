//! Snapshot construction errors.
//!
//! Every variant is a data-contract violation by the caller. None of them is
//! retried: the request is rejected and no action is decided.

pub type Result<T> = std::result::Result<T, ArenaError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// The self identity does not match any player in the snapshot.
    #[error("self player '{0}' is not present in the arena state")]
    UnknownSelfPlayer(String),

    /// A player's orientation code is not one of `N`, `S`, `E`, `W`.
    #[error("player '{player}' has unrecognised orientation code '{code}'")]
    InvalidOrientationCode { player: String, code: String },

    /// Width or height is not a positive grid size.
    #[error("arena dimensions {width}x{height} are not a valid grid")]
    InvalidDimensions { width: i64, height: i64 },
}

impl ArenaError {
    /// Stable identifier for logs and rejection bodies.
    pub const fn error_code(&self) -> &'static str {
        match self {
            ArenaError::UnknownSelfPlayer(_) => "ARENA_UNKNOWN_SELF_PLAYER",
            ArenaError::InvalidOrientationCode { .. } => "ARENA_INVALID_ORIENTATION_CODE",
            ArenaError::InvalidDimensions { .. } => "ARENA_INVALID_DIMENSIONS",
        }
    }
}
