//! Arena snapshot model shared by the decision engine and the bot binary.
//!
//! `arena-core` turns one request (dimensions, raw player records and the
//! acting player's identity) into an [`Arena`]: a grid that knows which
//! player stands on each cell, the typed player list, and the acting player.
//! It also owns the orientation-relative geometry every tactical check is
//! expressed in, and the [`rng::RandomSource`] capability used for
//! tie-breaking.
//!
//! Nothing here survives a decision call; an arena is rebuilt per request.
pub mod arena;
pub mod error;
pub mod geometry;
pub mod player;
pub mod request;
pub mod rng;
pub mod snapshot;

pub use arena::Arena;
pub use error::{ArenaError, Result};
pub use geometry::{Offset, Orientation, Position, Rotation};
pub use player::{Player, PlayerId};
pub use request::{ArenaRequest, RawArena, RawPlayer, SelfLink};
pub use rng::{EntropyRng, PcgRng, RandomSource, ScriptedRng};
pub use snapshot::build_arena;
