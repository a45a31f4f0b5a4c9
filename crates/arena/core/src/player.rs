//! Typed player entities.

use std::fmt;

use crate::geometry::{self, Offset, Orientation, Position, Rotation};

/// Opaque player identity, unique within one arena snapshot.
///
/// The arena service identifies players by URL-like tokens; nothing in the
/// engine interprets them beyond equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One player in the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub position: Position,
    pub orientation: Orientation,
    /// Reported by the arena; the decision rules do not read it.
    pub was_hit: bool,
    /// Reported by the arena; the decision rules do not read it.
    pub score: i64,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, position: Position, orientation: Orientation) -> Self {
        Self {
            id: id.into(),
            position,
            orientation,
            was_hit: false,
            score: 0,
        }
    }

    pub fn with_was_hit(mut self, was_hit: bool) -> Self {
        self.was_hit = was_hit;
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Unit vector of the player's facing.
    #[inline]
    pub fn facing(&self) -> Offset {
        self.orientation.vector()
    }

    /// Cell `distance` steps away in the direction `rotation` relative to
    /// this player's facing. May lie outside the arena.
    #[inline]
    pub fn project(&self, rotation: Rotation, distance: u32) -> Position {
        geometry::project(self.position, self.orientation, rotation, distance)
    }

    /// Whether a straight throw along this player's facing, travelling
    /// exactly `distance` cells, lands on `target`.
    #[inline]
    pub fn reaches(&self, target: Position, distance: u32) -> bool {
        self.project(Rotation::Front, distance) == target
    }
}
