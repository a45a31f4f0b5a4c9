//! Raw request records as delivered by the arena service.
//!
//! These mirror the JSON payload one-to-one and carry no validation:
//! dimensions may be non-positive, orientation codes are free text and
//! positions may lie outside the grid. [`crate::snapshot::build_arena`] is
//! the only place that interprets them.
//!
//! ```json
//! {
//!   "_links": { "self": { "href": "https://bot.example/self" } },
//!   "arena": {
//!     "dims": [4, 3],
//!     "state": {
//!       "https://bot.example/self": {
//!         "x": 0, "y": 0, "direction": "N", "wasHit": false, "score": 0
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

/// One decision request: the arena snapshot plus the acting player's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaRequest {
    #[cfg_attr(feature = "serde", serde(rename = "_links"))]
    pub links: SelfLink,
    pub arena: RawArena,
}

/// `_links` object; only the `self` link is read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfLink {
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    pub self_link: Link,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub href: String,
}

/// Arena dimensions and the per-player records keyed by identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawArena {
    /// `[width, height]`.
    pub dims: [i64; 2],
    pub state: BTreeMap<String, RawPlayer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawPlayer {
    pub x: i32,
    pub y: i32,
    /// Orientation code, expected to be one of `N`, `S`, `E`, `W`.
    pub direction: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub was_hit: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: i64,
}

impl ArenaRequest {
    /// Empty arena of the given size, acting as `self_identity`.
    pub fn new(self_identity: impl Into<String>, width: i64, height: i64) -> Self {
        Self {
            links: SelfLink {
                self_link: Link {
                    href: self_identity.into(),
                },
            },
            arena: RawArena {
                dims: [width, height],
                state: BTreeMap::new(),
            },
        }
    }

    /// Adds (or replaces) a player record.
    pub fn with_player(mut self, id: impl Into<String>, player: RawPlayer) -> Self {
        self.arena.state.insert(id.into(), player);
        self
    }

    pub fn self_identity(&self) -> &str {
        &self.links.self_link.href
    }

    pub fn width(&self) -> i64 {
        self.arena.dims[0]
    }

    pub fn height(&self) -> i64 {
        self.arena.dims[1]
    }
}

impl RawPlayer {
    pub fn new(x: i32, y: i32, direction: impl Into<String>) -> Self {
        Self {
            x,
            y,
            direction: direction.into(),
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
}
