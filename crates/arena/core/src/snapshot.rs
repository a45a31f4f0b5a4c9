//! Snapshot builder: raw request records → [`Arena`].
//!
//! Validation order is fixed so the same malformed request always yields the
//! same rejection:
//!
//! 1. dimensions (`InvalidDimensions`)
//! 2. every orientation code, in identity order (`InvalidOrientationCode`)
//! 3. the self identity (`UnknownSelfPlayer`)
//!
//! Raw positions are trusted as given. A player outside the grid is kept in
//! the player list but occupies no cell.

use crate::arena::Arena;
use crate::error::{ArenaError, Result};
use crate::geometry::{Orientation, Position};
use crate::player::{Player, PlayerId};
use crate::request::{ArenaRequest, RawPlayer};

/// Builds the per-call world model for `request`.
pub fn build_arena(request: &ArenaRequest) -> Result<Arena> {
    let (width, height) = validate_dimensions(request.width(), request.height())?;

    // BTreeMap iteration keeps players sorted by identity.
    let players = request
        .arena
        .state
        .iter()
        .map(|(id, raw)| decode_player(id, raw))
        .collect::<Result<Vec<_>>>()?;

    let self_identity = request.self_identity();
    let me = players
        .iter()
        .position(|player| player.id.as_str() == self_identity)
        .ok_or_else(|| ArenaError::UnknownSelfPlayer(self_identity.to_owned()))?;

    tracing::debug!(
        width,
        height,
        players = players.len(),
        me = self_identity,
        "arena snapshot built"
    );

    Ok(Arena::assemble(width, height, players, me))
}

impl TryFrom<&ArenaRequest> for Arena {
    type Error = ArenaError;

    fn try_from(request: &ArenaRequest) -> Result<Self> {
        build_arena(request)
    }
}

fn validate_dimensions(width: i64, height: i64) -> Result<(u32, u32)> {
    let invalid = || ArenaError::InvalidDimensions { width, height };

    if width <= 0 || height <= 0 {
        return Err(invalid());
    }
    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;

    Ok((w, h))
}

fn decode_player(id: &str, raw: &RawPlayer) -> Result<Player> {
    let orientation = raw.direction.parse::<Orientation>().map_err(|_| {
        ArenaError::InvalidOrientationCode {
            player: id.to_owned(),
            code: raw.direction.clone(),
        }
    })?;

    Ok(Player {
        id: PlayerId::new(id),
        position: Position::new(raw.x, raw.y),
        orientation,
        was_hit: raw.was_hit,
        score: raw.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_grid_and_identifies_self() {
        let request = ArenaRequest::new("me", 3, 3)
            .with_player("me", RawPlayer::new(1, 1, "N"))
            .with_player("foe", RawPlayer::new(1, 0, "S").with_score(7));

        let arena = build_arena(&request).unwrap();

        assert_eq!((arena.width(), arena.height()), (3, 3));
        assert_eq!(arena.me().id.as_str(), "me");
        assert_eq!(arena.me().orientation, Orientation::North);
        let foe = arena.occupant(Position::new(1, 0)).unwrap();
        assert_eq!(foe.orientation, Orientation::South);
        assert_eq!(foe.score, 7);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, h) in [(0, 3), (3, 0), (-1, 3), (3, -2)] {
            let request = ArenaRequest::new("me", w, h).with_player("me", RawPlayer::new(0, 0, "N"));
            assert_eq!(
                build_arena(&request),
                Err(ArenaError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn rejects_dimensions_beyond_u32() {
        let request = ArenaRequest::new("me", i64::from(u32::MAX) + 1, 1)
            .with_player("me", RawPlayer::new(0, 0, "N"));

        assert!(matches!(
            build_arena(&request),
            Err(ArenaError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn largest_arena_builds_without_allocating_cells() {
        let side = i64::from(u32::MAX);
        let request = ArenaRequest::new("me", side, side)
            .with_player("me", RawPlayer::new(0, 0, "N"))
            .with_player("foe", RawPlayer::new(i32::MAX, i32::MAX, "W"));

        let arena = build_arena(&request).unwrap();

        assert_eq!((arena.width(), arena.height()), (u32::MAX, u32::MAX));
        assert!(arena.is_blocked(Position::new(i32::MAX, i32::MAX)));
        assert!(!arena.is_blocked(Position::new(1, 0)));
        assert!(arena.is_blocked(Position::new(0, -1)));
    }

    #[test]
    fn rejects_unknown_orientation_code() {
        let request = ArenaRequest::new("me", 3, 3)
            .with_player("me", RawPlayer::new(0, 0, "N"))
            .with_player("foe", RawPlayer::new(1, 1, "X"));

        assert_eq!(
            build_arena(&request),
            Err(ArenaError::InvalidOrientationCode {
                player: "foe".into(),
                code: "X".into()
            })
        );
    }

    #[test]
    fn rejects_unknown_self_player() {
        let request = ArenaRequest::new("nobody", 3, 3).with_player("me", RawPlayer::new(0, 0, "N"));

        assert_eq!(
            build_arena(&request),
            Err(ArenaError::UnknownSelfPlayer("nobody".into()))
        );
    }

    #[test]
    fn dimension_errors_take_precedence() {
        let request = ArenaRequest::new("nobody", 0, 0).with_player("me", RawPlayer::new(0, 0, "?"));

        assert!(matches!(
            build_arena(&request),
            Err(ArenaError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn orientation_errors_precede_self_lookup() {
        let request = ArenaRequest::new("nobody", 2, 2).with_player("me", RawPlayer::new(0, 0, "?"));

        assert!(matches!(
            build_arena(&request),
            Err(ArenaError::InvalidOrientationCode { .. })
        ));
    }

    #[test]
    fn off_grid_self_is_accepted() {
        let request = ArenaRequest::new("me", 2, 2).with_player("me", RawPlayer::new(9, 9, "E"));

        let arena = build_arena(&request).unwrap();
        assert_eq!(arena.me().position, Position::new(9, 9));
        assert!(arena.occupant(Position::new(9, 9)).is_none());
    }

    #[test]
    fn try_from_matches_build_arena() {
        let request = ArenaRequest::new("me", 1, 1).with_player("me", RawPlayer::new(0, 0, "W"));

        assert_eq!(Arena::try_from(&request), build_arena(&request));
    }
}
