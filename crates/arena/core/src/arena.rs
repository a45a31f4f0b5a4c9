//! Grid world model for one decision call.

use std::collections::BTreeMap;

use crate::geometry::{Position, Rotation};
use crate::player::Player;

/// Occupancy map plus the typed player list.
///
/// Only occupied cells are stored, each holding an index into `players`, so
/// building an arena costs O(players) whatever its dimensions. The map never
/// owns a player and both are dropped together at the end of the call. Built
/// by [`crate::snapshot::build_arena`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arena {
    width: u32,
    height: u32,
    cells: BTreeMap<Position, usize>,
    players: Vec<Player>,
    me: usize,
}

impl Arena {
    /// Assembles an arena from already validated parts.
    ///
    /// Players outside the grid stay in the list but occupy no cell; when two
    /// players share a cell the later one in `players` holds it.
    pub(crate) fn assemble(width: u32, height: u32, players: Vec<Player>, me: usize) -> Self {
        let mut arena = Self {
            width,
            height,
            cells: BTreeMap::new(),
            players,
            me,
        };

        for (index, player) in arena.players.iter().enumerate() {
            if !arena.in_bounds(player.position) {
                tracing::warn!(
                    player = %player.id,
                    position = %player.position,
                    "player stands outside the arena; it occupies no cell"
                );
                continue;
            }

            if let Some(previous) = arena.cells.insert(player.position, index) {
                tracing::warn!(
                    player = %player.id,
                    displaced = %arena.players[previous].id,
                    position = %player.position,
                    "two players claim the same cell"
                );
            }
        }

        arena
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The acting player.
    pub fn me(&self) -> &Player {
        &self.players[self.me]
    }

    /// True iff `0 ≤ x < width` and `0 ≤ y < height`.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    /// True iff the cell is outside the arena or somebody stands on it.
    pub fn is_blocked(&self, position: Position) -> bool {
        !self.in_bounds(position) || self.cells.contains_key(&position)
    }

    /// Player standing on the cell; `None` for empty or off-grid cells.
    pub fn occupant(&self, position: Position) -> Option<&Player> {
        self.cells.get(&position).map(|&index| &self.players[index])
    }

    /// Cell relative to the acting player's facing.
    pub fn project_from_me(&self, rotation: Rotation, distance: u32) -> Position {
        self.me().project(rotation, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;

    fn arena(width: u32, height: u32, players: Vec<Player>) -> Arena {
        Arena::assemble(width, height, players, 0)
    }

    #[test]
    fn bounds_follow_dimensions() {
        let arena = arena(4, 3, vec![Player::new("me", Position::ORIGIN, Orientation::North)]);

        assert!(arena.in_bounds(Position::new(0, 0)));
        assert!(arena.in_bounds(Position::new(3, 2)));
        assert!(!arena.in_bounds(Position::new(4, 0)));
        assert!(!arena.in_bounds(Position::new(0, 3)));
        assert!(!arena.in_bounds(Position::new(-1, 0)));
        assert!(!arena.in_bounds(Position::new(0, -1)));
    }

    #[test]
    fn blocked_means_off_grid_or_occupied() {
        let arena = arena(
            3,
            3,
            vec![
                Player::new("me", Position::new(1, 1), Orientation::North),
                Player::new("foe", Position::new(2, 1), Orientation::West),
            ],
        );

        assert!(arena.is_blocked(Position::new(2, 1)));
        assert!(arena.is_blocked(Position::new(1, 1)));
        assert!(arena.is_blocked(Position::new(1, -1)));
        assert!(!arena.is_blocked(Position::new(0, 1)));
    }

    #[test]
    fn occupant_never_fails_off_grid() {
        let arena = arena(
            2,
            2,
            vec![
                Player::new("me", Position::new(0, 0), Orientation::South),
                Player::new("foe", Position::new(1, 1), Orientation::North),
            ],
        );

        assert_eq!(
            arena.occupant(Position::new(1, 1)).map(|p| p.id.as_str()),
            Some("foe")
        );
        assert!(arena.occupant(Position::new(1, 0)).is_none());
        assert!(arena.occupant(Position::new(7, -3)).is_none());
    }

    #[test]
    fn off_grid_player_occupies_nothing() {
        let arena = arena(
            2,
            2,
            vec![
                Player::new("me", Position::new(0, 0), Orientation::South),
                Player::new("ghost", Position::new(5, 5), Orientation::North),
            ],
        );

        assert_eq!(arena.players().len(), 2);
        assert!(arena.occupant(Position::new(5, 5)).is_none());
    }

    #[test]
    fn later_player_wins_a_shared_cell() {
        let arena = arena(
            2,
            2,
            vec![
                Player::new("me", Position::new(0, 0), Orientation::South),
                Player::new("first", Position::new(1, 1), Orientation::North),
                Player::new("second", Position::new(1, 1), Orientation::West),
            ],
        );

        assert_eq!(
            arena.occupant(Position::new(1, 1)).map(|p| p.id.as_str()),
            Some("second")
        );
    }
}
