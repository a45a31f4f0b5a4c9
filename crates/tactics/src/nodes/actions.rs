//! Action nodes.
//!
//! Every action node commits exactly one [`Action`] and succeeds.

use arena_core::Rotation;
use behavior_tree::{Behavior, Status};

use crate::action::Action;
use crate::context::TacticalContext;

/// Commits a fixed action.
#[derive(Clone, Copy, Debug)]
pub struct Perform(pub Action);

impl Behavior<TacticalContext<'_>> for Perform {
    fn tick(&self, ctx: &mut TacticalContext<'_>) -> Status {
        ctx.set_action(self.0);
        Status::Success
    }
}

/// Turns away from trouble.
///
/// If exactly one adjacent side cell is blocked, turns toward the open side;
/// this branch never draws from the random source. With both sides open or
/// both blocked, flips a coin (heads: left).
#[derive(Clone, Copy, Debug)]
pub struct EvasiveTurn;

impl EvasiveTurn {
    /// Turn forced by the surroundings, if any.
    pub fn forced(left_blocked: bool, right_blocked: bool) -> Option<Action> {
        match (left_blocked, right_blocked) {
            (true, false) => Some(Action::TurnRight),
            (false, true) => Some(Action::TurnLeft),
            _ => None,
        }
    }
}

impl Behavior<TacticalContext<'_>> for EvasiveTurn {
    fn tick(&self, ctx: &mut TacticalContext<'_>) -> Status {
        let left_blocked = ctx.side_blocked(Rotation::Left);
        let right_blocked = ctx.side_blocked(Rotation::Right);

        let turn = Self::forced(left_blocked, right_blocked).unwrap_or_else(|| {
            if ctx.coin() {
                Action::TurnLeft
            } else {
                Action::TurnRight
            }
        });

        ctx.set_action(turn);
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_turn_points_at_open_side() {
        assert_eq!(EvasiveTurn::forced(true, false), Some(Action::TurnRight));
        assert_eq!(EvasiveTurn::forced(false, true), Some(Action::TurnLeft));
        assert_eq!(EvasiveTurn::forced(true, true), None);
        assert_eq!(EvasiveTurn::forced(false, false), None);
    }
}
