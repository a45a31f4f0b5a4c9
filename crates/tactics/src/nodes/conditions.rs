//! Condition nodes.
//!
//! Conditions only read the context, except [`Chance`], which draws from the
//! random source and therefore must sit exactly where the draw is wanted.

use behavior_tree::{Behavior, Status};

use crate::config::Odds;
use crate::context::TacticalContext;
use crate::threat::DangerZone;

/// Succeeds if any check of the zone finds an enemy lined up on us.
#[derive(Clone, Copy, Debug)]
pub struct Threatened(pub DangerZone);

impl Behavior<TacticalContext<'_>> for Threatened {
    fn tick(&self, ctx: &mut TacticalContext<'_>) -> Status {
        Status::from_bool(ctx.threatened(self.0))
    }
}

/// Succeeds if the adjacent front cell is a wall or occupied.
#[derive(Clone, Copy, Debug)]
pub struct FrontBlocked;

impl Behavior<TacticalContext<'_>> for FrontBlocked {
    fn tick(&self, ctx: &mut TacticalContext<'_>) -> Status {
        Status::from_bool(ctx.front_blocked())
    }
}

/// Succeeds if anybody stands straight ahead within `range` cells.
#[derive(Clone, Copy, Debug)]
pub struct EnemyInSight {
    pub range: u32,
}

impl Behavior<TacticalContext<'_>> for EnemyInSight {
    fn tick(&self, ctx: &mut TacticalContext<'_>) -> Status {
        match ctx.enemy_ahead(self.range) {
            Some(enemy) => {
                tracing::trace!(enemy = %enemy.id, position = %enemy.position, "enemy in sight");
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Succeeds with the given odds. Draws once per tick.
#[derive(Clone, Copy, Debug)]
pub struct Chance(pub Odds);

impl Behavior<TacticalContext<'_>> for Chance {
    fn tick(&self, ctx: &mut TacticalContext<'_>) -> Status {
        Status::from_bool(ctx.roll(self.0))
    }
}
