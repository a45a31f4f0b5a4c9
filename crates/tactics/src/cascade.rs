//! The priority cascade.
//!
//! Rules are tried top to bottom and the first whose guard holds decides the
//! turn. The order is the strategy: dodging a lined-up enemy beats attacking
//! one, and attacking beats wandering.
//!
//! ```text
//! standard()
//!   └─ Selector
//!       ├─ Rule(flank_danger,     Threatened(Flank),    advance_or_evade)
//!       ├─ Rule(far_rear_danger,  Threatened(FarRear),  advance_or_evade)
//!       ├─ Rule(near_rear_danger, Threatened(NearRear), EvasiveTurn)
//!       ├─ Rule(frontal_danger,   Threatened(Frontal),  EvasiveTurn)
//!       ├─ Rule(enemy_ahead,      EnemyInSight,         evade_sometimes(mercy, Throw))
//!       ├─ Rule(front_blocked,    FrontBlocked,         EvasiveTurn)
//!       └─ Rule(wander,           always,               evade_sometimes(boredom, MoveForward))
//! ```
//!
//! `front_blocked` can only fire on a wall: any body in the adjacent front
//! cell is already caught by `enemy_ahead`.

use behavior_tree::Node;
use behavior_tree::builder::{condition, guarded, node, selector};

use crate::action::{Action, CascadeRule};
use crate::config::{Odds, TacticsConfig};
use crate::context::TacticalContext;
use crate::nodes::{Chance, EnemyInSight, EvasiveTurn, FrontBlocked, Perform, Rule, Threatened};
use crate::threat::DangerZone;

/// Tree type used for one decision.
pub type Cascade<'a> = Node<'a, TacticalContext<'a>>;

/// Builds the standard cascade.
///
/// The tree holds no borrowed data of its own; it is rebuilt per decision so
/// it can be ticked against a context borrowing that call's arena.
pub fn standard<'a>(config: &TacticsConfig) -> Cascade<'a> {
    selector(vec![
        rule(
            CascadeRule::FlankDanger,
            node(Threatened(DangerZone::Flank)),
            advance_or_evade(),
        ),
        rule(
            CascadeRule::FarRearDanger,
            node(Threatened(DangerZone::FarRear)),
            advance_or_evade(),
        ),
        rule(
            CascadeRule::NearRearDanger,
            node(Threatened(DangerZone::NearRear)),
            node(EvasiveTurn),
        ),
        rule(
            CascadeRule::FrontalDanger,
            node(Threatened(DangerZone::Frontal)),
            node(EvasiveTurn),
        ),
        rule(
            CascadeRule::EnemyAhead,
            node(EnemyInSight {
                range: config.sight_range,
            }),
            evade_sometimes(config.mercy, Action::Throw),
        ),
        rule(
            CascadeRule::FrontBlocked,
            node(FrontBlocked),
            node(EvasiveTurn),
        ),
        rule(
            CascadeRule::Wander,
            condition("always", |_: &TacticalContext<'a>| true),
            evade_sometimes(config.boredom, Action::MoveForward),
        ),
    ])
}

fn rule<'a>(rule: CascadeRule, guard: Cascade<'a>, response: Cascade<'a>) -> Cascade<'a> {
    node(Rule::new(rule, guard, response))
}

/// Step out of the line of fire; turn instead if the way ahead is blocked.
fn advance_or_evade<'a>() -> Cascade<'a> {
    selector(vec![
        guarded(node(FrontBlocked), node(EvasiveTurn)),
        node(Perform(Action::MoveForward)),
    ])
}

/// With `odds`, evasive turn; otherwise `action`.
fn evade_sometimes<'a>(odds: Odds, action: Action) -> Cascade<'a> {
    selector(vec![
        guarded(node(Chance(odds)), node(EvasiveTurn)),
        node(Perform(action)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{ArenaRequest, RawPlayer, ScriptedRng, build_arena};
    use behavior_tree::Status;

    #[test]
    fn cascade_always_commits_once() {
        let request = ArenaRequest::new("me", 3, 3).with_player("me", RawPlayer::new(1, 1, "N"));
        let arena = build_arena(&request).unwrap();
        let mut rng = ScriptedRng::new([5]);
        let mut ctx = TacticalContext::new(&arena, &mut rng);

        let tree = standard(&TacticsConfig::default());
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(
            ctx.take_decision(),
            Some(crate::Decision::new(CascadeRule::Wander, Action::MoveForward))
        );
    }
}
