//! Decision context for one turn.
//!
//! [`TacticalContext`] is the blackboard the cascade is ticked against. It
//! exposes read-only questions about the arena from the acting player's
//! point of view, the injected random source, and the slot where exactly one
//! action gets committed.
//!
//! # Lifetime
//!
//! The context borrows the arena and the random source for `'a`. Both are
//! owned by the caller of [`crate::TacticalEngine`] and outlive the single
//! synchronous tick.

use arena_core::{Arena, Player, Position, RandomSource, Rotation};

use crate::action::{Action, CascadeRule, Decision};
use crate::config::Odds;
use crate::threat::DangerZone;

pub struct TacticalContext<'a> {
    arena: &'a Arena,
    rng: &'a mut dyn RandomSource,

    /// Rule whose guard matched; set before its response runs.
    rule: Option<CascadeRule>,

    /// Action committed by the response.
    action: Option<Action>,
}

impl<'a> TacticalContext<'a> {
    pub fn new(arena: &'a Arena, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            arena,
            rng,
            rule: None,
            action: None,
        }
    }

    /// The acting player.
    pub fn me(&self) -> &'a Player {
        self.arena.me()
    }

    /// Cell relative to our facing.
    pub fn project(&self, rotation: Rotation, distance: u32) -> Position {
        self.arena.project_from_me(rotation, distance)
    }

    /// Whether the adjacent cell in `rotation` is a wall or occupied.
    pub fn side_blocked(&self, rotation: Rotation) -> bool {
        self.arena.is_blocked(self.project(rotation, 1))
    }

    pub fn front_blocked(&self) -> bool {
        self.side_blocked(Rotation::Front)
    }

    pub fn threatened(&self, zone: DangerZone) -> bool {
        zone.threatened(self.arena)
    }

    /// Nearest player straight ahead within `range` cells, if any.
    ///
    /// Sight is not blocked by bodies: the nearest one is reported.
    pub fn enemy_ahead(&self, range: u32) -> Option<&'a Player> {
        (1..=range).find_map(|distance| {
            self.arena
                .occupant(self.project(Rotation::Front, distance))
        })
    }

    /// Draws once; `true` with the given odds.
    pub fn roll(&mut self, odds: Odds) -> bool {
        odds.roll(self.rng)
    }

    /// Fair coin flip, one draw.
    pub fn coin(&mut self) -> bool {
        self.rng.coin()
    }

    /// Records the rule whose guard matched.
    pub fn enter_rule(&mut self, rule: CascadeRule) {
        self.rule = Some(rule);
    }

    /// Commits the action for this turn.
    ///
    /// A second commit in the same tick means two action nodes succeeded,
    /// which the cascade never does; the first action is kept.
    pub fn set_action(&mut self, action: Action) {
        debug_assert!(
            self.action.is_none(),
            "action already set to {:?}; refusing {action:?}",
            self.action
        );
        if let Some(existing) = self.action {
            tracing::warn!(?existing, refused = ?action, "second action commit ignored");
            return;
        }
        self.action = Some(action);
    }

    /// Consumes the context and returns the decision, if both a rule and an
    /// action were recorded.
    pub fn take_decision(self) -> Option<Decision> {
        Some(Decision::new(self.rule?, self.action?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{ArenaRequest, RawPlayer, ScriptedRng, build_arena};

    #[test]
    fn enemy_ahead_reports_nearest() {
        let request = ArenaRequest::new("me", 1, 5)
            .with_player("me", RawPlayer::new(0, 4, "N"))
            .with_player("far", RawPlayer::new(0, 1, "E"))
            .with_player("near", RawPlayer::new(0, 2, "E"));
        let arena = build_arena(&request).unwrap();
        let mut rng = ScriptedRng::default();
        let ctx = TacticalContext::new(&arena, &mut rng);

        assert_eq!(ctx.enemy_ahead(3).map(|p| p.id.as_str()), Some("near"));
        assert!(ctx.enemy_ahead(1).is_none());
    }

    #[test]
    fn side_blocked_sees_walls_and_bodies() {
        let request = ArenaRequest::new("me", 3, 3)
            .with_player("me", RawPlayer::new(0, 1, "N"))
            .with_player("foe", RawPlayer::new(1, 1, "N"));
        let arena = build_arena(&request).unwrap();
        let mut rng = ScriptedRng::default();
        let ctx = TacticalContext::new(&arena, &mut rng);

        assert!(ctx.side_blocked(Rotation::Left)); // wall
        assert!(ctx.side_blocked(Rotation::Right)); // foe
        assert!(!ctx.front_blocked());
    }

    #[test]
    fn decision_needs_rule_and_action() {
        let request = ArenaRequest::new("me", 1, 1).with_player("me", RawPlayer::new(0, 0, "N"));
        let arena = build_arena(&request).unwrap();
        let mut rng = ScriptedRng::default();

        let mut ctx = TacticalContext::new(&arena, &mut rng);
        ctx.set_action(Action::Throw);
        assert!(ctx.take_decision().is_none());

        let mut ctx = TacticalContext::new(&arena, &mut rng);
        ctx.enter_rule(CascadeRule::EnemyAhead);
        ctx.set_action(Action::Throw);
        assert_eq!(
            ctx.take_decision(),
            Some(Decision::new(CascadeRule::EnemyAhead, Action::Throw))
        );
    }

    #[test]
    fn rolls_draw_from_injected_source() {
        let request = ArenaRequest::new("me", 1, 1).with_player("me", RawPlayer::new(0, 0, "N"));
        let arena = build_arena(&request).unwrap();
        let mut rng = ScriptedRng::new([0, 5, 1]);

        {
            let mut ctx = TacticalContext::new(&arena, &mut rng);
            assert!(ctx.roll(Odds::new(1, 10)));
            assert!(!ctx.roll(Odds::new(1, 10)));
            assert!(!ctx.coin());
        }
        assert_eq!(rng.draws(), 3);
    }
}
