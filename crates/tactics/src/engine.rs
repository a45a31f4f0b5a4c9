//! Tactical decision engine.

use arena_core::{Arena, ArenaRequest, RandomSource, build_arena};
use behavior_tree::Behavior;

use crate::action::Decision;
use crate::cascade;
use crate::config::TacticsConfig;
use crate::context::TacticalContext;
use crate::error::{Result, TacticsError};

/// Decides one action per request.
///
/// The engine holds only its configuration, so one instance can serve any
/// number of concurrent callers as long as each passes its own random
/// source.
///
/// # Flow
///
/// 1. Build the [`Arena`] from the request (rejecting malformed snapshots)
/// 2. Wrap it in a [`TacticalContext`] together with the random source
/// 3. Tick [`cascade::standard`] once
/// 4. Return the committed action and the rule that chose it
#[derive(Debug, Clone, Default)]
pub struct TacticalEngine {
    config: TacticsConfig,
}

impl TacticalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TacticsConfig) -> Self {
        Self { config }
    }

    /// Decides the acting player's move for this turn.
    pub fn decide(&self, request: &ArenaRequest, rng: &mut dyn RandomSource) -> Result<Decision> {
        let arena = build_arena(request).inspect_err(|err| {
            tracing::debug!(code = err.error_code(), %err, "snapshot rejected");
        })?;
        self.decide_in(&arena, rng)
    }

    /// Decides for an already built arena.
    pub fn decide_in(&self, arena: &Arena, rng: &mut dyn RandomSource) -> Result<Decision> {
        let mut ctx = TacticalContext::new(arena, rng);
        let tree = cascade::standard(&self.config);
        tree.tick(&mut ctx);

        let decision = ctx.take_decision().ok_or(TacticsError::NoDecision)?;

        tracing::debug!(
            me = %arena.me().id,
            position = %arena.me().position,
            facing = %arena.me().orientation,
            rule = %decision.rule,
            action = %decision.action,
            "{}",
            decision.summary()
        );

        Ok(decision)
    }
}
