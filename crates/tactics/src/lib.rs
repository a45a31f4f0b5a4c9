//! Tactical decision engine for the grid arena.
//!
//! One call to [`TacticalEngine::decide`] turns an arena request into exactly
//! one [`Action`]. The decision is a fixed priority cascade of rules, built
//! from [`behavior_tree`] nodes and evaluated against a per-call
//! [`TacticalContext`]:
//!
//! ```text
//! cascade::standard()
//!   └─ Selector
//!       ├─ flank_danger      Left/Right × 1..3   → advance, or evade if front blocked
//!       ├─ far_rear_danger   Back × 3            → advance, or evade if front blocked
//!       ├─ near_rear_danger  Back × 1..2         → evade
//!       ├─ frontal_danger    Front × 1..3        → evade
//!       ├─ enemy_ahead       anyone in sight     → throw (sometimes evade: mercy)
//!       ├─ front_blocked     wall or body ahead  → evade
//!       └─ wander            always              → advance (sometimes evade: boredom)
//! ```
//!
//! "Evade" is the shared evasive turn: turn toward the open side when exactly
//! one side is blocked, otherwise flip a coin.
//!
//! - [`threat`] answers "would that enemy hit me if it threw now?"
//! - [`nodes`] holds the condition and action leaves
//! - [`cascade`] assembles the rules
//! - [`engine`] builds the arena, runs the cascade and reports a [`Decision`]

pub mod action;
pub mod cascade;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod nodes;
pub mod threat;

pub use action::{Action, CascadeRule, Decision};
pub use config::{Odds, TacticsConfig};
pub use context::TacticalContext;
pub use engine::TacticalEngine;
pub use error::{Result, TacticsError};
pub use threat::DangerZone;
