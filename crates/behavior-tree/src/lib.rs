//! Short-circuiting decision nodes for turn-based bots.
//!
//! A bot turn is one synchronous evaluation: every node answers immediately,
//! so there is no `Running` state and no delta time. Trees are cheap to build
//! and are usually assembled right before the tick that uses them, which lets
//! the context borrow per-turn data without any `'static` gymnastics.
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composites: [`Selector`] (first success wins), [`Sequence`] (all must succeed)
//! - Leaves: [`Condition`] (read-only predicate)
//! - [`builder`]: boxed shorthands used when composing trees

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use leaf::Condition;
pub use status::Status;
