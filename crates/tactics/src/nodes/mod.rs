//! Arena-specific behavior tree nodes.
//!
//! - `conditions`: read the context and succeed when something holds
//! - `actions`: commit an action to the context
//! - `rule`: a named guard/response pair of the cascade

pub mod actions;
pub mod conditions;
pub mod rule;

pub use actions::*;
pub use conditions::*;
pub use rule::Rule;
