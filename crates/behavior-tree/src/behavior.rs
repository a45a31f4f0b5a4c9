//! Core behavior trait.
//!
//! [`Behavior`] is generic over a context type `C`, the blackboard a node
//! reads from and commits its decision to.

use crate::Status;

/// A node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node once.
    ///
    /// Nodes may mutate the context (e.g. commit an action or draw from a
    /// random source stored in it).
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node whose borrowed data lives for `'n`.
///
/// The explicit lifetime lets a tree be built for a context that borrows
/// per-turn data; leaf nodes themselves are usually zero-sized.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

impl<C> Behavior<C> for Box<dyn Behavior<C> + '_> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
