//! Composite behavior nodes.
//!
//! Composites control the evaluation order of their children:
//! [`Selector`] is a short-circuited OR, [`Sequence`] a short-circuited AND.
//! A priority cascade is a `Selector` whose children are guarded
//! `Sequence`s; the first guard that holds decides the turn.

use crate::{Behavior, Node, Status};

/// Evaluates children left to right until one succeeds.
///
/// - A child returning `Success` stops the selector, which succeeds
/// - A child returning `Failure` moves evaluation to the next child
/// - If every child fails, the selector fails
pub struct Selector<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Selector<'n, C> {
    /// Creates a selector over the given children, in priority order.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Evaluates children left to right until one fails.
///
/// - A child returning `Failure` stops the sequence, which fails
/// - If every child succeeds, the sequence succeeds
///
/// With a condition as first child this reads as "if guard then body".
pub struct Sequence<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Sequence<'n, C> {
    /// Creates a sequence over the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}
