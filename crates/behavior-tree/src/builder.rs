//! Boxed shorthands for composing trees.
//!
//! `selector(vec![...])` instead of `Box::new(Selector::new(vec![...]))`.

use crate::{Behavior, Condition, Node, Selector, Sequence};

#[inline]
pub fn selector<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn sequence<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Sequence::new(children))
}

/// `if guard then body`: a two-child sequence.
#[inline]
pub fn guarded<'n, C: 'n>(guard: Node<'n, C>, body: Node<'n, C>) -> Node<'n, C> {
    sequence(vec![guard, body])
}

/// Boxes a predicate closure as a [`Condition`] node.
#[inline]
pub fn condition<'n, C: 'n, F>(label: &'static str, predicate: F) -> Node<'n, C>
where
    F: Fn(&C) -> bool + Send + Sync + 'n,
{
    Box::new(Condition::new(label, predicate))
}

/// Boxes any node.
#[inline]
pub fn node<'n, C, B>(behavior: B) -> Node<'n, C>
where
    B: Behavior<C> + 'n,
{
    Box::new(behavior)
}
