//! Leaf nodes that do not need a dedicated type.

use std::fmt;
use std::marker::PhantomData;

use crate::{Behavior, Status};

/// Read-only predicate over the context.
///
/// Succeeds when the predicate holds. The predicate only gets `&C`, so a
/// condition can never commit a decision by accident.
pub struct Condition<C, F> {
    label: &'static str,
    predicate: F,
    _context: PhantomData<fn(&C)>,
}

impl<C, F> Condition<C, F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    pub fn new(label: &'static str, predicate: F) -> Self {
        Self {
            label,
            predicate,
            _context: PhantomData,
        }
    }

    /// Name used in diagnostics.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C, F> Behavior<C> for Condition<C, F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

impl<C, F> fmt::Debug for Condition<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("label", &self.label)
            .finish()
    }
}
