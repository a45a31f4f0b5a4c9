//! Named cascade rule.

use behavior_tree::{Behavior, Node, Status};

use crate::action::CascadeRule;
use crate::context::TacticalContext;

/// `if guard then response`, recording which rule fired.
///
/// When the guard fails the rule fails and the cascade moves on. When it
/// holds, the rule is entered and the response decides the outcome; the
/// responses used by the cascade always commit an action.
pub struct Rule<'a> {
    rule: CascadeRule,
    guard: Node<'a, TacticalContext<'a>>,
    response: Node<'a, TacticalContext<'a>>,
}

impl<'a> Rule<'a> {
    pub fn new(
        rule: CascadeRule,
        guard: Node<'a, TacticalContext<'a>>,
        response: Node<'a, TacticalContext<'a>>,
    ) -> Self {
        Self {
            rule,
            guard,
            response,
        }
    }
}

impl<'a> Behavior<TacticalContext<'a>> for Rule<'a> {
    fn tick(&self, ctx: &mut TacticalContext<'a>) -> Status {
        if self.guard.tick(ctx).is_failure() {
            return Status::Failure;
        }
        tracing::trace!(rule = %self.rule, "rule matched");
        ctx.enter_rule(self.rule);
        self.response.tick(ctx)
    }
}
