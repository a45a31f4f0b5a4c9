//! Actions, cascade rules and the decision record.
use std::fmt;

/// One move for the current turn.
///
/// `Display` yields the single-letter wire code returned to the arena.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum Action {
    #[strum(serialize = "F")]
    MoveForward,
    #[strum(serialize = "L")]
    TurnLeft,
    #[strum(serialize = "R")]
    TurnRight,
    #[strum(serialize = "T")]
    Throw,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveForward,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Throw,
    ];

    pub const fn is_turn(self) -> bool {
        matches!(self, Action::TurnLeft | Action::TurnRight)
    }
}

/// Rules of the priority cascade, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CascadeRule {
    FlankDanger,
    FarRearDanger,
    NearRearDanger,
    FrontalDanger,
    EnemyAhead,
    FrontBlocked,
    Wander,
}

/// The chosen action and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decision {
    pub action: Action,
    pub rule: CascadeRule,
}

impl Decision {
    pub const fn new(rule: CascadeRule, action: Action) -> Self {
        Self { action, rule }
    }

    /// Short human reading of the decision, for logs.
    pub fn summary(&self) -> &'static str {
        use Action::*;
        use CascadeRule::*;

        match (self.rule, self.action) {
            (FlankDanger, MoveForward) => "left or right is in danger, move forward",
            (FlankDanger, _) => "left or right is in danger but front is blocked, turn",
            (FarRearDanger, MoveForward) => "back(3) is in danger, move forward",
            (FarRearDanger, _) => "back(3) is in danger but front is blocked, turn",
            (NearRearDanger, _) => "back(1,2) is in danger, turn",
            (FrontalDanger, _) => "front is in danger, turn",
            (EnemyAhead, Throw) => "found enemy in front, attack",
            (EnemyAhead, _) => "found enemy in front, mercy",
            (FrontBlocked, _) => "front is blocked, turn",
            (Wander, MoveForward) => "move forward",
            (Wander, _) => "feeling bored, turn",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.action, self.rule)
    }
}
