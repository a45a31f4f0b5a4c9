//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Conditions report whether they hold; actions report whether they managed
/// to commit a decision to the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Maps a predicate result onto a status.
    #[inline]
    pub fn from_bool(holds: bool) -> Self {
        if holds {
            Status::Success
        } else {
            Status::Failure
        }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl From<bool> for Status {
    fn from(holds: bool) -> Self {
        Status::from_bool(holds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_round_trips_through_status() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
        assert!(Status::Success.is_success());
        assert!(Status::Failure.is_failure());
    }
}
