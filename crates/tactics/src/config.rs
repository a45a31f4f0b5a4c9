//! Tunable constants of the cascade.

use arena_core::RandomSource;

/// Probability expressed as `numerator / denominator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Odds {
    pub numerator: u32,
    pub denominator: u32,
}

impl Odds {
    pub const ALWAYS: Self = Self::new(1, 1);

    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Draws once from `rng`.
    #[inline]
    pub fn roll(self, rng: &mut dyn RandomSource) -> bool {
        rng.chance(self.numerator, self.denominator)
    }
}

/// Parameters of [`crate::cascade::standard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TacticsConfig {
    /// How many cells ahead an enemy counts as a throw target.
    pub sight_range: u32,
    /// Chance to spare an enemy in sight and turn away instead.
    pub mercy: Odds,
    /// Chance to turn on a quiet turn instead of moving forward.
    pub boredom: Odds,
}

impl TacticsConfig {
    pub const DEFAULT_SIGHT_RANGE: u32 = 3;
    pub const DEFAULT_MERCY: Odds = Odds::new(1, 10);
    pub const DEFAULT_BOREDOM: Odds = Odds::new(1, 10);

    pub const fn new() -> Self {
        Self {
            sight_range: Self::DEFAULT_SIGHT_RANGE,
            mercy: Self::DEFAULT_MERCY,
            boredom: Self::DEFAULT_BOREDOM,
        }
    }
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self::new()
    }
}
