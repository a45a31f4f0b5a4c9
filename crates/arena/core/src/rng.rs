//! Random sources for tie-breaking and behavior variation.
//!
//! The decision engine never reaches for a global generator: it is handed a
//! [`RandomSource`] per call. Production callers pass [`EntropyRng`], replays
//! pass a seeded [`PcgRng`], and tests script exact values with
//! [`ScriptedRng`].

/// Stream of random 32-bit values.
///
/// One source must not be shared between concurrent decisions; give each
/// call its own stream.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// `true` with probability `numerator / denominator`.
    ///
    /// Consumes exactly one value. A zero denominator never succeeds.
    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        let roll = self.next_u32();
        denominator != 0 && roll % denominator < numerator
    }

    /// Fair coin: `true` on even values. Consumes exactly one value.
    fn coin(&mut self) -> bool {
        self.next_u32() % 2 == 0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Deterministic: the same seed always yields the same stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Thread-local OS-seeded generator for live play.
#[derive(Debug)]
pub struct EntropyRng {
    inner: rand::rngs::ThreadRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: rand::thread_rng(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        rand::RngCore::next_u32(&mut self.inner)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// An empty script yields `0` forever.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
