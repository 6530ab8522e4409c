//! Pseudo-random sources.
//!
//! Every stochastic operator in the crate draws through [`RandomSource`].
//! The default implementation is [`Lcg`], a 31-bit linear congruential
//! generator whose stream is fully determined by its seed. [`HostRng`]
//! adapts any `rand` generator when bit-for-bit reproducibility against the
//! LCG stream is not needed.
//!
//! The order of draws is part of the contract: two runs with the same seed
//! and the same configuration consume the stream identically.

use rand::RngCore;

/// Source of uniform draws used by selection, crossover and mutation.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns an integer uniformly drawn from `lo..=hi`.
    ///
    /// Computed as `lo + floor(next_f64() * (hi - lo + 1))`, which consumes
    /// exactly one draw.
    ///
    /// # Panics
    /// Panics if `lo > hi`.
    fn next_index(&mut self, lo: usize, hi: usize) -> usize {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        let span = (hi - lo + 1) as f64;
        let offset = (self.next_f64() * span) as usize;
        (lo + offset).min(hi)
    }

    /// Returns `true` (a `'1'` bit) when the next draw is below 0.5.
    fn next_bit(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 31;

/// Linear congruential generator: `state = (a·state + c) mod 2^31`.
///
/// Uses the classic `a = 1103515245`, `c = 12345` constants and emits
/// `state / 2^31`.
///
/// # Examples
///
/// ```
/// use u_bitga::random::{Lcg, RandomSource};
///
/// let mut a = Lcg::new(123_456_789);
/// let mut b = Lcg::new(123_456_789);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Creates a generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Resets the internal state.
    pub fn seed(&mut self, seed: u64) {
        self.state = seed;
    }

    /// Current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }

    fn advance(&mut self) -> u64 {
        // 2^31 divides 2^64, so wrapping is congruent to the exact recurrence.
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT)
            & (LCG_MODULUS - 1);
        self.state
    }
}

impl RandomSource for Lcg {
    fn next_f64(&mut self) -> f64 {
        self.advance() as f64 / LCG_MODULUS as f64
    }
}

/// Adapter exposing a `rand` generator as a [`RandomSource`].
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_bitga::random::{HostRng, RandomSource};
///
/// let mut rng = HostRng::new(StdRng::seed_from_u64(7));
/// let x = rng.next_f64();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct HostRng<R>(R);

impl<R: RngCore> HostRng<R> {
    /// Wraps a `rand` generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore> RandomSource for HostRng<R> {
    fn next_f64(&mut self) -> f64 {
        // 53 random mantissa bits.
        (self.0.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Draws a fresh seed from the thread-local `rand` generator.
pub fn random_seed() -> u64 {
    rand::random()
}
