//! Hand-rolled kernel: truncated power series and Newton iteration.

use super::{factorial, power, Approx, Kernel};
use std::f64::consts::TAU;

/// Term and iteration counts for [`SeriesKernel`].
///
/// More terms buy accuracy at the cost of work; beyond about 85 trig terms
/// the factorial denominators overflow and the series degrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesTerms {
    /// Terms of the sine and cosine series.
    pub trig_terms: u32,
    /// Terms of the exponential series (including the constant term).
    pub exp_terms: u32,
    /// Newton iterations for the square root.
    pub sqrt_iterations: u32,
}

impl Default for SeriesTerms {
    fn default() -> Self {
        Self {
            trig_terms: 10,
            exp_terms: 20,
            sqrt_iterations: 10,
        }
    }
}

/// Kernel built from first principles, with no call into the host math
/// library.
///
/// - `sin`, `cos`: argument reduced into `[0, 2π)`, then the alternating
///   Maclaurin series with `trig_terms` terms
/// - `exp`: `1 + Σ x^i / i!` for `i` in `1..exp_terms`
/// - `sqrt`: Newton's method from `x / 2`, `sqrt_iterations` steps
///
/// Accuracy falls off for large `|x|` in `exp` (the alternating series
/// cancels badly for strongly negative arguments) and near `2π` in the
/// trig functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesKernel {
    terms: SeriesTerms,
}

impl SeriesKernel {
    /// Creates a kernel with the given term counts.
    pub fn new(terms: SeriesTerms) -> Self {
        Self { terms }
    }

    /// The configured term counts.
    pub fn terms(&self) -> SeriesTerms {
        self.terms
    }

    /// Sums `Σ (-1)^n x^(2n+offset) / (2n+offset)!` over `trig_terms` terms.
    fn alternating_series(&self, x: f64, offset: u32) -> f64 {
        let x = x.rem_euclid(TAU);
        let mut result = 0.0;
        for n in 0..self.terms.trig_terms {
            let k = 2 * n + offset;
            let term = power(x, k) / factorial(k);
            if n % 2 == 0 {
                result += term;
            } else {
                result -= term;
            }
        }
        result
    }
}

impl Kernel for SeriesKernel {
    fn sin(&self, x: f64) -> f64 {
        self.alternating_series(x, 1)
    }

    fn cos(&self, x: f64) -> f64 {
        self.alternating_series(x, 0)
    }

    fn sqrt(&self, x: f64) -> Approx {
        if x.is_nan() || x < 0.0 {
            return Approx::Undefined;
        }
        if x == 0.0 {
            return Approx::Finite(0.0);
        }
        let mut guess = x / 2.0;
        for _ in 0..self.terms.sqrt_iterations {
            guess = (guess + x / guess) / 2.0;
        }
        Approx::from_f64(guess)
    }

    fn exp(&self, x: f64) -> f64 {
        let mut result = 1.0;
        for i in 1..self.terms.exp_terms {
            result += power(x, i) / factorial(i);
        }
        result
    }
}
