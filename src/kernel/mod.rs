//! Numeric kernel used by the objective function.
//!
//! The objective only needs a handful of transcendental functions. They are
//! reached through the [`Kernel`] capability trait so that the hand-rolled
//! [`SeriesKernel`] (truncated power series, Newton iteration) and the
//! std-backed [`HostKernel`] are interchangeable.
//!
//! Operations that can hit a domain fault return [`Approx`] instead of a
//! bare `f64`:
//!
//! - `tan(x)` where `|cos(x)| < 1e-8` → [`Approx::Infinite`]
//! - `sqrt(x)` where `x < 0` → [`Approx::Undefined`]
//!
//! Series results are approximations bounded by their term count; compare
//! them with tolerances.

mod host;
mod series;

pub use host::HostKernel;
pub use series::{SeriesKernel, SeriesTerms};

/// `|cos(x)|` below this makes `tan(x)` infinite.
pub const TAN_POLE_EPSILON: f64 = 1e-8;

/// Outcome of a kernel operation that has a restricted domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Approx {
    /// An ordinary finite value.
    Finite(f64),
    /// The positive-infinity sentinel (pole of `tan`, overflow).
    Infinite,
    /// The not-a-number sentinel (negative `sqrt` argument, `0·∞`).
    Undefined,
}

impl Approx {
    /// Classifies a raw `f64`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Approx::Undefined
        } else if value.is_infinite() {
            Approx::Infinite
        } else {
            Approx::Finite(value)
        }
    }

    /// Returns the finite value, if any.
    pub fn finite(self) -> Option<f64> {
        match self {
            Approx::Finite(v) => Some(v),
            _ => None,
        }
    }

    /// Whether this is an ordinary finite value.
    pub fn is_finite(self) -> bool {
        matches!(self, Approx::Finite(_))
    }

    /// Lowers the outcome to `f64`, using `+∞` and `NaN` as sentinels.
    pub fn to_f64(self) -> f64 {
        match self {
            Approx::Finite(v) => v,
            Approx::Infinite => f64::INFINITY,
            Approx::Undefined => f64::NAN,
        }
    }
}

/// Capability interface for the functions the objective needs.
pub trait Kernel {
    /// Sine of `x` (radians).
    fn sin(&self, x: f64) -> f64;

    /// Cosine of `x` (radians).
    fn cos(&self, x: f64) -> f64;

    /// Tangent of `x`; [`Approx::Infinite`] near a pole.
    fn tan(&self, x: f64) -> Approx {
        let c = self.cos(x);
        if c.abs() < TAN_POLE_EPSILON {
            return Approx::Infinite;
        }
        Approx::from_f64(self.sin(x) / c)
    }

    /// Square root of `x`; [`Approx::Undefined`] for negative input.
    fn sqrt(&self, x: f64) -> Approx;

    /// `e^x`.
    fn exp(&self, x: f64) -> f64;
}

impl<K: Kernel + ?Sized> Kernel for &K {
    fn sin(&self, x: f64) -> f64 {
        (**self).sin(x)
    }

    fn cos(&self, x: f64) -> f64 {
        (**self).cos(x)
    }

    fn tan(&self, x: f64) -> Approx {
        (**self).tan(x)
    }

    fn sqrt(&self, x: f64) -> Approx {
        (**self).sqrt(x)
    }

    fn exp(&self, x: f64) -> f64 {
        (**self).exp(x)
    }
}

/// `x^n` by repeated multiplication.
pub fn power(x: f64, n: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..n {
        result *= x;
    }
    result
}

/// `n!` as an `f64` product.
///
/// There is no overflow guard: past `170!` the result is `+∞`, and past
/// `18!` it is no longer exact.
pub fn factorial(n: u32) -> f64 {
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 0), 1.0);
        assert_eq!(power(2.0, 10), 1024.0);
        assert_eq!(power(-3.0, 3), -27.0);
        assert_eq!(power(0.0, 0), 1.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3_628_800.0);
        assert_eq!(factorial(19), 121_645_100_408_832_000.0);
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert!(factorial(200).is_infinite());
    }

    #[test]
    fn test_approx_classification() {
        assert_eq!(Approx::from_f64(1.5), Approx::Finite(1.5));
        assert_eq!(Approx::from_f64(f64::INFINITY), Approx::Infinite);
        assert_eq!(Approx::from_f64(f64::NEG_INFINITY), Approx::Infinite);
        assert_eq!(Approx::from_f64(f64::NAN), Approx::Undefined);
    }

    #[test]
    fn test_approx_sentinels() {
        assert_eq!(Approx::Finite(2.0).to_f64(), 2.0);
        assert_eq!(Approx::Infinite.to_f64(), f64::INFINITY);
        assert!(Approx::Undefined.to_f64().is_nan());
        assert_eq!(Approx::Finite(2.0).finite(), Some(2.0));
        assert_eq!(Approx::Infinite.finite(), None);
        assert!(!Approx::Undefined.is_finite());
    }
}
