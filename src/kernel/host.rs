//! Kernel backed by the std `f64` methods.

use super::{Approx, Kernel};

/// Substitute for [`SeriesKernel`](super::SeriesKernel) when the
/// no-host-math constraint does not apply.
///
/// Keeps the same domain contract: `tan` reports a pole as
/// [`Approx::Infinite`] and `sqrt` of a negative number as
/// [`Approx::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostKernel;

impl Kernel for HostKernel {
    fn sin(&self, x: f64) -> f64 {
        x.sin()
    }

    fn cos(&self, x: f64) -> f64 {
        x.cos()
    }

    fn sqrt(&self, x: f64) -> Approx {
        if x.is_nan() || x < 0.0 {
            return Approx::Undefined;
        }
        Approx::from_f64(x.sqrt())
    }

    fn exp(&self, x: f64) -> f64 {
        x.exp()
    }
}
