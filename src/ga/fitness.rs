//! Objective function and fitness evaluation.
//!
//! The GA maximises fitness while the goal is to minimise
//!
//! ```text
//! f(x1, x2) = -( sin(x1)·cos(x2)·tan(x1 + x2) + k·exp(1 - sqrt(R)) )
//! ```
//!
//! where `R` is selected by [`RadiusTerm`]. The objective value is turned
//! into a fitness by a [`FitnessTransform`], and any non-finite result is
//! replaced by a small positive fallback so every individual stays
//! comparable.

use crate::kernel::{Approx, Kernel};
use tracing::trace;

/// Radicand of the exponential term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadiusTerm {
    /// `R = x1² + x2²`, the Euclidean distance from the origin.
    #[default]
    Euclidean,
    /// `R = x1²`, ignoring `x2` in the exponential term.
    FirstOnly,
}

/// The objective `f(x1, x2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    /// Weight `k` of the exponential term.
    pub k: f64,
    /// Radicand under the square root.
    pub radius: RadiusTerm,
}

impl Default for Objective {
    fn default() -> Self {
        Self {
            k: 0.75,
            radius: RadiusTerm::Euclidean,
        }
    }
}

impl Objective {
    /// Evaluates `f(x1, x2)` through `kernel`.
    ///
    /// A pole in `tan` or an undefined `sqrt` is returned as-is instead of
    /// being folded into arithmetic.
    pub fn evaluate<K: Kernel>(&self, kernel: &K, x1: f64, x2: f64) -> Approx {
        let tan = match kernel.tan(x1 + x2) {
            Approx::Finite(t) => t,
            fault => return fault,
        };
        let radicand = match self.radius {
            RadiusTerm::Euclidean => x1 * x1 + x2 * x2,
            RadiusTerm::FirstOnly => x1 * x1,
        };
        let root = match kernel.sqrt(radicand) {
            Approx::Finite(r) => r,
            fault => return fault,
        };
        let trig = kernel.sin(x1) * kernel.cos(x2) * tan;
        Approx::from_f64(-(trig + self.k * kernel.exp(1.0 - root)))
    }
}

/// Maps an objective value (to minimise) onto a fitness (to maximise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessTransform {
    /// `1 / (1 + f)`: bounded, monotone decreasing in `f` for `f > -1`.
    #[default]
    Reciprocal,
    /// `-f`: unbounded, monotone everywhere.
    Negated,
}

impl FitnessTransform {
    /// Applies the transform to an objective value.
    pub fn apply(self, objective: f64) -> f64 {
        match self {
            FitnessTransform::Reciprocal => 1.0 / (1.0 + objective),
            FitnessTransform::Negated => -objective,
        }
    }
}

/// Fitness substituted when the objective cannot be evaluated.
pub const DEFAULT_FITNESS_FALLBACK: f64 = 1e-4;

/// Scores decoded `(x1, x2)` pairs.
///
/// Always returns a finite fitness: domain faults and non-finite transforms
/// yield `fallback`.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<K> {
    kernel: K,
    objective: Objective,
    transform: FitnessTransform,
    fallback: f64,
}

impl<K: Kernel> FitnessEvaluator<K> {
    /// Creates an evaluator.
    pub fn new(kernel: K, objective: Objective, transform: FitnessTransform, fallback: f64) -> Self {
        Self {
            kernel,
            objective,
            transform,
            fallback,
        }
    }

    /// The kernel used for evaluation.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The fallback fitness.
    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Evaluates the raw objective value.
    pub fn objective(&self, x1: f64, x2: f64) -> Approx {
        self.objective.evaluate(&self.kernel, x1, x2)
    }

    /// Computes the fitness of `(x1, x2)`.
    pub fn fitness(&self, x1: f64, x2: f64) -> f64 {
        let value = match self.objective(x1, x2) {
            Approx::Finite(v) => v,
            fault => {
                trace!(x1, x2, ?fault, "objective fault, using fallback fitness");
                return self.fallback;
            }
        };
        let fitness = self.transform.apply(value);
        if fitness.is_finite() {
            fitness
        } else {
            trace!(x1, x2, objective = value, "non-finite fitness, using fallback");
            self.fallback
        }
    }
}
