//! Binary-encoded genetic algorithm built from first principles.
//!
//! Minimises a two-variable non-linear objective with a classic
//! bit-string GA. Nothing numeric is borrowed from the host:
//!
//! - **Random source** ([`random`]): a 31-bit linear congruential generator;
//!   a seed fully determines a run.
//! - **Numeric kernel** ([`kernel`]): sine, cosine, tangent, square root and
//!   exponential from truncated series and Newton iteration, with domain
//!   faults reported as typed outcomes.
//! - **Genetic Algorithm** ([`ga`]): chromosome codec, fitness evaluation,
//!   tournament selection, single-point crossover, per-bit mutation,
//!   elitism, and a fixed-length generational driver.
//!
//! Both the random source and the kernel sit behind traits, so the `rand`
//! generators and the std math functions can be substituted.
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner};
//!
//! let result = GaRunner::new(GaConfig::reference())?.run();
//! println!("best {} at ({}, {}) f = {}", result.best, result.x1, result.x2, result.objective);
//! # Ok::<(), u_bitga::ga::ConfigError>(())
//! ```

pub mod ga;
pub mod kernel;
pub mod random;
