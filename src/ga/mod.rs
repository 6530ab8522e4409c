//! Binary-encoded Genetic Algorithm.
//!
//! Candidates are fixed-length bit strings ([`Chromosome`]) holding two
//! genes, decoded onto real intervals by a [`GeneCodec`] and scored by a
//! [`FitnessEvaluator`] over the objective
//!
//! ```text
//! f(x1, x2) = -( sin(x1)·cos(x2)·tan(x1 + x2) + k·exp(1 - sqrt(x1² + x2²)) )
//! ```
//!
//! The GA maximises fitness, so the objective is transformed (see
//! [`FitnessTransform`]) before selection.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`GaRunner`]: Executes the evolutionary loop, one generation per step
//! - [`GaResult`]: Final optimization result with per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and per-bit mutation
//! - [`selection`]: Tournament and elite selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod codec;
mod config;
mod error;
mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use codec::{decode_gene, encode_gene, GeneCodec};
pub use config::GaConfig;
pub use error::{ChromosomeError, ConfigError, GaError};
pub use fitness::{FitnessEvaluator, FitnessTransform, Objective, RadiusTerm, DEFAULT_FITNESS_FALLBACK};
pub use runner::{run_many, GaResult, GaRunner, GenerationReport, RunState};
pub use types::{Chromosome, Domain, MAX_GENE_LENGTH};
