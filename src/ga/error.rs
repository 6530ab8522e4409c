//! Error types for the GA engine.
//!
//! Errors are only raised before a run starts. Once a [`GaRunner`] exists,
//! every generation completes.
//!
//! [`GaRunner`]: super::GaRunner

use thiserror::Error;

/// Invalid [`GaConfig`](super::GaConfig) parameter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Population would be empty.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// Elites alone would exceed the population.
    #[error("population_size ({population_size}) is smaller than elitism_count ({elitism_count})")]
    ElitismExceedsPopulation {
        population_size: usize,
        elitism_count: usize,
    },

    /// Genes need at least one bit.
    #[error("gene_length must be at least 1")]
    ZeroGeneLength,

    /// Genes are decoded through a `u64`.
    #[error("gene_length {0} exceeds the maximum of {max}", max = super::types::MAX_GENE_LENGTH)]
    GeneTooLong(usize),

    /// A variable's interval is empty or not finite.
    #[error("empty domain for {variable}: [{min}, {max}]")]
    EmptyDomain {
        variable: &'static str,
        min: f64,
        max: f64,
    },

    /// A probability lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    /// Tournaments need at least one contestant.
    #[error("tournament_size must be at least 1")]
    ZeroTournamentSize,

    /// The run needs at least one generation.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    /// A series term or iteration count is zero.
    #[error("{0} must be at least 1")]
    ZeroSeriesTerms(&'static str),

    /// The fallback fitness must be a small positive number.
    #[error("fitness_fallback must be positive and finite, got {0}")]
    InvalidFallback(f64),
}

/// Invalid chromosome or population handed to the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChromosomeError {
    /// A character other than `'0'` or `'1'` in a bit string.
    #[error("invalid bit {character:?} at position {position}")]
    InvalidBit { position: usize, character: char },

    /// A chromosome whose length differs from the configured length.
    #[error("chromosome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A seeded population of the wrong size.
    #[error("population size mismatch: expected {expected}, got {actual}")]
    PopulationSizeMismatch { expected: usize, actual: usize },
}

/// Any error the engine can report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chromosome(#[from] ChromosomeError),
}
