//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::error::ConfigError;
use super::fitness::{FitnessTransform, Objective, RadiusTerm, DEFAULT_FITNESS_FALLBACK};
use super::types::{Domain, MAX_GENE_LENGTH};
use crate::kernel::SeriesTerms;

/// Configuration for the binary GA.
///
/// # Defaults
///
/// The defaults reproduce the reference run, minus the fixed seed:
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.chromosome_length(), 20);
/// assert_eq!(config.max_generations, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{FitnessTransform, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_gene_length(16)
///     .with_tournament_size(3)
///     .with_elitism_count(2)
///     .with_transform(FitnessTransform::Negated)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Bits per variable. Chromosomes are `2 × gene_length` bits.
    pub gene_length: usize,

    /// Interval `x1` is decoded onto.
    pub x1_domain: Domain,

    /// Interval `x2` is decoded onto.
    pub x2_domain: Domain,

    /// Number of generations. The run never stops earlier.
    pub max_generations: usize,

    /// Probability of crossing a pair of parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Contestants per tournament.
    pub tournament_size: usize,

    /// Chromosomes copied unchanged into the next generation.
    pub elitism_count: usize,

    /// Term and iteration counts of the series kernel.
    pub series: SeriesTerms,

    /// Objective-to-fitness mapping.
    pub transform: FitnessTransform,

    /// Objective function parameters.
    pub objective: Objective,

    /// Fitness given to individuals whose objective is not finite.
    pub fitness_fallback: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the host generator.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            gene_length: 10,
            x1_domain: Domain::default(),
            x2_domain: Domain::default(),
            max_generations: 10,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            tournament_size: 2,
            elitism_count: 1,
            series: SeriesTerms::default(),
            transform: FitnessTransform::Reciprocal,
            objective: Objective::default(),
            fitness_fallback: DEFAULT_FITNESS_FALLBACK,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Seed of the reference run.
    pub const REFERENCE_SEED: u64 = 123_456_789;

    /// Bits per chromosome.
    pub fn chromosome_length(&self) -> usize {
        2 * self.gene_length
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of bits per variable.
    pub fn with_gene_length(mut self, bits: usize) -> Self {
        self.gene_length = bits;
        self
    }

    /// Sets the same domain for both variables.
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.x1_domain = Domain::new(min, max);
        self.x2_domain = Domain::new(min, max);
        self
    }

    /// Sets the domain of `x1`.
    pub fn with_x1_domain(mut self, domain: Domain) -> Self {
        self.x1_domain = domain;
        self
    }

    /// Sets the domain of `x2`.
    pub fn with_x2_domain(mut self, domain: Domain) -> Self {
        self.x2_domain = domain;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elites.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the series kernel term counts.
    pub fn with_series(mut self, series: SeriesTerms) -> Self {
        self.series = series;
        self
    }

    /// Sets the fitness transform.
    pub fn with_transform(mut self, transform: FitnessTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the objective weight `k`.
    pub fn with_objective_weight(mut self, k: f64) -> Self {
        self.objective.k = k;
        self
    }

    /// Sets the radicand of the exponential term.
    pub fn with_radius(mut self, radius: RadiusTerm) -> Self {
        self.objective.radius = radius;
        self
    }

    /// Sets the fallback fitness.
    pub fn with_fitness_fallback(mut self, fallback: f64) -> Self {
        self.fitness_fallback = fallback;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for the reference run: defaults with seed `123456789`.
    ///
    /// - Population: 10, Generations: 10, Genes: 2 × 10 bits on [-10, 10]
    /// - `pc = 0.8`, `pm = 0.01`, tournament of 2, one elite
    /// - Fitness `1 / (1 + f)`
    pub fn reference() -> Self {
        Self::default().with_seed(Self::REFERENCE_SEED)
    }

    /// Preset for the unbounded variant: fitness `-f`.
    pub fn negated() -> Self {
        Self::reference().with_transform(FitnessTransform::Negated)
    }

    /// Validates the configuration.
    ///
    /// Every error is caught here, before the first random draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.population_size < self.elitism_count {
            return Err(ConfigError::ElitismExceedsPopulation {
                population_size: self.population_size,
                elitism_count: self.elitism_count,
            });
        }
        if self.gene_length == 0 {
            return Err(ConfigError::ZeroGeneLength);
        }
        if self.gene_length > MAX_GENE_LENGTH {
            return Err(ConfigError::GeneTooLong(self.gene_length));
        }
        for (variable, domain) in [("x1", self.x1_domain), ("x2", self.x2_domain)] {
            if !domain.is_valid() {
                return Err(ConfigError::EmptyDomain {
                    variable,
                    min: domain.min,
                    max: domain.max,
                });
            }
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournamentSize);
        }
        for (name, value) in [
            ("trig_terms", self.series.trig_terms),
            ("exp_terms", self.series.exp_terms),
            ("sqrt_iterations", self.series.sqrt_iterations),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroSeriesTerms(name));
            }
        }
        if !(self.fitness_fallback.is_finite() && self.fitness_fallback > 0.0) {
            return Err(ConfigError::InvalidFallback(self.fitness_fallback));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.gene_length, 10);
        assert_eq!(config.chromosome_length(), 20);
        assert_eq!(config.x1_domain, Domain::new(-10.0, 10.0));
        assert_eq!(config.x2_domain, Domain::new(-10.0, 10.0));
        assert_eq!(config.max_generations, 10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.01).abs() < 1e-10);
        assert_eq!(config.tournament_size, 2);
        assert_eq!(config.elitism_count, 1);
        assert_eq!(config.series, SeriesTerms::default());
        assert_eq!(config.transform, FitnessTransform::Reciprocal);
        assert!((config.objective.k - 0.75).abs() < 1e-10);
        assert_eq!(config.objective.radius, RadiusTerm::Euclidean);
        assert!((config.fitness_fallback - 1e-4).abs() < 1e-15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_gene_length(12)
            .with_domain(-5.0, 5.0)
            .with_max_generations(100)
            .with_crossover_rate(0.7)
            .with_mutation_rate(0.05)
            .with_tournament_size(3)
            .with_elitism_count(2)
            .with_transform(FitnessTransform::Negated)
            .with_objective_weight(1.5)
            .with_radius(RadiusTerm::FirstOnly)
            .with_fitness_fallback(1e-6)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.chromosome_length(), 24);
        assert_eq!(config.x1_domain, Domain::new(-5.0, 5.0));
        assert_eq!(config.x2_domain, Domain::new(-5.0, 5.0));
        assert_eq!(config.max_generations, 100);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.elitism_count, 2);
        assert_eq!(config.transform, FitnessTransform::Negated);
        assert!((config.objective.k - 1.5).abs() < 1e-10);
        assert_eq!(config.objective.radius, RadiusTerm::FirstOnly);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default()
            .with_population_size(0)
            .with_elitism_count(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_elitism_exceeds_population() {
        let config = GaConfig::default()
            .with_population_size(3)
            .with_elitism_count(4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ElitismExceedsPopulation {
                population_size: 3,
                elitism_count: 4
            })
        );
    }

    #[test]
    fn test_validate_elitism_equal_to_population() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_elitism_count(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_gene_length() {
        let config = GaConfig::default().with_gene_length(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGeneLength));

        let config = GaConfig::default().with_gene_length(64);
        assert_eq!(config.validate(), Err(ConfigError::GeneTooLong(64)));
    }

    #[test]
    fn test_validate_empty_domain() {
        let config = GaConfig::default().with_x2_domain(Domain::new(3.0, 3.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyDomain { variable: "x2", .. })
        ));

        let config = GaConfig::default().with_domain(1.0, -1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyDomain { variable: "x1", .. })
        ));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_rates_set_directly() {
        let mut config = GaConfig::default();
        config.mutation_rate = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));

        let mut config = GaConfig::default();
        config.crossover_rate = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                name: "crossover_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTournamentSize));
    }

    #[test]
    fn test_validate_series_terms() {
        let config = GaConfig::default().with_series(SeriesTerms {
            exp_terms: 0,
            ..SeriesTerms::default()
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSeriesTerms("exp_terms"))
        );
    }

    #[test]
    fn test_validate_fallback() {
        for bad in [0.0, -1.0, f64::INFINITY] {
            let config = GaConfig::default().with_fitness_fallback(bad);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidFallback(_))
            ));
        }
    }

    // ---- Presets ----

    #[test]
    fn test_preset_reference() {
        let config = GaConfig::reference();
        assert_eq!(config.seed, Some(123_456_789));
        assert_eq!(config.population_size, 10);
        assert_eq!(config.transform, FitnessTransform::Reciprocal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_negated() {
        let config = GaConfig::negated();
        assert_eq!(config.transform, FitnessTransform::Negated);
        assert_eq!(config.seed, Some(GaConfig::REFERENCE_SEED));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::reference().with_population_size(30).with_seed(1);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.seed, Some(1));
    }
}
