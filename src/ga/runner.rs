//! GA evolutionary loop execution.
//!
//! [`GaRunner`] owns the run state (population, generation counter, best
//! chromosome ever seen, random source) and advances it one generation per
//! [`step`](GaRunner::step):
//!
//! evaluation → elitism → tournament/crossover/mutation → replacement.
//!
//! The run always lasts exactly `max_generations` generations.

use super::codec::GeneCodec;
use super::config::GaConfig;
use super::error::{ChromosomeError, ConfigError, GaError};
use super::fitness::FitnessEvaluator;
use super::operators::{crossover, mutate, random_chromosome};
use super::selection::{select_elites, tournament};
use super::types::Chromosome;
use crate::kernel::{Kernel, SeriesKernel};
use crate::random::{random_seed, Lcg, RandomSource};
use tracing::{debug, info, instrument};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Population drawn, no generation executed yet.
    Initialized,
    /// `generation` generations completed, more remaining.
    Evolving { generation: usize },
    /// All generations completed.
    Terminated,
}

/// Values describing one completed generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,

    /// Best fitness among the evaluated population.
    pub best_fitness: f64,

    /// Chromosome achieving `best_fitness` (first in population order).
    pub best: Chromosome,

    /// Decoded `x1` of `best`.
    pub x1: f64,

    /// Decoded `x2` of `best`.
    pub x2: f64,

    /// Mean fitness of the evaluated population.
    pub mean_fitness: f64,

    /// Best-ever fitness after this generation.
    pub best_ever_fitness: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best chromosome seen during the run.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Decoded `x1` of `best`.
    pub x1: f64,

    /// Decoded `x2` of `best`.
    pub x2: f64,

    /// Objective value `f(x1, x2)`; `+∞` or `NaN` if it cannot be evaluated.
    pub objective: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each generation's evaluated population.
    pub fitness_history: Vec<f64>,

    /// Best-ever fitness after each generation. Never decreases.
    pub best_history: Vec<f64>,

    /// Per-generation reports.
    pub reports: Vec<GenerationReport>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
///
/// let result = GaRunner::new(GaConfig::reference())?.run();
/// assert_eq!(result.generations, 10);
/// assert_eq!(result.best.len(), 20);
/// # Ok::<(), u_bitga::ga::ConfigError>(())
/// ```
///
/// Generations can also be driven one at a time:
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
///
/// let mut runner = GaRunner::new(GaConfig::reference())?;
/// while let Some(report) = runner.step() {
///     println!("{}: {:.6}", report.generation + 1, report.best_fitness);
/// }
/// # Ok::<(), u_bitga::ga::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GaRunner<K = SeriesKernel, R = Lcg> {
    config: GaConfig,
    codec: GeneCodec,
    evaluator: FitnessEvaluator<K>,
    rng: R,
    population: Vec<Chromosome>,
    state: RunState,
    best: Chromosome,
    best_fitness: f64,
    reports: Vec<GenerationReport>,
}

impl GaRunner {
    /// Creates a runner with the series kernel and the LCG.
    ///
    /// The seed comes from `config.seed`, or from the host generator when
    /// unset.
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(random_seed);
        let kernel = SeriesKernel::new(config.series);
        Self::with_parts(config, kernel, Lcg::new(seed))
    }
}

impl<K: Kernel, R: RandomSource> GaRunner<K, R> {
    /// Creates a runner with an explicit kernel and random source.
    ///
    /// `config.seed` and `config.series` are ignored; the parts are used as
    /// given. The initial population is drawn from `rng`, chromosome by
    /// chromosome.
    #[instrument(level = "debug", skip_all, fields(
        population_size = config.population_size,
        chromosome_length = config.chromosome_length(),
    ))]
    pub fn with_parts(config: GaConfig, kernel: K, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let length = config.chromosome_length();
        let population = (0..config.population_size)
            .map(|_| random_chromosome(length, &mut rng))
            .collect();
        Ok(Self::assemble(config, kernel, rng, population))
    }

    /// Creates a runner starting from an explicit population.
    ///
    /// The population must have exactly `population_size` chromosomes of
    /// `2 × gene_length` bits.
    pub fn from_population(
        config: GaConfig,
        kernel: K,
        rng: R,
        population: Vec<Chromosome>,
    ) -> Result<Self, GaError> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(ChromosomeError::PopulationSizeMismatch {
                expected: config.population_size,
                actual: population.len(),
            }
            .into());
        }
        let length = config.chromosome_length();
        for chromosome in &population {
            chromosome.check_len(length)?;
        }
        Ok(Self::assemble(config, kernel, rng, population))
    }

    fn assemble(config: GaConfig, kernel: K, rng: R, population: Vec<Chromosome>) -> Self {
        let codec = GeneCodec::new(config.gene_length, config.x1_domain, config.x2_domain);
        let evaluator = FitnessEvaluator::new(
            kernel,
            config.objective,
            config.transform,
            config.fitness_fallback,
        );
        let best = population[0].clone();
        let (x1, x2) = codec.decode(&best);
        let best_fitness = evaluator.fitness(x1, x2);
        Self {
            reports: Vec::with_capacity(config.max_generations),
            config,
            codec,
            evaluator,
            rng,
            population,
            state: RunState::Initialized,
            best,
            best_fitness,
        }
    }

    /// The run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The chromosome codec.
    pub fn codec(&self) -> &GeneCodec {
        &self.codec
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.reports.len()
    }

    /// The current population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Best chromosome seen so far and its fitness.
    pub fn best(&self) -> (&Chromosome, f64) {
        (&self.best, self.best_fitness)
    }

    /// Reports of the completed generations.
    pub fn reports(&self) -> &[GenerationReport] {
        &self.reports
    }

    /// Fitness of a chromosome under this run's evaluator.
    pub fn fitness_of(&self, chromosome: &Chromosome) -> f64 {
        let (x1, x2) = self.codec.decode(chromosome);
        self.evaluator.fitness(x1, x2)
    }

    /// Executes one generation.
    ///
    /// Returns `None` once the run is terminated.
    pub fn step(&mut self) -> Option<&GenerationReport> {
        if self.state == RunState::Terminated {
            return None;
        }
        let generation = self.reports.len();

        // 1. Evaluate
        let fitness: Vec<f64> = self
            .population
            .iter()
            .map(|c| self.fitness_of(c))
            .collect();

        // 2. Elites, best first; the head is the generation's best either way.
        let elite_count = self.config.elitism_count;
        let ranked = select_elites(&fitness, elite_count.max(1));
        let best_idx = ranked[0];

        let size = self.config.population_size;
        let mut next_gen: Vec<Chromosome> = Vec::with_capacity(size);
        next_gen.extend(
            ranked
                .iter()
                .take(elite_count)
                .map(|&i| self.population[i].clone()),
        );

        // 3. Offspring
        while next_gen.len() < size {
            let p1 = tournament(&fitness, self.config.tournament_size, &mut self.rng);
            let p2 = tournament(&fitness, self.config.tournament_size, &mut self.rng);
            let (child1, child2) = crossover(
                &self.population[p1],
                &self.population[p2],
                self.config.crossover_rate,
                &mut self.rng,
            );
            next_gen.push(mutate(child1, self.config.mutation_rate, &mut self.rng));
            if next_gen.len() < size {
                next_gen.push(mutate(child2, self.config.mutation_rate, &mut self.rng));
            }
        }

        // 4. Replace and track best
        let generation_best = std::mem::replace(&mut self.population, next_gen)
            .swap_remove(best_idx);
        let best_fitness = fitness[best_idx];
        if best_fitness > self.best_fitness {
            self.best = generation_best.clone();
            self.best_fitness = best_fitness;
        }

        let (x1, x2) = self.codec.decode(&generation_best);
        let mean_fitness = fitness.iter().sum::<f64>() / fitness.len() as f64;
        debug!(
            generation,
            best_fitness,
            x1,
            x2,
            mean_fitness,
            best_ever = self.best_fitness,
            "generation complete"
        );

        self.reports.push(GenerationReport {
            generation,
            best_fitness,
            best: generation_best,
            x1,
            x2,
            mean_fitness,
            best_ever_fitness: self.best_fitness,
        });

        let completed = generation + 1;
        self.state = if completed >= self.config.max_generations {
            RunState::Terminated
        } else {
            RunState::Evolving {
                generation: completed,
            }
        };
        self.reports.last()
    }

    /// Runs the remaining generations and returns the result.
    #[instrument(level = "debug", skip(self), fields(
        generations = self.config.max_generations,
        population_size = self.config.population_size,
    ))]
    pub fn run(mut self) -> GaResult {
        while self.step().is_some() {}

        let (x1, x2) = self.codec.decode(&self.best);
        let objective = self.evaluator.objective(x1, x2).to_f64();
        info!(
            best = %self.best,
            best_fitness = self.best_fitness,
            x1,
            x2,
            objective,
            "run complete"
        );

        GaResult {
            fitness_history: self.reports.iter().map(|r| r.best_fitness).collect(),
            best_history: self.reports.iter().map(|r| r.best_ever_fitness).collect(),
            generations: self.reports.len(),
            best: self.best,
            best_fitness: self.best_fitness,
            x1,
            x2,
            objective,
            reports: self.reports,
        }
    }
}

/// Runs one independent GA per seed.
///
/// Each run owns its own generator, so results match running the seeds one
/// by one. With the `parallel` feature the runs execute on rayon's pool.
pub fn run_many(config: &GaConfig, seeds: &[u64]) -> Result<Vec<GaResult>, ConfigError> {
    config.validate()?;
    let run_one = |&seed: &u64| -> Result<GaResult, ConfigError> {
        Ok(GaRunner::new(config.clone().with_seed(seed))?.run())
    };

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        seeds.par_iter().map(run_one).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results = seeds.iter().map(run_one).collect();

    results
}

// ============================================================================
// Tests
// ============================================================================
