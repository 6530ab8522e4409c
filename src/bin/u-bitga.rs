//! Command-line front end: runs the GA and prints per-generation and final
//! reports.
//!
//! ```text
//! u-bitga --seed 123456789 --population 10 --generations 10
//! RUST_LOG=u_bitga=debug u-bitga --transform negated
//! ```

use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use u_bitga::ga::{
    Domain, FitnessTransform, GaConfig, GaResult, GaRunner, GenerationReport, RadiusTerm,
};
use u_bitga::kernel::{HostKernel, Kernel, SeriesKernel, SeriesTerms};
use u_bitga::random::{random_seed, Lcg};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TransformArg {
    /// 1 / (1 + f)
    Reciprocal,
    /// -f
    Negated,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RadiusArg {
    /// sqrt(x1² + x2²)
    Euclidean,
    /// sqrt(x1²)
    FirstOnly,
}

/// Minimise f(x1, x2) with a binary genetic algorithm.
#[derive(Debug, Parser)]
#[command(name = "u-bitga", version, about)]
struct Cli {
    /// Random seed; omitted draws one from the host generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Chromosomes per generation
    #[arg(short, long, default_value_t = 10)]
    population: usize,

    /// Bits per variable
    #[arg(long, default_value_t = 10)]
    gene_length: usize,

    /// Lower bound of both variables
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    min: f64,

    /// Upper bound of both variables
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    max: f64,

    /// Number of generations
    #[arg(short, long, default_value_t = 10)]
    generations: usize,

    /// Crossover probability
    #[arg(long, default_value_t = 0.8)]
    crossover_rate: f64,

    /// Per-bit mutation probability
    #[arg(long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// Contestants per tournament
    #[arg(long, default_value_t = 2)]
    tournament: usize,

    /// Elites carried into each generation
    #[arg(long, default_value_t = 1)]
    elitism: usize,

    /// Objective-to-fitness mapping
    #[arg(long, value_enum, default_value_t = TransformArg::Reciprocal)]
    transform: TransformArg,

    /// Radicand of the exponential term
    #[arg(long, value_enum, default_value_t = RadiusArg::Euclidean)]
    radius: RadiusArg,

    /// Weight of the exponential term
    #[arg(short, long, default_value_t = 0.75)]
    k: f64,

    /// Terms of the sine/cosine series
    #[arg(long, default_value_t = 10)]
    trig_terms: u32,

    /// Terms of the exponential series
    #[arg(long, default_value_t = 20)]
    exp_terms: u32,

    /// Newton iterations for the square root
    #[arg(long, default_value_t = 10)]
    sqrt_iterations: u32,

    /// Use the std math functions instead of the series kernel
    #[arg(long)]
    host_math: bool,
}

impl Cli {
    /// Builds the run configuration. Rates are taken as given so that
    /// out-of-range values fail validation instead of being clamped.
    fn config(&self, seed: u64) -> GaConfig {
        let transform = match self.transform {
            TransformArg::Reciprocal => FitnessTransform::Reciprocal,
            TransformArg::Negated => FitnessTransform::Negated,
        };
        let radius = match self.radius {
            RadiusArg::Euclidean => RadiusTerm::Euclidean,
            RadiusArg::FirstOnly => RadiusTerm::FirstOnly,
        };
        let mut config = GaConfig::default()
            .with_population_size(self.population)
            .with_gene_length(self.gene_length)
            .with_x1_domain(Domain::new(self.min, self.max))
            .with_x2_domain(Domain::new(self.min, self.max))
            .with_max_generations(self.generations)
            .with_tournament_size(self.tournament)
            .with_elitism_count(self.elitism)
            .with_transform(transform)
            .with_radius(radius)
            .with_objective_weight(self.k)
            .with_series(SeriesTerms {
                trig_terms: self.trig_terms,
                exp_terms: self.exp_terms,
                sqrt_iterations: self.sqrt_iterations,
            })
            .with_seed(seed);
        config.crossover_rate = self.crossover_rate;
        config.mutation_rate = self.mutation_rate;
        config
    }
}

fn print_generation(report: &GenerationReport) {
    println!(
        "Generation {:>3}: best fitness = {:.10} | x1 = {:.6} | x2 = {:.6}",
        report.generation + 1,
        report.best_fitness,
        report.x1,
        report.x2
    );
}

fn print_result(result: &GaResult) {
    println!();
    println!("=== FINAL RESULT ===");
    println!("Best chromosome: {}", result.best);
    println!("x1 = {}", result.x1);
    println!("x2 = {}", result.x2);
    println!("f(x1, x2) = {}", result.objective);
}

fn evolve<K: Kernel>(config: GaConfig, kernel: K, seed: u64) -> Result<GaResult, u_bitga::ga::ConfigError> {
    let mut runner = GaRunner::with_parts(config, kernel, Lcg::new(seed))?;
    while let Some(report) = runner.step() {
        print_generation(report);
    }
    Ok(runner.run())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(random_seed);
    let config = cli.config(seed);
    tracing::info!(seed, ?config, "starting run");

    let outcome = if cli.host_math {
        evolve(config, HostKernel, seed)
    } else {
        let kernel = SeriesKernel::new(config.series);
        evolve(config, kernel, seed)
    };

    match outcome {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
