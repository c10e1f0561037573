//! Command-line Apriori miner.
//!
//! ```bash
//! # Mine ./data/transactions.txt with the default thresholds
//! apriori
//!
//! # Custom thresholds, JSON output
//! apriori baskets.csv --min-support 0.3 --min-confidence 0.6 --format json
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use apriori_rules::apriori::DEFAULT_DELIMITER;
use apriori_rules::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_SUPPORT};
use apriori_rules::report::{render_json, render_text};
use apriori_rules::{run, Dataset, DatasetBuilder, LiftPolicy, MiningConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Mine frequent itemsets and association rules from a transaction file
#[derive(Parser, Debug)]
#[command(name = "apriori")]
#[command(version)]
struct Args {
    /// Transaction file, one transaction per line
    #[arg(default_value = "./data/transactions.txt")]
    input: PathBuf,

    /// Minimum support for an itemset to be frequent
    #[arg(long, default_value_t = DEFAULT_MIN_SUPPORT)]
    min_support: f64,

    /// Rules need a confidence strictly above this value
    #[arg(long, default_value_t = DEFAULT_MIN_CONFIDENCE)]
    min_confidence: f64,

    /// Minimum lift; only applied with --enforce-min-lift
    #[arg(long)]
    min_lift: Option<f64>,

    /// Drop rules whose lift is below --min-lift
    #[arg(long, requires = "min_lift")]
    enforce_min_lift: bool,

    /// Join iterations allowed before mining stops with a warning
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Character separating item labels
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn config(&self) -> MiningConfig {
        let mut config = MiningConfig::new(self.min_support, self.min_confidence)
            .with_max_iterations(self.max_iterations);
        if let Some(min_lift) = self.min_lift {
            config = config.with_min_lift(min_lift);
        }
        if self.enforce_min_lift {
            config = config.with_lift_policy(LiftPolicy::Enforce);
        }
        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // An unreadable input mines as an empty dataset.
    let dataset = match DatasetBuilder::from_path(&args.input, args.delimiter) {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!("{}", err);
            Dataset::default()
        }
    };

    let report = match run(&dataset, &args.config()) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match args.format {
        Format::Text => print!("{}", render_text(&report)),
        Format::Json => match render_json(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                tracing::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
