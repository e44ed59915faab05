//! CLI generator for the same fake data the HTTP service returns.
//!
//! Useful for seeding fixtures offline: a given `--seed` prints exactly what
//! `GET /mock/...?seed=` would return (birth dates aside, which are relative
//! to the current time).
//!
//! # Usage
//!
//! ```bash
//! # Five reproducible users
//! cargo run --bin mockgen -- users --count 5 --seed 42 --pretty
//!
//! # Products as compact JSON, piped to a file
//! cargo run --bin mockgen -- products --count 100 > products.json
//!
//! # One company
//! cargo run --bin mockgen -- company --seed 7
//! ```
//!
//! JSON goes to stdout; the colored summary goes to stderr so pipes stay clean.

use test_backend::application::services::MockDataService;
use test_backend::application::services::mock_data_service::{
    DEFAULT_COUNT, MAX_COUNT, MIN_COUNT,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use serde::Serialize;

/// Fake data generator for test fixtures.
#[derive(Parser)]
#[command(name = "mockgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate users
    Users(BatchArgs),

    /// Generate products
    Products(BatchArgs),

    /// Generate a company
    Company(OutputArgs),
}

#[derive(Args)]
struct BatchArgs {
    /// Number of records (clamped to 1..=1000)
    #[arg(short, long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    count: i64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Seed for reproducible output
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Pretty-print JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let service = MockDataService::new();

    match cli.command {
        Commands::Users(args) => {
            warn_if_clamped(args.count);
            let users = service.get_users(args.count, args.output.seed);
            print_json(&users, args.output.pretty)?;
            summarize("users", users.len(), args.output.seed);
        }
        Commands::Products(args) => {
            warn_if_clamped(args.count);
            let products = service.get_products(args.count, args.output.seed);
            print_json(&products, args.output.pretty)?;
            summarize("products", products.len(), args.output.seed);
        }
        Commands::Company(args) => {
            let company = service.get_company(args.seed);
            print_json(&company, args.pretty)?;
            summarize("company", 1, args.seed);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize generated records")?;

    println!("{json}");
    Ok(())
}

fn warn_if_clamped(count: i64) {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        eprintln!(
            "{}",
            format!("Count {count} is outside {MIN_COUNT}..={MAX_COUNT}, clamping").yellow()
        );
    }
}

fn summarize(kind: &str, generated: usize, seed: Option<i64>) {
    let seed = match seed {
        Some(s) => s.to_string().cyan(),
        None => "random".bright_black(),
    };

    eprintln!(
        "{} {} {} (seed: {})",
        "Generated".green().bold(),
        generated.to_string().bright_white().bold(),
        kind,
        seed
    );
}
