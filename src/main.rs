mod config;
mod manager;
mod numbers;
mod tally;

use crate::config::InputSet;
use crate::manager::Manager;
use crate::numbers::Summary;
use crate::tally::Tally;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct NumbersArgs {
    /// Numbers to operate on (negative values need no `--`)
    #[arg(allow_hyphen_values = true)]
    numbers: Vec<f64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the sum of the numbers
    Sum(NumbersArgs),

    /// Print the product of the numbers
    Product(NumbersArgs),

    /// Print the even numbers in their original order
    Evens(NumbersArgs),

    /// Print the odd numbers in their original order
    Odds(NumbersArgs),

    /// Print sum, product, evens and odds of a TOML input set
    Summary {
        /// TOML file with a `numbers` array
        #[arg(long)]
        file: PathBuf,
    },

    /// Write a report for every input set in a directory
    Analyze {
        /// Directory holding `input-*.toml` files
        #[arg(long)]
        data_dir: PathBuf,
    },

    /// Remove every report in a directory
    Clean {
        /// Directory holding `report-*.msgpack` files
        #[arg(long)]
        data_dir: PathBuf,
    },

    /// Print how many times each name was given, in first-seen order
    Flavors {
        /// Names to count
        names: Vec<String>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::try_parse()
        .or_else(|error| {
            if error.use_stderr() {
                Err(error)
            } else {
                error.exit()
            }
        })
        .context("failed to parse arguments")?;
    log::info!("{args:#?}");

    match args.command {
        Command::Sum(args) => println!("{}", numbers::sum(&args.numbers)),
        Command::Product(args) => println!("{}", numbers::product(&args.numbers)),
        Command::Evens(args) => println!("{}", join(&numbers::evens(&args.numbers))),
        Command::Odds(args) => println!("{}", join(&numbers::odds(&args.numbers))),
        Command::Summary { file } => {
            let input = InputSet::from_file(&file).context("failed to construct input")?;
            let summary = Summary::new(&input.numbers);
            println!("sum: {}", summary.sum);
            println!("product: {}", summary.product);
            println!("evens: {}", join(&summary.evens));
            println!("odds: {}", join(&summary.odds));
        }
        Command::Analyze { data_dir } => {
            let mgr = Manager::new(data_dir).context("failed to construct mgr")?;
            let n_reports = mgr.analyze()?;
            log::info!("analyzed {n_reports} input sets");
        }
        Command::Clean { data_dir } => {
            let mgr = Manager::new(data_dir).context("failed to construct mgr")?;
            mgr.clean()?;
        }
        Command::Flavors { names } => {
            let tally: Tally = names.iter().collect();
            for (name, count) in tally.iter() {
                println!("{name}: {count}");
            }
        }
    }

    Ok(())
}

fn join(numbers: &[f64]) -> String {
    numbers
        .iter()
        .map(|number| number.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
