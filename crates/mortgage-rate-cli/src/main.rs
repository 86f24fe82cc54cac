mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::PaymentArgs;
use commands::rate::EstimateRateArgs;
use commands::report::ReportArgs;

/// Mortgage loan costs and real interest rates
#[derive(Parser)]
#[command(
    name = "mra",
    version,
    about = "Mortgage loan costs and real interest rates",
    long_about = "A CLI for computing mortgage loan costs with decimal precision. \
                  Computes annuity payments, estimates the effective yearly rate \
                  implied by a monthly payment via rate-table inversion, and \
                  renders full loan cost reports with stress tests."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "markdown", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full loan cost report for a scenario
    Report(ReportArgs),
    /// Compute the monthly annuity payment for a loan
    Payment(PaymentArgs),
    /// Estimate the yearly rate implied by a monthly payment
    EstimateRate(EstimateRateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Payment(args) => commands::amortization::run_payment(args),
        Commands::EstimateRate(args) => commands::rate::run_estimate_rate(args),
        Commands::Version => {
            println!("mra {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
