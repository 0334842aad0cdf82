mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::comparison::{CompareArgs, NormalizeArgs};
use commands::payroll::{BaseCalcArgs, PeRiskArgs};

/// Expatriate shadow payroll estimation and scenario comparison
#[derive(Parser)]
#[command(
    name = "spc",
    version,
    about = "Shadow payroll cost estimation and multi-country scenario comparison",
    long_about = "A CLI for expatriate shadow payroll work: deterministic base \
                  currency conversion, permanent-establishment risk screening, \
                  canonical normalization of estimator cost breakdowns, and \
                  side-by-side scenario comparison."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert annual USD salary and benefits to monthly host-currency amounts
    BaseCalc(BaseCalcArgs),
    /// Screen permanent-establishment risk from assignment duration
    PeRisk(PeRiskArgs),
    /// Normalize one estimate's line items onto the canonical taxonomy
    Normalize(NormalizeArgs),
    /// Compare saved scenarios side by side
    Compare(CompareArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::BaseCalc(args) => commands::payroll::run_base_calc(args),
        Commands::PeRisk(args) => commands::payroll::run_pe_risk(args),
        Commands::Normalize(args) => commands::comparison::run_normalize(args),
        Commands::Compare(args) => commands::comparison::run_compare(args),
        Commands::Version => {
            println!("spc {}", env!("CARGO_PKG_VERSION"));
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
