//! Command-line parsing for the future earnings calculator.
//!
//! Parsing and dispatch stay here so the projection and widget code never
//! see clap types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{
    ANNUAL_SALARY_SLIDER, Branch, CalculatorInputs, Country, Currency, LOAN_AMOUNT_SLIDER,
    RankingRange,
};
use crate::error::{AppError, EXIT_USAGE};
use crate::projection::{DEFAULT_INTEREST_RATE, DEFAULT_YEARS, ProjectionParams};

/// Longest horizon accepted from the command line.
pub const MAX_YEARS: u32 = 50;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fe", version, about = "Loan vs. future earnings calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive calculator.
    Tui(InputArgs),
    /// Print the projection for the given inputs (useful for scripting).
    Project(ProjectArgs),
}

/// Starting values for the calculator.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Loan amount (1000-10000, snapped to steps of 100).
    #[arg(short = 'l', long = "loan", env = "FE_LOAN_AMOUNT", default_value_t = 5_000.0)]
    pub loan_amount: f64,

    /// Annual salary (20000-100000, snapped to steps of 1000).
    #[arg(short = 's', long = "salary", env = "FE_ANNUAL_SALARY", default_value_t = 50_000.0)]
    pub annual_salary: f64,

    /// Display currency.
    #[arg(short = 'c', long, env = "FE_CURRENCY", value_enum, default_value_t = Currency::Usd)]
    pub currency: Currency,

    /// Target branch of study.
    #[arg(long, value_enum)]
    pub branch: Option<Branch>,

    /// Target country.
    #[arg(long, value_enum)]
    pub country: Option<Country>,

    /// College ranking range.
    #[arg(long, value_enum)]
    pub ranking: Option<RankingRange>,

    /// Annual loan interest rate as a decimal (0.1 = 10%).
    #[arg(long = "rate", env = "FE_INTEREST_RATE", default_value_t = DEFAULT_INTEREST_RATE)]
    pub interest_rate: f64,

    /// Projection horizon in years.
    #[arg(long, env = "FE_YEARS", default_value_t = DEFAULT_YEARS)]
    pub years: u32,

    /// Write logs to this file (filtered by RUST_LOG).
    #[arg(long, env = "FE_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl InputArgs {
    /// Calculator inputs with slider values clamped and snapped like the widgets do.
    pub fn to_inputs(&self) -> CalculatorInputs {
        CalculatorInputs {
            loan_amount: LOAN_AMOUNT_SLIDER.constrain(self.loan_amount),
            annual_salary: ANNUAL_SALARY_SLIDER.constrain(self.annual_salary),
            target_branch: self.branch,
            target_country: self.country,
            college_ranking_range: self.ranking,
            currency: self.currency,
        }
    }

    pub fn to_params(&self) -> Result<ProjectionParams, AppError> {
        if !self.interest_rate.is_finite() || self.interest_rate <= -1.0 {
            return Err(AppError::new(
                EXIT_USAGE,
                format!("Invalid --rate {}: must be a finite decimal above -1.", self.interest_rate),
            ));
        }
        if self.years == 0 || self.years > MAX_YEARS {
            return Err(AppError::new(
                EXIT_USAGE,
                format!("Invalid --years {}: must be between 1 and {MAX_YEARS}.", self.years),
            ));
        }
        Ok(ProjectionParams {
            interest_rate: self.interest_rate,
            years: self.years,
        })
    }
}

#[derive(Debug, Args, Clone)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Append an ASCII bar plot to the table output.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,
}
