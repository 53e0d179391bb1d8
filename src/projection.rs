//! Loan-versus-earnings projection.
//!
//! `project` is the closed form for a single horizon; `generate_series`
//! evaluates it once per year to feed the bar chart.

use crate::domain::{EarningsPoint, EarningsSeries};

/// Annual interest applied to the loan.
pub const DEFAULT_INTEREST_RATE: f64 = 0.1;

/// Projection horizon in years.
pub const DEFAULT_YEARS: u32 = 5;

/// Rate and horizon used to build a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub interest_rate: f64,
    pub years: u32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            interest_rate: DEFAULT_INTEREST_RATE,
            years: DEFAULT_YEARS,
        }
    }
}

/// Net earnings after `years`: total salary minus the compounded loan.
///
/// `salary * years - loan * (1 + rate)^years`
pub fn project(loan_amount: f64, annual_salary: f64, years: u32, interest_rate: f64) -> f64 {
    let total_earnings = annual_salary * f64::from(years);
    let total_loan_cost = loan_amount * (1.0 + interest_rate).powi(years as i32);
    total_earnings - total_loan_cost
}

/// Evaluate `project` for every year in `1..=years`.
pub fn generate_series(
    loan_amount: f64,
    annual_salary: f64,
    interest_rate: f64,
    years: u32,
) -> EarningsSeries {
    let points = (1..=years)
        .map(|year| EarningsPoint {
            year,
            value: project(loan_amount, annual_salary, year, interest_rate),
        })
        .collect();
    EarningsSeries { points }
}

/// Five-year series at the default 10% rate.
pub fn default_series(loan_amount: f64, annual_salary: f64) -> EarningsSeries {
    generate_series(loan_amount, annual_salary, DEFAULT_INTEREST_RATE, DEFAULT_YEARS)
}

pub fn series_with(loan_amount: f64, annual_salary: f64, params: ProjectionParams) -> EarningsSeries {
    generate_series(loan_amount, annual_salary, params.interest_rate, params.years)
}
