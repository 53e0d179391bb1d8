//! Text and JSON output for `fe project`.
//!
//! Formatting stays here so the projection code never touches presentation.

use serde::Serialize;

use crate::domain::{CalculatorInputs, EarningsSeries};
use crate::error::{AppError, EXIT_IO};
use crate::projection::ProjectionParams;

/// JSON document emitted by `fe project --json`.
#[derive(Debug, Serialize)]
pub struct ProjectionReport<'a> {
    pub tool: &'static str,
    pub inputs: &'a CalculatorInputs,
    pub interest_rate: f64,
    pub years: u32,
    pub series: &'a EarningsSeries,
}

impl<'a> ProjectionReport<'a> {
    pub fn new(inputs: &'a CalculatorInputs, params: ProjectionParams, series: &'a EarningsSeries) -> Self {
        Self {
            tool: "fe",
            inputs,
            interest_rate: params.interest_rate,
            years: params.years,
            series,
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::new(EXIT_IO, format!("Failed to serialize projection: {e}")))
    }
}

/// Summary header plus a year-by-year table.
pub fn format_projection(inputs: &CalculatorInputs, params: ProjectionParams, series: &EarningsSeries) -> String {
    let currency = inputs.currency;
    let mut out = String::new();

    out.push_str("=== fe - Future Earnings Projection ===\n");
    out.push_str(&format!("Loan Amount: {}\n", currency.format_amount(inputs.loan_amount)));
    out.push_str(&format!("Annual Salary: {}\n", currency.format_amount(inputs.annual_salary)));
    out.push_str(&format!(
        "Rate: {:.2}% | Years: {} | Currency: {}\n",
        params.interest_rate * 100.0,
        params.years,
        currency.code()
    ));

    let profile: Vec<&str> = [
        inputs.target_branch.map(|b| b.display_name()),
        inputs.target_country.map(|c| c.display_name()),
        inputs.college_ranking_range.map(|r| r.display_name()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !profile.is_empty() {
        out.push_str(&format!("Profile: {}\n", profile.join(" / ")));
    }

    out.push('\n');
    out.push_str(&format!("{:>4}  {:>16}\n", "Year", "Net Earnings"));
    for p in &series.points {
        out.push_str(&format!("{:>4}  {:>16}\n", p.year, format!("{}{:.2}", currency.symbol(), p.value)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Branch, Currency};
    use crate::projection::default_series;

    #[test]
    fn table_lists_every_year() {
        let inputs = CalculatorInputs::default();
        let series = default_series(inputs.loan_amount, inputs.annual_salary);
        let text = format_projection(&inputs, ProjectionParams::default(), &series);

        assert!(text.contains("Loan Amount: $5000"));
        assert!(text.contains("$44500.00"));
        assert!(text.contains("$241947.45"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with(char::is_numeric)).count(), 5);
        assert!(!text.contains("Profile:"));
    }

    #[test]
    fn table_mentions_profile_when_set() {
        let inputs = CalculatorInputs {
            target_branch: Some(Branch::Engineering),
            currency: Currency::Eur,
            ..CalculatorInputs::default()
        };
        let series = default_series(inputs.loan_amount, inputs.annual_salary);
        let text = format_projection(&inputs, ProjectionParams::default(), &series);
        assert!(text.contains("Profile: Engineering"));
        assert!(text.contains("€44500.00"));
    }

    #[test]
    fn json_report_has_series() {
        let inputs = CalculatorInputs::default();
        let series = default_series(inputs.loan_amount, inputs.annual_salary);
        let json = ProjectionReport::new(&inputs, ProjectionParams::default(), &series)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["years"], 5);
        assert_eq!(value["inputs"]["currency"], "USD");
        assert_eq!(value["inputs"]["target_branch"], serde_json::Value::Null);
        let points = value["series"]["points"].as_array().unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0]["year"], 1);
    }
}
