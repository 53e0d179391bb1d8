//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - mutated by the controls during an interactive session
//! - fed into the projection engine
//! - emitted as JSON by `fe project --json`

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Bounds and granularity of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderSpec {
    /// Clamp `value` into `[min, max]` and snap it to the nearest step counted from `min`.
    pub fn constrain(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}

pub const LOAN_AMOUNT_SLIDER: SliderSpec = SliderSpec {
    min: 1_000.0,
    max: 10_000.0,
    step: 100.0,
};

pub const ANNUAL_SALARY_SLIDER: SliderSpec = SliderSpec {
    min: 20_000.0,
    max: 100_000.0,
    step: 1_000.0,
};

/// Field of study the student is aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    ComputerScience,
    Engineering,
    Business,
}

impl Branch {
    pub const ALL: [Branch; 3] = [Branch::ComputerScience, Branch::Engineering, Branch::Business];

    pub fn display_name(self) -> &'static str {
        match self {
            Branch::ComputerScience => "Computer Science",
            Branch::Engineering => "Engineering",
            Branch::Business => "Business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Usa,
    Canada,
    Uk,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Usa, Country::Canada, Country::Uk];

    pub fn display_name(self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Canada => "Canada",
            Country::Uk => "UK",
        }
    }
}

/// Ranking bucket of the target college.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RankingRange {
    #[value(name = "top-100")]
    Top100,
    #[value(name = "top-500")]
    Top500,
    #[value(name = "top-1000")]
    Top1000,
}

impl RankingRange {
    pub const ALL: [RankingRange; 3] =
        [RankingRange::Top100, RankingRange::Top500, RankingRange::Top1000];

    pub fn display_name(self) -> &'static str {
        match self {
            RankingRange::Top100 => "Top 100",
            RankingRange::Top500 => "Top 500",
            RankingRange::Top1000 => "Top 1000",
        }
    }
}

/// Display currency.
///
/// Only the label changes with the currency; amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Cad];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "C$",
        }
    }

    /// Format a whole amount with the currency symbol, e.g. `$5000`.
    pub fn format_amount(self, amount: f64) -> String {
        format!("{}{amount:.0}", self.symbol())
    }
}

/// Every value the calculator's controls can change.
///
/// `None` means "not chosen yet" for the three optional dropdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub loan_amount: f64,
    pub annual_salary: f64,
    pub target_branch: Option<Branch>,
    pub target_country: Option<Country>,
    pub college_ranking_range: Option<RankingRange>,
    pub currency: Currency,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            loan_amount: 5_000.0,
            annual_salary: 50_000.0,
            target_branch: None,
            target_country: None,
            college_ranking_range: None,
            currency: Currency::Usd,
        }
    }
}

/// One bar of the projection: net earnings after `year` years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsPoint {
    pub year: u32,
    pub value: f64,
}

/// Projection for years `1..=N`, ordered by year ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsSeries {
    pub points: Vec<EarningsPoint>,
}

impl EarningsSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Chart labels: the year numbers as strings.
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.year.to_string()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_constrain_clamps_and_snaps() {
        assert_eq!(LOAN_AMOUNT_SLIDER.constrain(50.0), 1_000.0);
        assert_eq!(LOAN_AMOUNT_SLIDER.constrain(99_999.0), 10_000.0);
        assert_eq!(LOAN_AMOUNT_SLIDER.constrain(5_049.0), 5_000.0);
        assert_eq!(LOAN_AMOUNT_SLIDER.constrain(5_051.0), 5_100.0);
        assert_eq!(ANNUAL_SALARY_SLIDER.constrain(f64::NAN), 20_000.0);
    }

    #[test]
    fn defaults_match_mount_state() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.loan_amount, 5_000.0);
        assert_eq!(inputs.annual_salary, 50_000.0);
        assert_eq!(inputs.currency, Currency::Usd);
        assert!(inputs.target_branch.is_none());
        assert!(inputs.target_country.is_none());
        assert!(inputs.college_ranking_range.is_none());
    }

    #[test]
    fn option_labels_match_menu_text() {
        let branches: Vec<_> = Branch::ALL.iter().map(|b| b.display_name()).collect();
        assert_eq!(branches, ["Computer Science", "Engineering", "Business"]);
        let ranks: Vec<_> = RankingRange::ALL.iter().map(|r| r.display_name()).collect();
        assert_eq!(ranks, ["Top 100", "Top 500", "Top 1000"]);
        assert_eq!(Currency::Gbp.format_amount(5_000.0), "£5000");
    }

    #[test]
    fn series_labels_and_values_follow_points() {
        assert!(EarningsSeries::default().labels().is_empty());
        let series = EarningsSeries {
            points: vec![
                EarningsPoint { year: 1, value: 3.0 },
                EarningsPoint { year: 2, value: -1.0 },
            ],
        };
        assert_eq!(series.values(), [3.0, -1.0]);
        assert_eq!(series.labels(), ["1", "2"]);
    }
}
