//! Single source of truth for the calculator inputs.

use crate::domain::{Branch, CalculatorInputs, Country, Currency, RankingRange};

/// Identifies which input a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LoanAmount,
    AnnualSalary,
    TargetBranch,
    TargetCountry,
    CollegeRankingRange,
    Currency,
}

impl Field {
    /// Dependency list of the chart effect.
    ///
    /// The three profile dropdowns are recorded but do not feed the projection.
    pub fn triggers_recompute(self) -> bool {
        matches!(self, Field::LoanAmount | Field::AnnualSalary | Field::Currency)
    }
}

/// A single field mutation requested by a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SetLoanAmount(f64),
    SetAnnualSalary(f64),
    SetTargetBranch(Option<Branch>),
    SetTargetCountry(Option<Country>),
    SetCollegeRankingRange(Option<RankingRange>),
    SetCurrency(Currency),
}

impl Action {
    pub fn field(&self) -> Field {
        match self {
            Action::SetLoanAmount(_) => Field::LoanAmount,
            Action::SetAnnualSalary(_) => Field::AnnualSalary,
            Action::SetTargetBranch(_) => Field::TargetBranch,
            Action::SetTargetCountry(_) => Field::TargetCountry,
            Action::SetCollegeRankingRange(_) => Field::CollegeRankingRange,
            Action::SetCurrency(_) => Field::Currency,
        }
    }
}

/// Holds the current `CalculatorInputs`.
///
/// Mutators are last-write-wins; range enforcement belongs to the controls.
#[derive(Debug, Clone, Default)]
pub struct StateHolder {
    inputs: CalculatorInputs,
}

impl StateHolder {
    pub fn new(inputs: CalculatorInputs) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn set_loan_amount(&mut self, value: f64) -> Field {
        self.inputs.loan_amount = value;
        Field::LoanAmount
    }

    pub fn set_annual_salary(&mut self, value: f64) -> Field {
        self.inputs.annual_salary = value;
        Field::AnnualSalary
    }

    pub fn set_target_branch(&mut self, value: Option<Branch>) -> Field {
        self.inputs.target_branch = value;
        Field::TargetBranch
    }

    pub fn set_target_country(&mut self, value: Option<Country>) -> Field {
        self.inputs.target_country = value;
        Field::TargetCountry
    }

    pub fn set_college_ranking_range(&mut self, value: Option<RankingRange>) -> Field {
        self.inputs.college_ranking_range = value;
        Field::CollegeRankingRange
    }

    pub fn set_currency(&mut self, value: Currency) -> Field {
        self.inputs.currency = value;
        Field::Currency
    }

    /// Route a control action to its mutator.
    pub fn apply(&mut self, action: Action) -> Field {
        match action {
            Action::SetLoanAmount(v) => self.set_loan_amount(v),
            Action::SetAnnualSalary(v) => self.set_annual_salary(v),
            Action::SetTargetBranch(v) => self.set_target_branch(v),
            Action::SetTargetCountry(v) => self.set_target_country(v),
            Action::SetCollegeRankingRange(v) => self.set_college_ranking_range(v),
            Action::SetCurrency(v) => self.set_currency(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_routes_each_action_to_its_field() {
        let mut state = StateHolder::default();
        let actions = [
            Action::SetLoanAmount(1_200.0),
            Action::SetAnnualSalary(64_000.0),
            Action::SetTargetBranch(Some(Branch::Business)),
            Action::SetTargetCountry(Some(Country::Canada)),
            Action::SetCollegeRankingRange(Some(RankingRange::Top500)),
            Action::SetCurrency(Currency::Eur),
        ];
        for action in actions {
            assert_eq!(state.apply(action), action.field());
        }

        let inputs = state.inputs();
        assert_eq!(inputs.loan_amount, 1_200.0);
        assert_eq!(inputs.annual_salary, 64_000.0);
        assert_eq!(inputs.target_branch, Some(Branch::Business));
        assert_eq!(inputs.target_country, Some(Country::Canada));
        assert_eq!(inputs.college_ranking_range, Some(RankingRange::Top500));
        assert_eq!(inputs.currency, Currency::Eur);
    }

    #[test]
    fn last_write_wins() {
        let mut state = StateHolder::default();
        state.set_loan_amount(2_000.0);
        state.set_loan_amount(3_000.0);
        assert_eq!(state.inputs().loan_amount, 3_000.0);
    }

    #[test]
    fn only_loan_salary_and_currency_trigger_recompute() {
        assert!(Field::LoanAmount.triggers_recompute());
        assert!(Field::AnnualSalary.triggers_recompute());
        assert!(Field::Currency.triggers_recompute());
        assert!(!Field::TargetBranch.triggers_recompute());
        assert!(!Field::TargetCountry.triggers_recompute());
        assert!(!Field::CollegeRankingRange.triggers_recompute());
    }
}
