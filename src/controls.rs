//! Sliders and dropdowns that turn user input into state mutations.
//!
//! Every control change produces exactly one [`Action`]. Sliders enforce
//! their own min/max/step, so an out-of-range value never leaves this module.

use crate::domain::{
    ANNUAL_SALARY_SLIDER, Branch, CalculatorInputs, Country, Currency, LOAN_AMOUNT_SLIDER,
    RankingRange, SliderSpec,
};
use crate::state::Action;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    spec: SliderSpec,
    value: f64,
}

impl Slider {
    pub fn new(spec: SliderSpec, value: f64) -> Self {
        Self {
            spec,
            value: spec.constrain(value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamped and snapped to the slider's step.
    pub fn set(&mut self, value: f64) -> f64 {
        self.value = self.spec.constrain(value);
        self.value
    }

    /// Move by `steps` (negative moves left), saturating at the bounds.
    pub fn step_by(&mut self, steps: i64) -> f64 {
        self.set(self.value + steps as f64 * self.spec.step)
    }

    /// Position in `[0, 1]` along the track.
    pub fn ratio(&self) -> f64 {
        let span = self.spec.max - self.spec.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.spec.min) / span).clamp(0.0, 1.0)
    }
}

/// Selector over a static option list.
///
/// With a placeholder the dropdown may start unset, but the placeholder cannot
/// be re-selected once a real option has been chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown<T: Copy + PartialEq + 'static> {
    placeholder: Option<&'static str>,
    options: &'static [T],
    selected: Option<usize>,
}

impl<T: Copy + PartialEq + 'static> Dropdown<T> {
    pub fn with_placeholder(placeholder: &'static str, options: &'static [T], value: Option<T>) -> Self {
        Self {
            placeholder: Some(placeholder),
            options,
            selected: value.and_then(|v| options.iter().position(|o| *o == v)),
        }
    }

    /// A dropdown that always has a value; falls back to the first option.
    pub fn required(options: &'static [T], value: T) -> Self {
        let selected = options.iter().position(|o| *o == value).unwrap_or(0);
        Self {
            placeholder: None,
            options,
            selected: Some(selected),
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.placeholder
    }

    pub fn options(&self) -> &'static [T] {
        self.options
    }

    pub fn selected(&self) -> Option<T> {
        self.selected.and_then(|i| self.options.get(i).copied())
    }

    pub fn select_next(&mut self) -> Option<T> {
        if self.options.is_empty() {
            return None;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % self.options.len(),
        });
        self.selected()
    }

    pub fn select_prev(&mut self) -> Option<T> {
        if self.options.is_empty() {
            return None;
        }
        let n = self.options.len();
        self.selected = Some(match self.selected {
            None => n - 1,
            Some(i) => (i + n - 1) % n,
        });
        self.selected()
    }
}

/// Identifies a control in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    LoanAmount,
    AnnualSalary,
    TargetBranch,
    TargetCountry,
    CollegeRankingRange,
    Currency,
}

impl ControlId {
    pub const ORDER: [ControlId; 6] = [
        ControlId::LoanAmount,
        ControlId::AnnualSalary,
        ControlId::TargetBranch,
        ControlId::TargetCountry,
        ControlId::CollegeRankingRange,
        ControlId::Currency,
    ];
}

/// Input gestures understood by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    FocusNext,
    FocusPrev,
    /// Move the focused control by this many steps (sliders) or options (dropdowns).
    Adjust(i64),
}

/// The six controls plus keyboard focus.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    pub loan_amount: Slider,
    pub annual_salary: Slider,
    pub target_branch: Dropdown<Branch>,
    pub target_country: Dropdown<Country>,
    pub college_ranking_range: Dropdown<RankingRange>,
    pub currency: Dropdown<Currency>,
    focus: usize,
}

impl ControlPanel {
    pub fn new(inputs: &CalculatorInputs) -> Self {
        Self {
            loan_amount: Slider::new(LOAN_AMOUNT_SLIDER, inputs.loan_amount),
            annual_salary: Slider::new(ANNUAL_SALARY_SLIDER, inputs.annual_salary),
            target_branch: Dropdown::with_placeholder("Target Branch", &Branch::ALL, inputs.target_branch),
            target_country: Dropdown::with_placeholder("Target Country", &Country::ALL, inputs.target_country),
            college_ranking_range: Dropdown::with_placeholder(
                "College Ranking Range",
                &RankingRange::ALL,
                inputs.college_ranking_range,
            ),
            currency: Dropdown::required(&Currency::ALL, inputs.currency),
            focus: 0,
        }
    }

    pub fn focused(&self) -> ControlId {
        ControlId::ORDER[self.focus]
    }

    /// Apply an input gesture; returns the resulting mutation, if any.
    pub fn handle(&mut self, event: ControlEvent) -> Option<Action> {
        match event {
            ControlEvent::FocusNext => {
                self.focus = (self.focus + 1) % ControlId::ORDER.len();
                None
            }
            ControlEvent::FocusPrev => {
                self.focus = (self.focus + ControlId::ORDER.len() - 1) % ControlId::ORDER.len();
                None
            }
            ControlEvent::Adjust(0) => None,
            ControlEvent::Adjust(delta) => Some(self.adjust(delta)),
        }
    }

    fn adjust(&mut self, delta: i64) -> Action {
        match self.focused() {
            ControlId::LoanAmount => Action::SetLoanAmount(self.loan_amount.step_by(delta)),
            ControlId::AnnualSalary => Action::SetAnnualSalary(self.annual_salary.step_by(delta)),
            ControlId::TargetBranch => Action::SetTargetBranch(cycle(&mut self.target_branch, delta)),
            ControlId::TargetCountry => Action::SetTargetCountry(cycle(&mut self.target_country, delta)),
            ControlId::CollegeRankingRange => {
                Action::SetCollegeRankingRange(cycle(&mut self.college_ranking_range, delta))
            }
            ControlId::Currency => {
                let value = cycle(&mut self.currency, delta).unwrap_or(Currency::Usd);
                Action::SetCurrency(value)
            }
        }
    }
}

fn cycle<T: Copy + PartialEq + 'static>(dropdown: &mut Dropdown<T>, delta: i64) -> Option<T> {
    if delta > 0 {
        dropdown.select_next()
    } else {
        dropdown.select_prev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_saturates_at_bounds() {
        let mut slider = Slider::new(LOAN_AMOUNT_SLIDER, 9_900.0);
        assert_eq!(slider.step_by(5), 10_000.0);
        assert_eq!(slider.step_by(-1_000), 1_000.0);
        assert_eq!(slider.set(123_456.0), 10_000.0);
        assert_eq!(slider.ratio(), 1.0);
    }

    #[test]
    fn slider_values_stay_on_step() {
        let mut slider = Slider::new(ANNUAL_SALARY_SLIDER, 50_000.0);
        for delta in [3, -7, 11, 1, -2] {
            let v = slider.step_by(delta);
            assert!((ANNUAL_SALARY_SLIDER.min..=ANNUAL_SALARY_SLIDER.max).contains(&v));
            assert_eq!((v - ANNUAL_SALARY_SLIDER.min) % ANNUAL_SALARY_SLIDER.step, 0.0);
        }
    }

    #[test]
    fn placeholder_dropdown_starts_unset_and_never_returns_to_it() {
        let mut dd = Dropdown::with_placeholder("Target Country", &Country::ALL, None);
        assert_eq!(dd.selected(), None);
        assert_eq!(dd.select_next(), Some(Country::Usa));
        assert_eq!(dd.select_next(), Some(Country::Canada));
        assert_eq!(dd.select_next(), Some(Country::Uk));
        assert_eq!(dd.select_next(), Some(Country::Usa));
        assert_eq!(dd.select_prev(), Some(Country::Uk));
    }

    #[test]
    fn unset_dropdown_prev_selects_last() {
        let mut dd = Dropdown::with_placeholder("Target Branch", &Branch::ALL, None);
        assert_eq!(dd.select_prev(), Some(Branch::Business));
    }

    #[test]
    fn required_dropdown_reflects_initial_value() {
        let dd = Dropdown::required(&Currency::ALL, Currency::Gbp);
        assert_eq!(dd.selected(), Some(Currency::Gbp));
        assert_eq!(dd.placeholder(), None);
    }

    #[test]
    fn each_adjustment_maps_to_one_action() {
        let mut panel = ControlPanel::new(&CalculatorInputs::default());
        assert_eq!(panel.handle(ControlEvent::Adjust(1)), Some(Action::SetLoanAmount(5_100.0)));

        panel.handle(ControlEvent::FocusNext);
        assert_eq!(panel.handle(ControlEvent::Adjust(-10)), Some(Action::SetAnnualSalary(40_000.0)));

        panel.handle(ControlEvent::FocusNext);
        assert_eq!(
            panel.handle(ControlEvent::Adjust(1)),
            Some(Action::SetTargetBranch(Some(Branch::ComputerScience)))
        );

        // Currency is last; FocusPrev from the first control wraps to it.
        let mut panel = ControlPanel::new(&CalculatorInputs::default());
        panel.handle(ControlEvent::FocusPrev);
        assert_eq!(panel.focused(), ControlId::Currency);
        assert_eq!(panel.handle(ControlEvent::Adjust(1)), Some(Action::SetCurrency(Currency::Eur)));
    }

    #[test]
    fn focus_changes_emit_no_action() {
        let mut panel = ControlPanel::new(&CalculatorInputs::default());
        assert_eq!(panel.handle(ControlEvent::FocusNext), None);
        assert_eq!(panel.handle(ControlEvent::Adjust(0)), None);
    }

    #[test]
    fn out_of_range_initial_values_are_clamped() {
        let inputs = CalculatorInputs {
            loan_amount: 50.0,
            annual_salary: 1e9,
            ..CalculatorInputs::default()
        };
        let panel = ControlPanel::new(&inputs);
        assert_eq!(panel.loan_amount.value(), 1_000.0);
        assert_eq!(panel.annual_salary.value(), 100_000.0);
    }
}
