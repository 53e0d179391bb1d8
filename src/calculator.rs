//! The calculator widget: state, controls and the two chart surfaces.
//!
//! Lifecycle:
//! - `mount` attaches both surfaces and draws them once
//! - `dispatch` applies one control action and, when the touched field is a
//!   recompute trigger, rebuilds both charts
//! - `unmount` releases every handle

use tracing::{debug, info};

use crate::chart::{ChartRenderer, ChartSpec, ChartSurface, SurfaceId};
use crate::controls::{ControlEvent, ControlPanel};
use crate::domain::{CalculatorInputs, EarningsSeries};
use crate::projection::{ProjectionParams, series_with};
use crate::state::{Action, Field, StateHolder};

pub struct Calculator<H> {
    state: StateHolder,
    controls: ControlPanel,
    params: ProjectionParams,
    earnings: ChartSurface<H>,
    example: ChartSurface<H>,
}

impl<H> Calculator<H> {
    /// Build an unmounted calculator. Slider inputs are clamped to their ranges.
    pub fn new(inputs: CalculatorInputs, params: ProjectionParams) -> Self {
        let controls = ControlPanel::new(&inputs);
        let inputs = CalculatorInputs {
            loan_amount: controls.loan_amount.value(),
            annual_salary: controls.annual_salary.value(),
            ..inputs
        };
        Self {
            state: StateHolder::new(inputs),
            controls,
            params,
            earnings: ChartSurface::new(SurfaceId::Earnings),
            example: ChartSurface::new(SurfaceId::Example),
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        self.state.inputs()
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn params(&self) -> ProjectionParams {
        self.params
    }

    pub fn surface(&self, id: SurfaceId) -> &ChartSurface<H> {
        match id {
            SurfaceId::Earnings => &self.earnings,
            SurfaceId::Example => &self.example,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.earnings.is_attached() && self.example.is_attached()
    }

    /// Current projection for the stored inputs.
    pub fn series(&self) -> EarningsSeries {
        let inputs = self.state.inputs();
        series_with(inputs.loan_amount, inputs.annual_salary, self.params)
    }

    pub fn mount<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        self.earnings.attach();
        self.example.attach();
        info!(
            loan = self.inputs().loan_amount,
            salary = self.inputs().annual_salary,
            years = self.params.years,
            "calculator mounted"
        );
        self.refresh_charts(renderer);
    }

    /// Apply a control action and re-render if the field is a dependency of the charts.
    ///
    /// Slider values pass through the slider first, so the stored value is
    /// always clamped and on a step.
    pub fn dispatch<R>(&mut self, renderer: &mut R, action: Action) -> Field
    where
        R: ChartRenderer<Handle = H>,
    {
        let action = self.constrain(action);
        let field = self.state.apply(action);
        self.sync_controls(action);
        debug!(?action, recompute = field.triggers_recompute(), "action applied");
        if field.triggers_recompute() {
            self.refresh_charts(renderer);
        }
        field
    }

    /// Feed an input gesture through the control panel.
    pub fn handle_control<R>(&mut self, renderer: &mut R, event: ControlEvent) -> Option<Field>
    where
        R: ChartRenderer<Handle = H>,
    {
        let action = self.controls.handle(event)?;
        Some(self.dispatch(renderer, action))
    }

    pub fn unmount<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        self.earnings.detach(renderer);
        self.example.detach(renderer);
        info!("calculator unmounted");
    }

    fn refresh_charts<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        let series = self.series();
        self.earnings.rebind(renderer, &ChartSpec::earnings(&series));
        self.example.rebind(renderer, &ChartSpec::example());
    }

    fn constrain(&mut self, action: Action) -> Action {
        match action {
            Action::SetLoanAmount(v) => Action::SetLoanAmount(self.controls.loan_amount.set(v)),
            Action::SetAnnualSalary(v) => Action::SetAnnualSalary(self.controls.annual_salary.set(v)),
            other => other,
        }
    }

    // Keep the dropdowns in step with actions that did not originate from them.
    fn sync_controls(&mut self, action: Action) {
        let c = &mut self.controls;
        match action {
            Action::SetTargetBranch(v) if c.target_branch.selected() != v => {
                c.target_branch = crate::controls::Dropdown::with_placeholder(
                    "Target Branch",
                    c.target_branch.options(),
                    v,
                );
            }
            Action::SetTargetCountry(v) if c.target_country.selected() != v => {
                c.target_country = crate::controls::Dropdown::with_placeholder(
                    "Target Country",
                    c.target_country.options(),
                    v,
                );
            }
            Action::SetCollegeRankingRange(v) if c.college_ranking_range.selected() != v => {
                c.college_ranking_range = crate::controls::Dropdown::with_placeholder(
                    "College Ranking Range",
                    c.college_ranking_range.options(),
                    v,
                );
            }
            Action::SetCurrency(v) if c.currency.selected() != Some(v) => {
                c.currency = crate::controls::Dropdown::required(c.currency.options(), v);
            }
            _ => {}
        }
    }
}
