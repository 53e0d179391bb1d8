//! Ratatui-based terminal UI.
//!
//! Left column: the two sliders and four dropdowns. Right column: the
//! projection bar chart above the static example line chart.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::calculator::Calculator;
use crate::chart::SurfaceId;
use crate::controls::{ControlEvent, ControlId, Dropdown};
use crate::domain::{Branch, CalculatorInputs, Country, Currency, RankingRange};
use crate::error::AppError;
use crate::projection::ProjectionParams;

mod plotters_chart;
mod renderer;

use plotters_chart::SpecChart;
pub use renderer::{ChartHandle, TerminalCharts};

/// Coarse slider moves (PageUp/PageDown, Shift+arrow).
const COARSE_STEPS: i64 = 10;

/// Start the TUI.
pub fn run(inputs: CalculatorInputs, params: ProjectionParams) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::io("Failed to initialize terminal", e))?;

    let mut app = App::new(inputs, params);
    let result = app.event_loop(&mut terminal);
    app.shutdown();
    result
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::io("Failed to enable raw mode", e))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::io("Failed to enter alternate screen", e));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    calculator: Calculator<ChartHandle>,
    charts: TerminalCharts,
    status: String,
}

impl App {
    fn new(inputs: CalculatorInputs, params: ProjectionParams) -> Self {
        let mut charts = TerminalCharts::new();
        let mut calculator = Calculator::new(inputs, params);
        calculator.mount(&mut charts);
        Self {
            calculator,
            charts,
            status: "Ready.".to_string(),
        }
    }

    fn shutdown(&mut self) {
        self.calculator.unmount(&mut self.charts);
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            // Redraw only after input or resize; idle polling leaves the frame alone.
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::io("Terminal draw error", e))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100)).map_err(|e| AppError::io("Event poll error", e))? {
                continue;
            }

            match event::read().map_err(|e| AppError::io("Event read error", e))? {
                Event::Key(key) => {
                    // Windows terminals also report Release/Repeat; act on Press only.
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code, key.modifiers) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let coarse = modifiers.contains(KeyModifiers::SHIFT);
        let event = match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::BackTab => ControlEvent::FocusPrev,
            KeyCode::Down | KeyCode::Tab => ControlEvent::FocusNext,
            KeyCode::Left => ControlEvent::Adjust(if coarse { -COARSE_STEPS } else { -1 }),
            KeyCode::Right => ControlEvent::Adjust(if coarse { COARSE_STEPS } else { 1 }),
            KeyCode::PageDown => ControlEvent::Adjust(-COARSE_STEPS),
            KeyCode::PageUp => ControlEvent::Adjust(COARSE_STEPS),
            _ => return false,
        };

        if let Some(field) = self.calculator.handle_control(&mut self.charts, event) {
            self.status = if field.triggers_recompute() {
                "Projection updated.".to_string()
            } else {
                format!("{field:?} saved (not used by the projection).")
            };
        }
        false
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        // Header / body / footer; the bordered bars need 3 rows each.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, rows[0]);

        // Fixed-width inputs column so slider titles never wrap; charts take the rest.
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)])
            .split(rows[1]);
        self.draw_controls(frame, cols[0]);

        // The projection gets the larger share.
        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(cols[1]);
        self.draw_chart(frame, charts[0], SurfaceId::Earnings, "Estimated Future Earnings");
        self.draw_chart(frame, charts[1], SurfaceId::Example, "Example Data");

        self.draw_footer(frame, rows[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let inputs = self.calculator.inputs();
        let params = self.calculator.params();
        let line = Line::from(vec![
            Span::styled("Future Earnings Calculator", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(
                    " | rate: {:.1}% | years: {} | currency: {}",
                    params.interest_rate * 100.0,
                    params.years,
                    inputs.currency.code(),
                ),
                Style::default().fg(Color::Gray),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_controls(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Inputs").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Two bordered gauges, then one line per dropdown.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let controls = self.calculator.controls();
        let focused = controls.focused();
        let currency = self.calculator.inputs().currency;

        let sliders = [
            (ControlId::LoanAmount, "Loan Amount", controls.loan_amount),
            (ControlId::AnnualSalary, "Annual Salary", controls.annual_salary),
        ];
        for (row, (id, label, slider)) in sliders.into_iter().enumerate() {
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(focus_style(id == focused))
                        .title(format!(" {label}: {} ", currency.format_amount(slider.value()))),
                )
                .gauge_style(Style::default().fg(Color::Blue))
                .label("")
                .ratio(slider.ratio());
            frame.render_widget(gauge, rows[row]);
        }

        let dropdowns = [
            (ControlId::TargetBranch, dropdown_text(&controls.target_branch, Branch::display_name)),
            (ControlId::TargetCountry, dropdown_text(&controls.target_country, Country::display_name)),
            (
                ControlId::CollegeRankingRange,
                dropdown_text(&controls.college_ranking_range, RankingRange::display_name),
            ),
            (ControlId::Currency, dropdown_text(&controls.currency, Currency::code)),
        ];
        for (i, (id, text)) in dropdowns.into_iter().enumerate() {
            let marker = if id == focused { "» " } else { "  " };
            let p = Paragraph::new(format!("{marker}{text}")).style(focus_style(id == focused));
            frame.render_widget(p, rows[i + 2]);
        }
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect, surface: SurfaceId, title: &str) {
        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        // Plotters only paints where it draws; clear leftovers from the previous frame.
        frame.render_widget(Clear, inner);

        let spec = self
            .calculator
            .surface(surface)
            .handle()
            .and_then(|h| self.charts.get(h));
        let Some(spec) = spec else {
            let msg = Paragraph::new("No chart.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let fmt_y = match surface {
            SurfaceId::Earnings => fmt_axis_money,
            SurfaceId::Example => fmt_axis_plain,
        };
        frame.render_widget(SpecChart { spec, fmt_y }, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Shift/PgUp/PgDn coarse  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn dropdown_text<T: Copy + PartialEq + 'static>(dropdown: &Dropdown<T>, name: fn(T) -> &'static str) -> String {
    match (dropdown.selected(), dropdown.placeholder()) {
        (Some(v), Some(placeholder)) => format!("{placeholder}: ◂ {} ▸", name(v)),
        (Some(v), None) => format!("Currency: ◂ {} ▸", name(v)),
        (None, Some(placeholder)) => format!("{placeholder}: ◂ - ▸"),
        (None, None) => "-".to_string(),
    }
}

fn fmt_axis_money(v: f64) -> String {
    if v.abs() >= 1_000.0 {
        format!("{:.0}k", v / 1_000.0)
    } else {
        format!("{v:.0}")
    }
}

fn fmt_axis_plain(v: f64) -> String {
    format!("{v:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(CalculatorInputs::default(), ProjectionParams::default())
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buf = terminal.backend().buffer().clone();
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn mounted_app_holds_two_live_charts() {
        let app = app();
        assert_eq!(app.charts.live_count(), 2);
        assert_eq!(app.charts.live_on(SurfaceId::Earnings), 1);
    }

    #[test]
    fn draw_shows_controls_and_titles() {
        let screen = render(&app(), 120, 40);
        assert!(screen.contains("Loan Amount: $5000"));
        assert!(screen.contains("Annual Salary: $50000"));
        assert!(screen.contains("Target Branch"));
        assert!(screen.contains("Example Data"));
    }

    #[test]
    fn draw_tiny_terminal_does_not_panic() {
        render(&app(), 20, 6);
    }

    #[test]
    fn keys_adjust_focused_slider() {
        let mut app = app();
        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.calculator.inputs().loan_amount, 5_100.0);
        app.handle_key(KeyCode::Left, KeyModifiers::SHIFT);
        assert_eq!(app.calculator.inputs().loan_amount, 4_100.0);
        assert_eq!(app.charts.live_count(), 2);
    }

    #[test]
    fn currency_change_relabels_sliders() {
        let mut app = app();
        app.handle_key(KeyCode::BackTab, KeyModifiers::NONE);
        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Loan Amount: €5000"));
        assert_eq!(app.charts.live_count(), 2);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.handle_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE));
    }

    #[test]
    fn shutdown_releases_charts() {
        let mut app = app();
        app.shutdown();
        assert_eq!(app.charts.live_count(), 0);
        let screen = render(&app, 120, 40);
        assert!(screen.contains("No chart."));
    }
}
