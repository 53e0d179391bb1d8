//! Plotters-powered chart widget for Ratatui.
//!
//! Draws one [`ChartSpec`]: bars for [`ChartKind::Bar`], a polyline for
//! [`ChartKind::Line`]. Plotters output goes into the Ratatui buffer through
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::chart::{ChartKind, ChartSpec, Rgb};

/// Bar width as a fraction of one category slot.
const BAR_WIDTH: f64 = 0.6;

/// Render-only view over a stored [`ChartSpec`].
///
/// The spec already carries data, bounds and titles; `fmt_y` lets the caller
/// pick currency or plain tick labels.
pub struct SpecChart<'a> {
    pub spec: &'a ChartSpec,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for SpecChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(ratatui::style::Color::Yellow),
            );
            return;
        }

        let labels = &self.spec.labels;
        let data = &self.spec.dataset.data;
        let n = data.len().max(1) as f64;
        let [y0, y1] = self.spec.y_bounds();
        // Category `i` sits at x = i; bars get half a slot of room on each side.
        let (x0, x1) = match self.spec.kind {
            ChartKind::Bar => (-0.5, n - 0.5),
            ChartKind::Line => (0.0, (n - 1.0).max(1.0)),
        };
        let color = to_plotters(self.spec.dataset.color);
        let kind = self.spec.kind;
        let x_desc = self.spec.options.x_title.clone().unwrap_or_default();
        let y_desc = self.spec.options.y_title.clone().unwrap_or_default();
        let fmt_y = self.fmt_y;

        // `widget_fn` hands us a Plotters drawing area backed by Ratatui's canvas.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are coarse; wide enough for "$250000" on the left.
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes and tick labels only. Mesh lines turn into noise at cell resolution.
            let fmt_x = |v: &f64| category_label(labels, *v);
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(x_desc.as_str())
                .y_desc(y_desc.as_str())
                .x_labels(labels.len().max(2))
                .y_labels(5)
                .x_label_formatter(&fmt_x)
                .y_label_formatter(&|v| fmt_y(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // The dataset color comes from the spec; bright RGB reads well on dark terminals.
            match kind {
                ChartKind::Bar => {
                    // One rectangle per year, anchored at zero so negative net earnings hang below the axis.
                    let half = BAR_WIDTH / 2.0;
                    chart.draw_series(data.iter().enumerate().map(|(i, &v)| {
                        let x = i as f64;
                        Rectangle::new([(x - half, 0.0), (x + half, v)], color.filled())
                    }))?;
                }
                ChartKind::Line => {
                    // Unfilled polyline through each category point.
                    chart.draw_series(LineSeries::new(
                        data.iter().enumerate().map(|(i, &v)| (i as f64, v)),
                        &color,
                    ))?;
                }
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

fn to_plotters(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Label for a tick at `x`; only whole-number ticks name a category.
fn category_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}
