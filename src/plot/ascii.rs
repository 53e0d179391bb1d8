//! ASCII/Unicode bar plot for terminal output.
//!
//! Deliberately simple (one row per bar), optimized for:
//! - quick visual sanity checks when scripting `fe project`
//! - deterministic output (easy to assert on in tests)
//!
//! Bars grow right from a zero column; negative values grow left of it.

use crate::chart::ChartSpec;

const BAR: char = '█';
const AXIS: char = '│';

/// Render one bar per category of `spec`, scaled to `width` columns.
pub fn render_ascii_bars(spec: &ChartSpec, width: usize) -> String {
    let width = width.max(10);
    let data = &spec.dataset.data;
    let label_w = spec.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let (lo, hi) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = (hi - lo).max(1e-12);

    // Columns left of the axis are reserved for negative bars.
    let neg_cols = ((-lo / span) * width as f64).round() as usize;
    let pos_cols = width - neg_cols.min(width);

    let mut out = String::new();
    out.push_str(&format!("{} (range {lo:.2} .. {hi:.2})\n", spec.dataset.label));

    for (label, &v) in spec.labels.iter().zip(data.iter()) {
        let cells = ((v.abs() / span) * width as f64).round() as usize;
        let (left, right) = if v < 0.0 {
            let n = cells.min(neg_cols);
            (format!("{}{}", " ".repeat(neg_cols - n), BAR.to_string().repeat(n)), String::new())
        } else {
            (" ".repeat(neg_cols), BAR.to_string().repeat(cells.min(pos_cols)))
        };
        out.push_str(&format!("{label:>label_w$} {left}{AXIS}{right} {v:.2}\n"));
    }

    out
}
