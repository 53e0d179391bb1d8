use serde::Serialize;

use crate::domain::EarningsSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// `#36a2eb`
pub const EARNINGS_COLOR: Rgb = Rgb(54, 162, 235);
/// `rgb(75, 192, 192)`
pub const EXAMPLE_COLOR: Rgb = Rgb(75, 192, 192);

pub const EXAMPLE_LABELS: [&str; 6] = ["Red", "Blue", "Yellow", "Green", "Purple", "Orange"];
pub const EXAMPLE_DATA: [f64; 6] = [12.0, 19.0, 3.0, 5.0, 2.0, 3.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartOptions {
    pub begin_at_zero: bool,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

/// Everything a backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset: Dataset,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Bar chart of the projection, one bar per year.
    pub fn earnings(series: &EarningsSeries) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: series.labels(),
            dataset: Dataset {
                label: "Estimated Future Earnings".to_string(),
                data: series.values(),
                color: EARNINGS_COLOR,
            },
            options: ChartOptions {
                begin_at_zero: true,
                x_title: Some("Years".to_string()),
                y_title: Some("Estimated Future Earnings ($)".to_string()),
            },
        }
    }

    /// Fixed line chart that does not depend on any input.
    pub fn example() -> Self {
        Self {
            kind: ChartKind::Line,
            labels: EXAMPLE_LABELS.iter().map(|s| s.to_string()).collect(),
            dataset: Dataset {
                label: "Example Data".to_string(),
                data: EXAMPLE_DATA.to_vec(),
                color: EXAMPLE_COLOR,
            },
            options: ChartOptions {
                begin_at_zero: true,
                x_title: None,
                y_title: None,
            },
        }
    }

    /// Y bounds for drawing: includes zero when `begin_at_zero`, padded by 5%.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (mut lo, mut hi) = self
            .dataset
            .data
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if !lo.is_finite() || !hi.is_finite() {
            return [0.0, 1.0];
        }
        if self.options.begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if hi <= lo {
            hi = lo + 1.0;
        }

        let pad = (hi - lo) * 0.05;
        let lo = if self.options.begin_at_zero && lo == 0.0 { 0.0 } else { lo - pad };
        [lo, hi + pad]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::default_series;

    #[test]
    fn earnings_spec_carries_series() {
        let series = default_series(5_000.0, 50_000.0);
        let spec = ChartSpec::earnings(&series);
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, ["1", "2", "3", "4", "5"]);
        assert_eq!(spec.dataset.data, series.values());
        assert!(spec.options.begin_at_zero);
    }

    #[test]
    fn example_spec_is_static() {
        assert_eq!(ChartSpec::example(), ChartSpec::example());
        assert_eq!(ChartSpec::example().kind, ChartKind::Line);
    }

    #[test]
    fn y_bounds_start_at_zero_for_positive_data() {
        let bounds = ChartSpec::example().y_bounds();
        assert_eq!(bounds[0], 0.0);
        assert!(bounds[1] > 19.0);
    }

    #[test]
    fn y_bounds_span_negative_values() {
        let mut spec = ChartSpec::example();
        spec.dataset.data = vec![-10.0, 5.0];
        let bounds = spec.y_bounds();
        assert!(bounds[0] < -10.0);
        assert!(bounds[1] > 5.0);
    }

    #[test]
    fn y_bounds_fallback_for_empty_data() {
        let mut spec = ChartSpec::example();
        spec.dataset.data.clear();
        assert_eq!(spec.y_bounds(), [0.0, 1.0]);
    }
}
