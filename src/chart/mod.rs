mod pie;

pub(crate) use pie::PieChart;

use crate::models::Entity;
use std::f64::consts::PI;

/// Slice fill colors, cycled when there are more slices than colors.
pub(crate) const PIE_COLORS: [&str; 2] = ["red", "yellow"];
pub(crate) const PIE_BORDER_COLOR: &str = "#3cba9f";
pub(crate) const PIE_BORDER_WIDTH: u32 = 1;

/// Parallel label/value sequences fed to the pie renderer.
///
/// `labels.len() == values.len()` always holds; both are built in one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Region labels and promet values, in row order. Missing regions become
    /// empty labels and missing promet counts as zero.
    pub fn from_records<E: Entity>(rows: &[E]) -> Self {
        let (labels, values) = rows
            .iter()
            .map(|r| {
                (
                    r.region().unwrap_or_default().to_string(),
                    f64::from(r.promet().unwrap_or(0)),
                )
            })
            .unzip();
        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of the drawable (non-negative) values.
    pub fn total(&self) -> f64 {
        self.values.iter().map(|v| v.max(0.0)).sum()
    }

    pub fn slices(&self) -> Vec<PieSlice> {
        let total = self.total();
        if total <= 0.0 {
            return vec![];
        }

        // Start at 12 o'clock and go clockwise.
        let mut angle = -PI / 2.0;
        self.labels
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(i, (label, value))| {
                let fraction = value.max(0.0) / total;
                let start_angle = angle;
                angle += fraction * 2.0 * PI;
                PieSlice {
                    label: label.clone(),
                    value: *value,
                    fraction,
                    start_angle,
                    end_angle: angle,
                    color: PIE_COLORS[i % PIE_COLORS.len()],
                }
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl PieSlice {
    pub fn is_full_circle(&self) -> bool {
        self.fraction >= 1.0 - f64::EPSILON
    }

    /// SVG path for a wedge centred on (`cx`, `cy`).
    ///
    /// A full circle cannot be expressed as one arc; callers draw a `<circle>`
    /// for that case (see [`PieSlice::is_full_circle`]).
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        let (x0, y0) = (cx + r * self.start_angle.cos(), cy + r * self.start_angle.sin());
        let (x1, y1) = (cx + r * self.end_angle.cos(), cy + r * self.end_angle.sin());
        let large_arc = if self.fraction > 0.5 { 1 } else { 0 };
        format!(
            "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
        )
    }

    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}
