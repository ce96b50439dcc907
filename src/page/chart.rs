//! Bar chart layout for the scheduling-conflicts comparison.
//!
//! DESIGN
//! ======
//! The dataset is fixed; only geometry is computed. Layout follows the
//! rendered chart's rules: grouped bars, a zero baseline, and the y axis
//! topping out at the data maximum rounded up to the next multiple of five.
//! Coordinates are top-left origin, matching a canvas surface.

/// Fraction of each label slot that bars occupy; the rest is gutter.
const GROUP_INNER_FRACTION: f64 = 0.8;

/// Y-axis values round up to the next multiple of this step.
const AXIS_STEP: f64 = 5.0;

/// One named series with a value per label.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    /// Fill color as a CSS hex string.
    pub color: String,
}

/// A titled, grouped bar chart over shared x labels.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// One positioned bar, in plot coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub series: usize,
    pub group: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The use-cases page's fixed dataset: manual scheduling conflicts versus
/// synced scheduling, over four weeks.
#[must_use]
pub fn conflict_dataset() -> BarChart {
    BarChart {
        title: "Scheduling Conflicts Reduction".to_owned(),
        y_label: "Number of Conflicts".to_owned(),
        labels: vec!["Week 1".to_owned(), "Week 2".to_owned(), "Week 3".to_owned(), "Week 4".to_owned()],
        series: vec![
            Series {
                label: "Manual Bookings (Conflicts)".to_owned(),
                data: vec![12.0, 15.0, 8.0, 10.0],
                color: "#d83b01".to_owned(),
            },
            Series {
                label: "MediGraph Sync (Conflicts)".to_owned(),
                data: vec![0.0, 0.0, 0.0, 0.0],
                color: "#107c10".to_owned(),
            },
        ],
    }
}

impl BarChart {
    /// Top of the y axis: data maximum rounded up to the next
    /// [`AXIS_STEP`], never below one step.
    #[must_use]
    pub fn axis_max(&self) -> f64 {
        let max = self
            .series
            .iter()
            .flat_map(|series| series.data.iter().copied())
            .fold(0.0_f64, f64::max);
        ((max / AXIS_STEP).ceil() * AXIS_STEP).max(AXIS_STEP)
    }

    /// Compute bar geometry for a plot area of `width` x `height` pixels.
    ///
    /// Bars are grouped per label, series side by side within the group,
    /// heights scaled against [`BarChart::axis_max`] with a zero baseline.
    #[must_use]
    pub fn layout(&self, width: f64, height: f64) -> Vec<Bar> {
        let n_groups = self.labels.len();
        let n_series = self.series.len();
        if n_groups == 0 || n_series == 0 || width <= 0.0 || height <= 0.0 {
            return Vec::new();
        }

        let axis_max = self.axis_max();
        let slot = width / n_groups as f64;
        let inner = slot * GROUP_INNER_FRACTION;
        let gutter = (slot - inner) / 2.0;
        let bar_width = inner / n_series as f64;

        let mut bars = Vec::with_capacity(n_groups * n_series);
        for (series_idx, series) in self.series.iter().enumerate() {
            for group in 0..n_groups {
                let value = series.data.get(group).copied().unwrap_or(0.0);
                let bar_height = (value / axis_max) * height;
                bars.push(Bar {
                    series: series_idx,
                    group,
                    x: group as f64 * slot + gutter + series_idx as f64 * bar_width,
                    y: height - bar_height,
                    width: bar_width,
                    height: bar_height,
                });
            }
        }
        bars
    }
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod tests;
