//! Chart-ready data shapes. Styling is left to whoever draws them.

use serde::Serialize;

use crate::processing::HistogramBin;

/// A headline number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Bars in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub value_label: &'static str,
    pub category_label: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(
        title: &'static str,
        value_label: &'static str,
        category_label: &'static str,
        bars: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        Self {
            title,
            value_label,
            category_label,
            bars: bars.into_iter().map(|(label, value)| Bar { label, value }).collect(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    /// Colour grouping (the player's team).
    pub group: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPlot {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub size_label: &'static str,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub title: &'static str,
    pub x_label: &'static str,
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Share of the chart total, 0..=100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub title: &'static str,
    pub slices: Vec<Slice>,
}

impl DonutChart {
    /// Build slices, computing each one's share of the shown total.
    pub fn new(title: &'static str, slices: impl IntoIterator<Item = (String, f64)>) -> Self {
        let pairs: Vec<(String, f64)> = slices.into_iter().collect();
        let total: f64 = pairs.iter().map(|(_, v)| v).sum();
        let slices = pairs
            .into_iter()
            .map(|(label, value)| Slice {
                percent: if total > 0.0 { value / total * 100.0 } else { 0.0 },
                label,
                value,
            })
            .collect();
        Self { title, slices }
    }
}

/// Long-form rows for a stacked/grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBarChart<S> {
    pub title: &'static str,
    /// Category order on the axis.
    pub categories: Vec<String>,
    pub entries: Vec<S>,
}
