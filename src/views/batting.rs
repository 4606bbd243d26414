//! Batting analysis: average vs strike rate for regular batters, and the top high scores.

use serde::Serialize;

use crate::normalize::LoadedDataset;
use crate::processing::{filter, top_n};
use crate::records::BattingRecord;

use super::charts::{BarChart, ScatterPlot, ScatterPoint};

/// Batters below this many runs are left off the scatter plot.
pub const MIN_SCATTER_RUNS: u32 = 50;
pub const TOP_HIGH_SCORES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingView<'a> {
    pub average_vs_strike_rate: ScatterPlot,
    pub top_high_scores: BarChart,
    pub table: &'a [BattingRecord],
}

pub fn batting(data: &LoadedDataset) -> BattingView<'_> {
    let regulars = filter(data.batting(), |r| r.runs >= MIN_SCATTER_RUNS);
    let points = regulars
        .into_iter()
        .map(|r| ScatterPoint {
            label: r.player.clone(),
            group: r.team.clone(),
            x: r.average,
            y: r.strike_rate,
            size: f64::from(r.runs),
        })
        .collect();

    let high_scores = top_n(data.batting(), TOP_HIGH_SCORES, |r| f64::from(r.high_score));

    BattingView {
        average_vs_strike_rate: ScatterPlot {
            title: "Player Performance (Avg vs. SR)",
            x_label: "Ave",
            y_label: "SR",
            size_label: "Runs",
            points,
        },
        top_high_scores: BarChart::new(
            "Top 10 High Scores",
            "High Score",
            "Player",
            high_scores
                .into_iter()
                .map(|r| (r.player.clone(), f64::from(r.high_score))),
        ),
        table: data.batting(),
    }
}
