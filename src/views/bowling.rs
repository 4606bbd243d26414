//! Bowling analysis: wickets vs economy for frontline bowlers, and the economy distribution.

use serde::Serialize;

use crate::normalize::LoadedDataset;
use crate::processing::{filter, histogram};
use crate::records::BowlingRecord;

use super::charts::{Histogram, ScatterPlot, ScatterPoint};

pub const MIN_SCATTER_WICKETS: u32 = 5;
/// Ten overs.
pub const MIN_HISTOGRAM_BALLS: u32 = 60;
pub const ECONOMY_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingView<'a> {
    pub wickets_vs_economy: ScatterPlot,
    pub economy_distribution: Histogram,
    pub table: &'a [BowlingRecord],
}

pub fn bowling(data: &LoadedDataset) -> BowlingView<'_> {
    let points = filter(data.bowling(), |r| r.wickets >= MIN_SCATTER_WICKETS)
        .into_iter()
        .map(|r| ScatterPoint {
            label: r.player.clone(),
            group: r.team.clone(),
            x: r.economy,
            y: f64::from(r.wickets),
            size: r.average,
        })
        .collect();

    let economies: Vec<f64> = filter(data.bowling(), |r| r.balls >= MIN_HISTOGRAM_BALLS)
        .into_iter()
        .map(|r| r.economy)
        .collect();

    BowlingView {
        wickets_vs_economy: ScatterPlot {
            title: "Player Performance (Wkts vs. Econ)",
            x_label: "Econ",
            y_label: "Wkts",
            size_label: "Ave",
            points,
        },
        economy_distribution: Histogram {
            title: "Economy Rate Distribution (Min. 10 Overs Bowled)",
            x_label: "Economy Rate",
            bins: histogram(&economies, ECONOMY_BINS),
        },
        table: data.bowling(),
    }
}
