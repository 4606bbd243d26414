//! Tournament summary: headline totals, leading run scorers and wicket takers, wins per team.

use serde::Serialize;

use crate::normalize::LoadedDataset;
use crate::processing::{sum_by, top_n, value_counts};
use crate::records::MatchResult;

use super::charts::{BarChart, DonutChart, KpiCard};

pub const TOP_RUN_SCORERS: usize = 5;
pub const TOP_WICKET_TAKERS: usize = 5;
pub const TOP_WINNING_TEAMS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub total_runs: u64,
    pub total_wickets: u64,
    pub total_matches: usize,
    pub total_fifties: u64,
    pub top_run_scorers: BarChart,
    pub top_wicket_takers: BarChart,
    pub team_wins: DonutChart,
}

impl SummaryView {
    pub fn kpis(&self) -> [KpiCard; 4] {
        [
            KpiCard { title: "Total Runs", value: self.total_runs },
            KpiCard { title: "Total Wickets", value: self.total_wickets },
            KpiCard { title: "Total Matches", value: self.total_matches as u64 },
            KpiCard { title: "Total 50s", value: self.total_fifties },
        ]
    }
}

/// Matches won per team, most wins first.
///
/// Only ever sees normalized match rows; blank winners are not counted.
pub fn team_wins(matches: &[MatchResult]) -> Vec<(String, usize)> {
    value_counts(matches, |m| Some(m.winner.as_str()))
}

pub fn summary(data: &LoadedDataset) -> SummaryView {
    let top_runs = top_n(data.batting(), TOP_RUN_SCORERS, |r| f64::from(r.runs));
    let top_wickets = top_n(data.bowling(), TOP_WICKET_TAKERS, |r| f64::from(r.wickets));
    let wins = team_wins(data.matches());

    SummaryView {
        total_runs: sum_by(data.batting(), |r| r.runs),
        total_wickets: sum_by(data.bowling(), |r| r.wickets),
        total_matches: data.matches().len(),
        total_fifties: sum_by(data.batting(), |r| r.fifties),
        top_run_scorers: BarChart::new(
            "Top 5 Run Scorers",
            "Total Runs",
            "Player",
            top_runs.into_iter().map(|r| (r.player.clone(), f64::from(r.runs))),
        ),
        top_wicket_takers: BarChart::new(
            "Top 5 Wicket Takers",
            "Total Wickets",
            "Player",
            top_wickets.into_iter().map(|r| (r.player.clone(), f64::from(r.wickets))),
        ),
        team_wins: DonutChart::new(
            "Team Win Distribution (Top 10)",
            wins.into_iter()
                .take(TOP_WINNING_TEAMS)
                .map(|(team, n)| (team, n as f64)),
        ),
    }
}
