//! Player analysis: one player's deep dive, or a side-by-side comparison.

use serde::Serialize;

use crate::normalize::LoadedDataset;
use crate::processing::filter;
use crate::records::{BattingRecord, BowlingRecord};

use super::charts::BarChart;

/// Preselected in the single-player view when present.
pub const DEFAULT_PLAYER: &str = "Virat Kohli";
/// Preselected in the comparison view, in this order, when present.
pub const DEFAULT_COMPARISON: [&str; 2] = ["Virat Kohli", "Rohit Sharma"];

/// Which player(s) the analysis page should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSelection {
    /// Deep dive on one player; `None` picks [`DEFAULT_PLAYER`] or the first known player.
    Single(Option<String>),
    /// Compare several players; `None` picks [`DEFAULT_COMPARISON`].
    Compare(Option<Vec<String>>),
}

impl Default for PlayerSelection {
    fn default() -> Self {
        PlayerSelection::Single(None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingLine {
    pub runs: u32,
    pub average: f64,
    pub strike_rate: f64,
    pub high_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingLine {
    pub wickets: u32,
    pub average: f64,
    pub economy: f64,
    pub best_bowling: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeepingLine {
    pub dismissals: u32,
    pub catches: u32,
    pub stumpings: u32,
}

/// Everything known about one player. A section is `None` when the player has no row there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player: String,
    pub batting: Option<BattingLine>,
    /// Only present if the player delivered at least one ball.
    pub bowling: Option<BowlingLine>,
    pub catches: Option<u32>,
    pub keeping: Option<KeepingLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerComparison {
    pub players: Vec<String>,
    pub runs: BarChart,
    pub batting_average: BarChart,
    pub strike_rate: BarChart,
    pub wickets: BarChart,
    pub economy: BarChart,
    pub bowling_average: BarChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlayerAnalysisView {
    /// `None` only when the dataset has no players at all.
    Profile { profile: Option<PlayerProfile> },
    Comparison(PlayerComparison),
}

pub fn player_analysis(data: &LoadedDataset, selection: &PlayerSelection) -> PlayerAnalysisView {
    match selection {
        PlayerSelection::Single(requested) => {
            let name = requested.clone().or_else(|| default_player(data.players()));
            PlayerAnalysisView::Profile {
                profile: name.map(|n| profile(data, &n)),
            }
        }
        PlayerSelection::Compare(requested) => {
            let names = requested
                .clone()
                .unwrap_or_else(|| default_comparison(data.players()));
            PlayerAnalysisView::Comparison(compare(data, &names))
        }
    }
}

fn default_player(players: &[String]) -> Option<String> {
    players
        .iter()
        .find(|p| p.as_str() == DEFAULT_PLAYER)
        .or_else(|| players.first())
        .cloned()
}

fn default_comparison(players: &[String]) -> Vec<String> {
    DEFAULT_COMPARISON
        .iter()
        .filter(|name| players.iter().any(|p| p == *name))
        .map(|name| name.to_string())
        .collect()
}

/// Look up `player` in every table. The first matching row of each table is used.
pub fn profile(data: &LoadedDataset, player: &str) -> PlayerProfile {
    let batting = data.batting().iter().find(|r| r.player == player).map(|r| BattingLine {
        runs: r.runs,
        average: r.average,
        strike_rate: r.strike_rate,
        high_score: r.high_score,
    });
    let bowling = data
        .bowling()
        .iter()
        .find(|r| r.player == player)
        .filter(|r| r.has_bowled())
        .map(|r| BowlingLine {
            wickets: r.wickets,
            average: r.average,
            economy: r.economy,
            best_bowling: r.best_bowling.clone(),
        });
    let catches = data
        .fielding()
        .iter()
        .find(|r| r.player == player)
        .map(|r| r.catches);
    let keeping = data
        .wicket_keeping()
        .iter()
        .find(|r| r.player == player)
        .map(|r| KeepingLine {
            dismissals: r.dismissals,
            catches: r.catches,
            stumpings: r.stumpings,
        });

    PlayerProfile {
        player: player.to_string(),
        batting,
        bowling,
        catches,
        keeping,
    }
}

/// Bar charts for the selected players, in table order. Bowling charts skip anyone who never
/// bowled a ball.
pub fn compare(data: &LoadedDataset, players: &[String]) -> PlayerComparison {
    let selected = |name: &str| players.iter().any(|p| p == name);
    let bat: Vec<&BattingRecord> = filter(data.batting(), |r| selected(&r.player));
    let bowl: Vec<&BowlingRecord> = filter(data.bowling(), |r| selected(&r.player) && r.has_bowled());

    let bat_chart = |title, value_label, value: fn(&BattingRecord) -> f64| {
        BarChart::new(title, value_label, "Player", bat.iter().map(|r| (r.player.clone(), value(r))))
    };
    let bowl_chart = |title, value_label, value: fn(&BowlingRecord) -> f64| {
        BarChart::new(title, value_label, "Player", bowl.iter().map(|r| (r.player.clone(), value(r))))
    };

    PlayerComparison {
        players: players.to_vec(),
        runs: bat_chart("Total Runs", "Runs", |r| f64::from(r.runs)),
        batting_average: bat_chart("Batting Average", "Ave", |r| r.average),
        strike_rate: bat_chart("Strike Rate", "SR", |r| r.strike_rate),
        wickets: bowl_chart("Total Wickets", "Wkts", |r| f64::from(r.wickets)),
        economy: bowl_chart("Economy Rate", "Econ", |r| r.economy),
        bowling_average: bowl_chart("Bowling Average", "Ave", |r| r.average),
    }
}
