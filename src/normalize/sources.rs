//! The five tournament sources: logical names, default file names and column schemas.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::types::{DataType, Field, Schema};

/// Marker the batting export appends to a high score that was not out (`"123*"`).
pub const NOT_OUT_MARKER: char = '*';

/// Logical identity of one required source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Batting,
    Bowling,
    Fielding,
    MatchResults,
    WicketKeeping,
}

impl SourceKind {
    /// Every source, in load and error-reporting order.
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Batting,
        SourceKind::Bowling,
        SourceKind::Fielding,
        SourceKind::MatchResults,
        SourceKind::WicketKeeping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Batting => "batting",
            SourceKind::Bowling => "bowling",
            SourceKind::Fielding => "fielding",
            SourceKind::MatchResults => "match_results",
            SourceKind::WicketKeeping => "wicket_keeping",
        }
    }

    /// File name of the published 2024 men's T20 World Cup export.
    pub fn default_file_name(self) -> &'static str {
        match self {
            SourceKind::Batting => "batting_stats_for_icc_mens_t20_world_cup_2024.csv",
            SourceKind::Bowling => "bowling_stats_for_icc_mens_t20_world_cup_2024.csv",
            SourceKind::Fielding => "fielding_stats_for_icc_mens_t20_world_cup_2024.csv",
            SourceKind::MatchResults => "match_results_for_icc_mens_t20_world_cup_2024.csv",
            SourceKind::WicketKeeping => "wk_stats_for_icc_mens_t20_world_cup_2024.csv",
        }
    }

    fn index(self) -> usize {
        match self {
            SourceKind::Batting => 0,
            SourceKind::Bowling => 1,
            SourceKind::Fielding => 2,
            SourceKind::MatchResults => 3,
            SourceKind::WicketKeeping => 4,
        }
    }

    /// Column schema expected in this source.
    pub fn schema(self) -> Schema {
        use DataType::{Float64, Int64, Utf8};

        let fields = match self {
            SourceKind::Batting => vec![
                Field::new(col::PLAYER, Utf8),
                Field::new(col::TEAM, Utf8),
                Field::optional(col::MATCHES, Int64),
                Field::optional(col::INNINGS, Int64),
                Field::optional(col::NOT_OUTS, Int64),
                Field::new(col::RUNS, Int64),
                Field::new(col::HIGH_SCORE, Int64).with_trailing_marker(NOT_OUT_MARKER),
                Field::new(col::AVERAGE, Float64),
                Field::optional(col::BALLS_FACED, Int64),
                Field::new(col::STRIKE_RATE, Float64),
                Field::new(col::HUNDREDS, Int64),
                Field::new(col::FIFTIES, Int64),
                Field::new(col::DUCKS, Int64),
                Field::optional(col::FOURS, Int64),
                Field::optional(col::SIXES, Int64),
            ],
            SourceKind::Bowling => vec![
                Field::new(col::PLAYER, Utf8),
                Field::new(col::TEAM, Utf8),
                Field::optional(col::MATCHES, Int64),
                Field::optional(col::INNINGS, Int64),
                Field::optional(col::OVERS, Utf8),
                Field::new(col::BALLS, Int64),
                Field::new(col::MAIDENS, Int64),
                Field::new(col::RUNS, Int64),
                Field::new(col::WICKETS, Int64),
                Field::new(col::BEST_BOWLING, Utf8),
                Field::new(col::AVERAGE, Float64),
                Field::new(col::ECONOMY, Float64),
                Field::new(col::STRIKE_RATE, Float64),
            ],
            SourceKind::Fielding => vec![
                Field::new(col::PLAYER, Utf8),
                Field::optional(col::TEAM, Utf8),
                Field::optional(col::MATCHES, Int64),
                Field::new(col::CATCHES, Int64),
            ],
            SourceKind::MatchResults => vec![
                Field::optional(col::TEAM1, Utf8),
                Field::optional(col::TEAM2, Utf8),
                Field::new(col::WINNER, Utf8),
                Field::optional(col::MARGIN, Utf8),
                Field::optional(col::GROUND, Utf8),
                Field::optional(col::MATCH_DATE, Utf8),
            ],
            SourceKind::WicketKeeping => vec![
                Field::new(col::PLAYER, Utf8),
                Field::optional(col::TEAM, Utf8),
                Field::new(col::DISMISSALS, Int64),
                Field::new(col::CATCHES, Int64),
                Field::new(col::STUMPINGS, Int64),
            ],
        };
        Schema::new(fields)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "batting" => Ok(SourceKind::Batting),
            "bowling" => Ok(SourceKind::Bowling),
            "fielding" => Ok(SourceKind::Fielding),
            "match_results" | "matches" => Ok(SourceKind::MatchResults),
            "wicket_keeping" | "wk" => Ok(SourceKind::WicketKeeping),
            other => Err(format!("unknown source '{other}'")),
        }
    }
}

/// Source column names as they appear in the header rows.
pub mod col {
    pub const PLAYER: &str = "Player";
    pub const TEAM: &str = "Team";
    pub const MATCHES: &str = "Mat";
    pub const INNINGS: &str = "Inns";
    pub const NOT_OUTS: &str = "NO";
    pub const RUNS: &str = "Runs";
    pub const HIGH_SCORE: &str = "HS";
    pub const AVERAGE: &str = "Ave";
    pub const BALLS_FACED: &str = "BF";
    pub const STRIKE_RATE: &str = "SR";
    pub const HUNDREDS: &str = "100";
    pub const FIFTIES: &str = "50";
    pub const DUCKS: &str = "0";
    pub const FOURS: &str = "4s";
    pub const SIXES: &str = "6s";
    pub const OVERS: &str = "Overs";
    pub const BALLS: &str = "Balls";
    pub const MAIDENS: &str = "Mdns";
    pub const WICKETS: &str = "Wkts";
    pub const BEST_BOWLING: &str = "BBI";
    pub const ECONOMY: &str = "Econ";
    pub const CATCHES: &str = "Ct";
    pub const DISMISSALS: &str = "Dis";
    pub const STUMPINGS: &str = "St";
    pub const TEAM1: &str = "Team1";
    pub const TEAM2: &str = "Team2";
    pub const WINNER: &str = "Winner";
    pub const MARGIN: &str = "Margin";
    pub const GROUND: &str = "Ground";
    pub const MATCH_DATE: &str = "Match Date";
}

/// Location of each source. Relative paths are resolved against the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    paths: [PathBuf; 5],
}

impl SourcePaths {
    pub fn get(&self, kind: SourceKind) -> &Path {
        &self.paths[kind.index()]
    }

    /// Override the location of one source.
    pub fn with(mut self, kind: SourceKind, path: impl Into<PathBuf>) -> Self {
        self.set(kind, path);
        self
    }

    pub fn set(&mut self, kind: SourceKind, path: impl Into<PathBuf>) {
        self.paths[kind.index()] = path.into();
    }

    /// Full path of `kind` under `data_dir` (absolute overrides are returned unchanged).
    pub fn resolve(&self, data_dir: &Path, kind: SourceKind) -> PathBuf {
        data_dir.join(self.get(kind))
    }
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            paths: SourceKind::ALL.map(|kind| PathBuf::from(kind.default_file_name())),
        }
    }
}
