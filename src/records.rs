//! Typed, normalized tournament tables.
//!
//! Every numeric field holds a valid number: anything the source could not express as a
//! non-negative number has already been replaced by zero. Tables are built once by
//! [`crate::normalize::DatasetNormalizer`] and never mutated afterwards.

use serde::Serialize;

/// One row per player who batted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingRecord {
    pub player: String,
    pub team: String,
    pub matches: u32,
    pub innings: u32,
    pub not_outs: u32,
    pub runs: u32,
    /// Highest score, with the not-out marker removed.
    pub high_score: u32,
    pub average: f64,
    pub balls_faced: u32,
    pub strike_rate: f64,
    pub hundreds: u32,
    pub fifties: u32,
    pub ducks: u32,
    pub fours: u32,
    pub sixes: u32,
}

/// One row per player who bowled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingRecord {
    pub player: String,
    pub team: String,
    pub matches: u32,
    pub innings: u32,
    /// Overs as published (e.g. `"23.4"`); display only.
    pub overs: String,
    pub balls: u32,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    /// Best bowling in an innings (e.g. `"5/9"`); display only.
    pub best_bowling: String,
    pub average: f64,
    pub economy: f64,
    pub strike_rate: f64,
}

impl BowlingRecord {
    /// Whether the player delivered at least one ball.
    pub fn has_bowled(&self) -> bool {
        self.balls > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldingRecord {
    pub player: String,
    pub team: String,
    pub matches: u32,
    pub catches: u32,
}

/// One row per wicket-keeper. `dismissals` is expected to equal `catches + stumpings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WicketKeepingRecord {
    pub player: String,
    pub team: String,
    pub dismissals: u32,
    pub catches: u32,
    pub stumpings: u32,
}

/// One row per decided (or undecided but not abandoned/tied) match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub team1: String,
    pub team2: String,
    /// Winning team; blank when the source did not record one.
    pub winner: String,
    pub margin: String,
    pub ground: String,
    pub date: String,
}

pub type BattingTable = Vec<BattingRecord>;
pub type BowlingTable = Vec<BowlingRecord>;
pub type FieldingTable = Vec<FieldingRecord>;
pub type WicketKeepingTable = Vec<WicketKeepingRecord>;
pub type MatchTable = Vec<MatchResult>;
