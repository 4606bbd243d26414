//! Load the five tournament sources and normalize them into typed tables.
//!
//! [`DatasetNormalizer::load`] reads every source, repairs field encodings and returns one
//! immutable [`LoadedDataset`]. Loading is all-or-nothing: if any source is missing or unreadable
//! the call fails with [`LoadError::SourceUnavailable`] and no table is handed out.
//!
//! Normalization rules:
//!
//! - numeric cells that are blank or do not parse become `0` (a stat that was not recorded);
//! - the not-out marker is stripped from the batting high score before parsing;
//! - match rows whose winner is exactly [`NO_RESULT`] or [`TIED`] are dropped;
//! - the player universe is the sorted, de-duplicated union of batting and bowling players.
//!
//! ```no_run
//! use t20_insights::normalize::{DatasetNormalizer, NormalizerOptions};
//!
//! # fn main() -> Result<(), t20_insights::LoadError> {
//! let normalizer = DatasetNormalizer::new(NormalizerOptions::with_data_dir("data"));
//! let dataset = normalizer.load()?;
//! println!("{} players", dataset.players().len());
//! # Ok(())
//! # }
//! ```

mod coerce;
mod sources;

use std::collections::BTreeSet;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::error::LoadError;
use crate::ingestion::{IngestionOptions, ingest_from_path};
use crate::records::{
    BattingRecord, BattingTable, BowlingRecord, BowlingTable, FieldingRecord, FieldingTable, MatchResult,
    MatchTable, WicketKeepingRecord, WicketKeepingTable,
};
use crate::types::DataSet;

use coerce::RowReader;

pub use coerce::{coerce_count, coerce_rate};
pub use sources::{NOT_OUT_MARKER, SourceKind, SourcePaths, col};

/// Winner value recorded for an abandoned match.
pub const NO_RESULT: &str = "no result";
/// Winner value recorded for a tie.
pub const TIED: &str = "tied";

/// Row accounting for one normalized table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub rows_in: usize,
    pub rows_out: usize,
    /// Required numeric cells that were blank or unparseable and became 0.
    pub values_defaulted: usize,
}

/// Where to find the sources and how to read them.
#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    /// Directory relative source paths are resolved against.
    pub data_dir: PathBuf,
    pub paths: SourcePaths,
    pub ingestion: IngestionOptions,
}

impl NormalizerOptions {
    /// Default file names under `dir`.
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            paths: SourcePaths::default(),
            ingestion: IngestionOptions::default(),
        }
    }
}

/// The normalized tables plus the player index, built once and never mutated.
///
/// Only [`DatasetNormalizer::load`] and [`LoadedDataset::from_tables`] produce one.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    batting: BattingTable,
    bowling: BowlingTable,
    fielding: FieldingTable,
    matches: MatchTable,
    wicket_keeping: WicketKeepingTable,
    players: Vec<String>,
}

impl LoadedDataset {
    /// Assemble a dataset from already-normalized tables, deriving the player universe.
    pub fn from_tables(
        batting: BattingTable,
        bowling: BowlingTable,
        fielding: FieldingTable,
        matches: MatchTable,
        wicket_keeping: WicketKeepingTable,
    ) -> Self {
        let players = player_universe(&batting, &bowling);
        Self {
            batting,
            bowling,
            fielding,
            matches,
            wicket_keeping,
            players,
        }
    }

    pub fn batting(&self) -> &[BattingRecord] {
        &self.batting
    }

    pub fn bowling(&self) -> &[BowlingRecord] {
        &self.bowling
    }

    pub fn fielding(&self) -> &[FieldingRecord] {
        &self.fielding
    }

    /// Match results with no-result and tied rows already removed.
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn wicket_keeping(&self) -> &[WicketKeepingRecord] {
        &self.wicket_keeping
    }

    /// Sorted, unique names of everyone who batted or bowled.
    pub fn players(&self) -> &[String] {
        &self.players
    }
}

/// Loads and normalizes the five sources described by [`NormalizerOptions`].
#[derive(Debug, Clone, Default)]
pub struct DatasetNormalizer {
    options: NormalizerOptions,
}

impl DatasetNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    /// Resolved location of one source.
    pub fn source_path(&self, kind: SourceKind) -> PathBuf {
        self.options.paths.resolve(&self.options.data_dir, kind)
    }

    /// Read and normalize all five sources.
    ///
    /// Sources are read concurrently; the reported error is always the first failing source in
    /// [`SourceKind::ALL`] order. Calling this again re-reads everything from scratch.
    pub fn load(&self) -> Result<LoadedDataset, LoadError> {
        let reads: Vec<_> = SourceKind::ALL
            .as_slice()
            .par_iter()
            .map(|&kind| {
                let path = self.source_path(kind);
                let result = ingest_from_path(&path, &kind.schema(), &self.options.ingestion);
                (kind, path, result)
            })
            .collect();

        let mut tables = Tables::default();
        for (kind, path, result) in reads {
            let raw = result.map_err(|cause| LoadError::SourceUnavailable { kind, path, cause })?;
            let stats = tables.normalize(kind, &raw);
            if let Some(obs) = self.options.ingestion.observer.as_ref() {
                obs.on_normalized(kind, stats);
            }
        }

        Ok(LoadedDataset::from_tables(
            tables.batting,
            tables.bowling,
            tables.fielding,
            tables.matches,
            tables.wicket_keeping,
        ))
    }
}

#[derive(Default)]
struct Tables {
    batting: BattingTable,
    bowling: BowlingTable,
    fielding: FieldingTable,
    matches: MatchTable,
    wicket_keeping: WicketKeepingTable,
}

impl Tables {
    fn normalize(&mut self, kind: SourceKind, raw: &DataSet) -> NormalizeStats {
        match kind {
            SourceKind::Batting => {
                let (table, stats) = normalize_batting(raw);
                self.batting = table;
                stats
            }
            SourceKind::Bowling => {
                let (table, stats) = normalize_bowling(raw);
                self.bowling = table;
                stats
            }
            SourceKind::Fielding => {
                let (table, stats) = normalize_fielding(raw);
                self.fielding = table;
                stats
            }
            SourceKind::MatchResults => {
                let (table, stats) = normalize_match_results(raw);
                self.matches = table;
                stats
            }
            SourceKind::WicketKeeping => {
                let (table, stats) = normalize_wicket_keeping(raw);
                self.wicket_keeping = table;
                stats
            }
        }
    }
}

/// Map every row of `raw` through `build`, collecting defaulted-cell counts.
fn normalize_rows<T>(raw: &DataSet, mut build: impl FnMut(&mut RowReader<'_>) -> Option<T>) -> (Vec<T>, NormalizeStats) {
    let mut stats = NormalizeStats {
        rows_in: raw.row_count(),
        ..NormalizeStats::default()
    };
    let mut out = Vec::with_capacity(raw.row_count());
    for row in &raw.rows {
        let mut reader = RowReader::new(&raw.schema, row);
        if let Some(record) = build(&mut reader) {
            stats.values_defaulted += reader.defaulted();
            out.push(record);
        }
    }
    stats.rows_out = out.len();
    (out, stats)
}

pub fn normalize_batting(raw: &DataSet) -> (BattingTable, NormalizeStats) {
    normalize_rows(raw, |r| {
        Some(BattingRecord {
            player: r.text(col::PLAYER),
            team: r.text(col::TEAM),
            matches: r.count(col::MATCHES),
            innings: r.count(col::INNINGS),
            not_outs: r.count(col::NOT_OUTS),
            runs: r.count(col::RUNS),
            high_score: r.count(col::HIGH_SCORE),
            average: r.rate(col::AVERAGE),
            balls_faced: r.count(col::BALLS_FACED),
            strike_rate: r.rate(col::STRIKE_RATE),
            hundreds: r.count(col::HUNDREDS),
            fifties: r.count(col::FIFTIES),
            ducks: r.count(col::DUCKS),
            fours: r.count(col::FOURS),
            sixes: r.count(col::SIXES),
        })
    })
}

pub fn normalize_bowling(raw: &DataSet) -> (BowlingTable, NormalizeStats) {
    normalize_rows(raw, |r| {
        Some(BowlingRecord {
            player: r.text(col::PLAYER),
            team: r.text(col::TEAM),
            matches: r.count(col::MATCHES),
            innings: r.count(col::INNINGS),
            overs: r.text(col::OVERS),
            balls: r.count(col::BALLS),
            maidens: r.count(col::MAIDENS),
            runs_conceded: r.count(col::RUNS),
            wickets: r.count(col::WICKETS),
            best_bowling: r.text(col::BEST_BOWLING),
            average: r.rate(col::AVERAGE),
            economy: r.rate(col::ECONOMY),
            strike_rate: r.rate(col::STRIKE_RATE),
        })
    })
}

pub fn normalize_fielding(raw: &DataSet) -> (FieldingTable, NormalizeStats) {
    normalize_rows(raw, |r| {
        Some(FieldingRecord {
            player: r.text(col::PLAYER),
            team: r.text(col::TEAM),
            matches: r.count(col::MATCHES),
            catches: r.count(col::CATCHES),
        })
    })
}

pub fn normalize_wicket_keeping(raw: &DataSet) -> (WicketKeepingTable, NormalizeStats) {
    normalize_rows(raw, |r| {
        Some(WicketKeepingRecord {
            player: r.text(col::PLAYER),
            team: r.text(col::TEAM),
            dismissals: r.count(col::DISMISSALS),
            catches: r.count(col::CATCHES),
            stumpings: r.count(col::STUMPINGS),
        })
    })
}

/// Drops rows whose winner is exactly [`NO_RESULT`] or [`TIED`] (case-sensitive).
pub fn normalize_match_results(raw: &DataSet) -> (MatchTable, NormalizeStats) {
    normalize_rows(raw, |r| {
        let winner = r.text(col::WINNER);
        if is_sentinel_winner(&winner) {
            return None;
        }
        Some(MatchResult {
            team1: r.text(col::TEAM1),
            team2: r.text(col::TEAM2),
            winner,
            margin: r.text(col::MARGIN),
            ground: r.text(col::GROUND),
            date: r.text(col::MATCH_DATE),
        })
    })
}

/// Whether a winner value means the match produced no winner.
pub fn is_sentinel_winner(winner: &str) -> bool {
    winner == NO_RESULT || winner == TIED
}

/// Sorted, duplicate-free union of batting and bowling player names.
///
/// Blank names (rows whose `Player` cell was empty) are left out.
pub fn player_universe(batting: &[BattingRecord], bowling: &[BowlingRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = batting
        .iter()
        .map(|r| r.player.as_str())
        .chain(bowling.iter().map(|r| r.player.as_str()))
        .filter(|name| !name.is_empty())
        .collect();
    names.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        SourceKind, normalize_batting, normalize_bowling, normalize_match_results, normalize_wicket_keeping,
        player_universe,
    };
    use crate::ingestion::csv::ingest_csv_from_reader;
    use crate::records::{BattingRecord, BowlingRecord};
    use crate::types::DataSet;

    fn raw(kind: SourceKind, input: &str) -> DataSet {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input.as_bytes());
        ingest_csv_from_reader(&mut rdr, &kind.schema()).unwrap()
    }

    fn batter(player: &str) -> BattingRecord {
        let (mut table, _) = normalize_batting(&raw(
            SourceKind::Batting,
            "Player,Team,Runs,HS,Ave,SR,100,50,0\nX,IND,0,0,0,0,0,0,0\n",
        ));
        let mut row = table.remove(0);
        row.player = player.to_string();
        row
    }

    fn bowler(player: &str) -> BowlingRecord {
        let (mut table, _) = normalize_bowling(&raw(
            SourceKind::Bowling,
            "Player,Team,Balls,Mdns,Runs,Wkts,BBI,Ave,Econ,SR\nX,IND,0,0,0,0,-,0,0,0\n",
        ));
        let mut row = table.remove(0);
        row.player = player.to_string();
        row
    }

    #[test]
    fn batting_strips_not_out_and_zero_fills() {
        let (table, stats) = normalize_batting(&raw(
            SourceKind::Batting,
            "Player,Team,Runs,HS,Ave,SR,100,50,0\n\
             Rahmanullah Gurbaz,AFG,281,80,35.12,124.33,0,3,1\n\
             Rohit Sharma,IND,257,92*,42.83,156.70,0,3,0\n\
             Tail Ender,NAM,-,-,-,-,-,-,-\n",
        ));

        assert_eq!(stats.rows_in, 3);
        assert_eq!(stats.rows_out, 3);
        assert_eq!(stats.values_defaulted, 7);
        assert_eq!(table[0].high_score, 80);
        assert_eq!(table[1].high_score, 92);
        assert_eq!(table[1].average, 42.83);
        assert_eq!(table[2].runs, 0);
        assert_eq!(table[2].strike_rate, 0.0);
    }

    #[test]
    fn bowling_keeps_best_bowling_as_text() {
        let (table, stats) = normalize_bowling(&raw(
            SourceKind::Bowling,
            "Player,Team,Balls,Mdns,Runs,Wkts,BBI,Ave,Econ,SR\n\
             Fazalhaq Farooqi,AFG,150,0,152,17,5/9,8.94,6.08,8.8\n\
             Part Timer,SCO,6,0,12,0,-,-,12.00,-\n",
        ));
        assert_eq!(stats.values_defaulted, 2);
        assert_eq!(table[0].best_bowling, "5/9");
        assert_eq!(table[0].wickets, 17);
        assert_eq!(table[1].average, 0.0);
        assert_eq!(table[1].economy, 12.0);
    }

    #[test]
    fn wicket_keeping_coerces_all_counts() {
        let (table, _) = normalize_wicket_keeping(&raw(
            SourceKind::WicketKeeping,
            "Player,Dis,Ct,St\nRishabh Pant,14,13,1\nReserve,,,\n",
        ));
        assert_eq!(table[0].dismissals, table[0].catches + table[0].stumpings);
        assert_eq!((table[1].dismissals, table[1].catches, table[1].stumpings), (0, 0, 0));
    }

    #[test]
    fn match_results_drop_sentinels_case_sensitively() {
        let (table, stats) = normalize_match_results(&raw(
            SourceKind::MatchResults,
            "Team1,Team2,Winner,Margin\n\
             India,Pakistan,India,6 runs\n\
             USA,Ireland,no result,-\n\
             Oman,Namibia,tied,-\n\
             Scotland,England,No Result,-\n\
             Nepal,Sri Lanka,,-\n",
        ));
        assert_eq!(stats.rows_in, 5);
        assert_eq!(stats.rows_out, 3);
        let winners: Vec<&str> = table.iter().map(|m| m.winner.as_str()).collect();
        assert_eq!(winners, vec!["India", "No Result", ""]);
        assert_eq!(table[0].margin, "6 runs");
    }

    #[test]
    fn match_winners_pass_through_verbatim() {
        let (table, _) = normalize_match_results(&raw(
            SourceKind::MatchResults,
            "Team1,Team2,Winner\n\
             Oman,Namibia, tied\n\
             A,B,India \n\
             C,D,tied\n",
        ));
        let winners: Vec<&str> = table.iter().map(|m| m.winner.as_str()).collect();
        assert_eq!(winners, vec![" tied", "India "]);
    }

    #[test]
    fn all_blank_match_rows_count_as_matches() {
        let (table, stats) = normalize_match_results(&raw(
            SourceKind::MatchResults,
            "Team1,Team2,Winner,Margin\nIndia,Ireland,India,8 wickets\n,,,\n",
        ));
        assert_eq!((stats.rows_in, stats.rows_out), (2, 2));
        assert_eq!(table[1].winner, "");
        assert_eq!(table[1].team1, "");
    }

    #[test]
    fn fractional_counts_truncate_instead_of_zeroing() {
        let (table, stats) = normalize_batting(&raw(
            SourceKind::Batting,
            "Player,Team,Runs,HS,Ave,SR,100,50,0\nA,IND,12.5,7,12.5,125.0,0,0,0\n",
        ));
        assert_eq!(table[0].runs, 12);
        assert_eq!(table[0].high_score, 7);
        assert_eq!(stats.values_defaulted, 0);
    }

    #[test]
    fn player_universe_is_sorted_unique_union() {
        let batting = vec![batter("B"), batter("A"), batter("")];
        let bowling = vec![bowler("C"), bowler("B")];
        assert_eq!(player_universe(&batting, &bowling), vec!["A", "B", "C"]);
    }
}
