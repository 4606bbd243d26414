//! `t20-insights` loads the five published stat tables of a T20 World Cup (batting, bowling,
//! fielding, wicket-keeping and match results), normalizes their inconsistent encodings into typed
//! records, and exposes the read-only queries a stats dashboard is built from.
//!
//! The primary entrypoint is [`normalize::DatasetNormalizer::load`], which reads every source and
//! returns one immutable [`normalize::LoadedDataset`], or [`LoadError::SourceUnavailable`] if any
//! source is missing or unreadable. There is no partial load.
//!
//! ## What normalization does
//!
//! - Numeric stats that are blank or unparseable (`"-"`, `"DNB"`, …) become `0`.
//! - The not-out marker is stripped from batting high scores: `"123*"` becomes `123`.
//! - Match rows won by `"no result"` or `"tied"` are dropped before any aggregate sees them.
//! - The player universe is the sorted, de-duplicated union of batting and bowling players.
//!
//! Sources are CSV (`.csv`) or JSON (`.json` array-of-objects, `.ndjson`), detected by extension.
//!
//! ## Quick example: load and render a page
//!
//! ```no_run
//! use t20_insights::normalize::{DatasetNormalizer, NormalizerOptions};
//! use t20_insights::views::{Page, PlayerSelection};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = DatasetNormalizer::new(NormalizerOptions::with_data_dir("data")).load()?;
//!
//! let view = Page::Summary.render(&dataset, &PlayerSelection::default());
//! println!("{}", serde_json::to_string_pretty(&view)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a dataset in memory
//!
//! ```rust
//! use t20_insights::ingestion::csv::ingest_csv_from_reader;
//! use t20_insights::normalize::{SourceKind, normalize_batting, player_universe};
//!
//! let input = "Player,Team,Runs,HS,Ave,SR,100,50,0\n\
//!              Rohit Sharma,IND,257,92*,42.83,156.7,0,3,0\n\
//!              Virat Kohli,IND,151,76,18.87,112.68,0,1,2\n";
//! let mut rdr = csv::Reader::from_reader(input.as_bytes());
//! let raw = ingest_csv_from_reader(&mut rdr, &SourceKind::Batting.schema()).unwrap();
//!
//! let (batting, stats) = normalize_batting(&raw);
//! assert_eq!(stats.values_defaulted, 0);
//! assert_eq!(batting[0].high_score, 92);
//! assert_eq!(player_universe(&batting, &[]), vec!["Rohit Sharma", "Virat Kohli"]);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: schema-first CSV/JSON ingestion with observer hooks
//! - [`types`]: raw schema + in-memory dataset types
//! - [`normalize`]: source definitions, zero-substitution and the loaded dataset
//! - [`records`]: typed, normalized tables
//! - [`processing`]: filter / top-N / group-count / totals / histograms
//! - [`views`]: per-page chart data
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod normalize;
pub mod processing;
pub mod records;
pub mod types;
pub mod views;

pub use error::{IngestionError, IngestionResult, LoadError};
