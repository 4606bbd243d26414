//! T20 dashboard CLI: load the five stat tables once and print one page as JSON.
//!
//! Usage:
//!   t20-dashboard --data-dir data summary
//!   t20-dashboard --data-dir data players --player "Jasprit Bumrah"
//!   t20-dashboard --data-dir data players --compare "Virat Kohli" --compare "Travis Head"
//!   t20-dashboard --data-dir data players --compare-defaults
//!   t20-dashboard --source wk=keepers.json fielding-wk

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use t20_insights::ingestion::{IngestionFormat, IngestionObserver, StdErrObserver};
use t20_insights::normalize::{DatasetNormalizer, NormalizerOptions, SourceKind, SourcePaths};
use t20_insights::views::{Page, PlayerSelection};

#[derive(Parser)]
#[command(name = "t20-dashboard")]
#[command(about = "Tournament stats from T20 World Cup batting, bowling, fielding, keeping and results tables", long_about = None)]
struct Cli {
    /// Page to render
    #[arg(default_value_t = Page::Summary)]
    page: Page,

    /// Directory containing the source files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Override one source location, e.g. `bowling=bowl.csv` (repeatable)
    #[arg(long = "source", value_parser = parse_source_override)]
    sources: Vec<(SourceKind, PathBuf)>,

    /// Force a source format instead of inferring it from the extension
    #[arg(long)]
    format: Option<IngestionFormat>,

    /// Player for the single-player deep dive (players page)
    #[arg(long, conflicts_with = "compare")]
    player: Option<String>,

    /// Players to compare (players page, repeatable)
    #[arg(long)]
    compare: Vec<String>,

    /// Compare the default pair, Virat Kohli and Rohit Sharma (players page)
    #[arg(long, conflicts_with_all = ["player", "compare"])]
    compare_defaults: bool,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,

    /// Log ingestion and normalization events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_source_override(s: &str) -> Result<(SourceKind, PathBuf), String> {
    let (kind, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=PATH, got '{s}'"))?;
    Ok((kind.trim().parse()?, PathBuf::from(path.trim())))
}

fn player_selection(cli: &Cli) -> PlayerSelection {
    if cli.compare_defaults {
        PlayerSelection::Compare(None)
    } else if !cli.compare.is_empty() {
        PlayerSelection::Compare(Some(cli.compare.clone()))
    } else {
        PlayerSelection::Single(cli.player.clone())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut paths = SourcePaths::default();
    for (kind, path) in &cli.sources {
        paths.set(*kind, path);
    }

    let mut options = NormalizerOptions {
        data_dir: cli.data_dir.clone(),
        paths,
        ..NormalizerOptions::default()
    };
    options.ingestion.format = cli.format;
    if cli.verbose {
        let observer: Arc<dyn IngestionObserver> = Arc::new(StdErrObserver);
        options.ingestion.observer = Some(observer);
    }

    let dataset = match DatasetNormalizer::new(options).load() {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("Required tournament data could not be loaded. {err}");
            return ExitCode::FAILURE;
        }
    };

    let selection = player_selection(&cli);
    let view = cli.page.render(&dataset, &selection);

    let json = if cli.compact {
        serde_json::to_string(&view)
    } else {
        serde_json::to_string_pretty(&view)
    };
    match json {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialize {} page: {err}", cli.page);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use t20_insights::views::{Page, PlayerSelection};

    use super::{Cli, player_selection};

    fn selection(args: &[&str]) -> PlayerSelection {
        let cli = Cli::try_parse_from(std::iter::once("t20-dashboard").chain(args.iter().copied())).unwrap();
        player_selection(&cli)
    }

    #[test]
    fn players_page_selections() {
        assert_eq!(selection(&["players"]), PlayerSelection::Single(None));
        assert_eq!(
            selection(&["players", "--player", "Jasprit Bumrah"]),
            PlayerSelection::Single(Some("Jasprit Bumrah".to_string()))
        );
        assert_eq!(
            selection(&["players", "--compare", "Virat Kohli", "--compare", "Travis Head"]),
            PlayerSelection::Compare(Some(vec!["Virat Kohli".to_string(), "Travis Head".to_string()]))
        );
        assert_eq!(selection(&["players", "--compare-defaults"]), PlayerSelection::Compare(None));
    }

    #[test]
    fn compare_defaults_conflicts_with_explicit_players() {
        let args = ["t20-dashboard", "players", "--compare-defaults", "--player", "Virat Kohli"];
        assert!(Cli::try_parse_from(args).is_err());
        let args = ["t20-dashboard", "players", "--compare-defaults", "--compare", "Travis Head"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn page_and_source_overrides_parse() {
        let cli = Cli::try_parse_from(["t20-dashboard", "fielding-wk", "--source", "wk=keepers.json"]).unwrap();
        assert_eq!(cli.page, Page::FieldingWk);
        assert_eq!(cli.sources.len(), 1);
        assert_eq!(cli.sources[0].0.name(), "wicket_keeping");
        assert_eq!(cli.sources[0].1, std::path::PathBuf::from("keepers.json"));
    }
}
