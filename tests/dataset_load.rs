use std::fs;
use std::path::Path;

use t20_insights::LoadError;
use t20_insights::normalize::{DatasetNormalizer, LoadedDataset, NO_RESULT, NormalizerOptions, SourceKind, TIED};
use t20_insights::processing::{sum_by, top_n};
use t20_insights::views::summary::team_wins;

const FIXTURES: &str = "tests/fixtures";

fn load_fixtures() -> LoadedDataset {
    DatasetNormalizer::new(NormalizerOptions::with_data_dir(FIXTURES))
        .load()
        .unwrap()
}

fn write_sources(dir: &Path, files: &[(SourceKind, &str)]) {
    for (kind, contents) in files {
        fs::write(dir.join(kind.default_file_name()), contents).unwrap();
    }
}

fn minimal_sources() -> Vec<(SourceKind, &'static str)> {
    vec![
        (
            SourceKind::Batting,
            "Player,Team,Runs,HS,Ave,SR,100,50,0\n\
             Virat Kohli,IND,100,100*,100.0,130.0,1,0,0\n\
             Rohit Sharma,IND,50,50,50.0,150.0,0,1,0\n",
        ),
        (
            SourceKind::Bowling,
            "Player,Team,Balls,Mdns,Runs,Wkts,BBI,Ave,Econ,SR\n\
             Jasprit Bumrah,IND,24,0,18,3,3/18,6.0,4.5,8.0\n",
        ),
        (SourceKind::Fielding, "Player,Ct\n"),
        (SourceKind::MatchResults, "Team1,Team2,Winner\n"),
        (SourceKind::WicketKeeping, "Player,Dis,Ct,St\n"),
    ]
}

#[test]
fn loads_every_fixture_table() {
    let data = load_fixtures();

    assert_eq!(data.batting().len(), 9);
    assert_eq!(data.bowling().len(), 8);
    assert_eq!(data.fielding().len(), 6);
    assert_eq!(data.matches().len(), 6);
    assert_eq!(data.wicket_keeping().len(), 4);
}

#[test]
fn loading_twice_yields_identical_datasets() {
    let normalizer = DatasetNormalizer::new(NormalizerOptions::with_data_dir(FIXTURES));
    assert_eq!(normalizer.load().unwrap(), normalizer.load().unwrap());
}

#[test]
fn no_result_and_tied_rows_never_reach_aggregates() {
    let data = load_fixtures();

    assert!(data.matches().iter().all(|m| m.winner != NO_RESULT && m.winner != TIED));
    assert_eq!(
        team_wins(data.matches()),
        vec![
            ("India".to_string(), 3),
            ("Afghanistan".to_string(), 1),
            ("South Africa".to_string(), 1),
            ("Australia".to_string(), 1),
        ]
    );
}

#[test]
fn unparseable_numbers_become_zero() {
    let data = load_fixtures();

    let bumrah = data.batting().iter().find(|r| r.player == "Jasprit Bumrah").unwrap();
    assert_eq!(bumrah.average, 0.0);

    let rohit = data.bowling().iter().find(|r| r.player == "Rohit Sharma").unwrap();
    assert_eq!((rohit.average, rohit.economy, rohit.strike_rate), (0.0, 0.0, 0.0));
    assert_eq!(rohit.best_bowling, "-");
    assert!(!rohit.has_bowled());

    let nitish = data.fielding().iter().find(|r| r.player == "Nitish Kumar").unwrap();
    assert_eq!(nitish.catches, 0);
}

#[test]
fn not_out_marker_is_stripped_from_high_scores() {
    let data = load_fixtures();
    let hs = |name: &str| data.batting().iter().find(|r| r.player == name).unwrap().high_score;

    assert_eq!(hs("Aaron Jones"), 94);
    assert_eq!(hs("Jasprit Bumrah"), 0);
    assert_eq!(hs("Rohit Sharma"), 92);
}

#[test]
fn player_universe_is_sorted_union_of_batters_and_bowlers() {
    let data = load_fixtures();

    assert_eq!(
        data.players(),
        [
            "Aaron Jones",
            "Anrich Nortje",
            "Arshdeep Singh",
            "Fazalhaq Farooqi",
            "Jasprit Bumrah",
            "Maheesh Theekshana",
            "Nicholas Pooran",
            "Quinton de Kock",
            "Rahmanullah Gurbaz",
            "Rashid Khan",
            "Rishabh Pant",
            "Rohit Sharma",
            "Tim Southee",
            "Travis Head",
            "Virat Kohli",
        ]
    );
    // fielding-only and keeping-only players are not part of it
    assert!(!data.players().iter().any(|p| p == "Aiden Markram" || p == "Jos Buttler"));
}

#[test]
fn top_n_keeps_source_order_for_ties() {
    let data = load_fixtures();

    let wickets: Vec<&str> = top_n(data.bowling(), 5, |r| f64::from(r.wickets))
        .into_iter()
        .map(|r| r.player.as_str())
        .collect();
    assert_eq!(
        wickets,
        vec!["Fazalhaq Farooqi", "Arshdeep Singh", "Jasprit Bumrah", "Anrich Nortje", "Rashid Khan"]
    );
}

#[test]
fn end_to_end_totals_and_universe() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path(), &minimal_sources());

    let data = DatasetNormalizer::new(NormalizerOptions::with_data_dir(dir.path()))
        .load()
        .unwrap();

    assert_eq!(sum_by(data.batting(), |r| r.runs), 150);
    assert_eq!(sum_by(data.bowling(), |r| r.wickets), 3);
    assert_eq!(data.batting()[0].high_score, 100);
    assert_eq!(data.players(), ["Jasprit Bumrah", "Rohit Sharma", "Virat Kohli"]);
    assert!(data.matches().is_empty());
}

#[test]
fn each_missing_source_fails_the_whole_load() {
    for missing in SourceKind::ALL {
        let dir = tempfile::tempdir().unwrap();
        let present: Vec<_> = minimal_sources().into_iter().filter(|(k, _)| *k != missing).collect();
        write_sources(dir.path(), &present);

        let err = DatasetNormalizer::new(NormalizerOptions::with_data_dir(dir.path()))
            .load()
            .unwrap_err();

        assert_eq!(err.kind(), missing);
        let LoadError::SourceUnavailable { path, cause, .. } = &err;
        assert_eq!(path, &dir.path().join(missing.default_file_name()));
        assert!(cause.is_io());
        assert!(err.to_string().contains(missing.name()));
    }
}

#[test]
fn first_failing_source_is_reported_in_source_order() {
    let dir = tempfile::tempdir().unwrap();
    let present: Vec<_> = minimal_sources()
        .into_iter()
        .filter(|(k, _)| matches!(k, SourceKind::Batting | SourceKind::MatchResults))
        .collect();
    write_sources(dir.path(), &present);

    let err = DatasetNormalizer::new(NormalizerOptions::with_data_dir(dir.path()))
        .load()
        .unwrap_err();
    assert_eq!(err.kind(), SourceKind::Bowling);
}

#[test]
fn malformed_source_is_unavailable_too() {
    let dir = tempfile::tempdir().unwrap();
    let mut sources = minimal_sources();
    sources[2] = (SourceKind::Fielding, "Player,Team\nAxar Patel,IND\n");
    write_sources(dir.path(), &sources);

    let err = DatasetNormalizer::new(NormalizerOptions::with_data_dir(dir.path()))
        .load()
        .unwrap_err();
    assert_eq!(err.kind(), SourceKind::Fielding);
    assert!(err.to_string().contains("missing required column 'Ct'"));
}

#[test]
fn per_source_paths_override_defaults() {
    let mut options = NormalizerOptions::with_data_dir(FIXTURES);
    options.paths.set(SourceKind::WicketKeeping, "wk_stats.json");

    let normalizer = DatasetNormalizer::new(options);
    assert_eq!(
        normalizer.source_path(SourceKind::WicketKeeping),
        Path::new(FIXTURES).join("wk_stats.json")
    );

    let data = normalizer.load().unwrap();
    let keepers: Vec<(&str, u32, u32, u32)> = data
        .wicket_keeping()
        .iter()
        .map(|k| (k.player.as_str(), k.dismissals, k.catches, k.stumpings))
        .collect();
    assert_eq!(
        keepers,
        vec![
            ("Rishabh Pant", 14, 13, 1),
            ("Quinton de Kock", 11, 11, 0),
            ("Jos Buttler", 8, 7, 0),
        ]
    );
}

#[test]
fn blank_and_padded_match_rows_are_kept_as_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut sources = minimal_sources();
    sources[3] = (
        SourceKind::MatchResults,
        "Team1,Team2,Winner,Margin\n\
         India,Ireland,India,8 wickets\n\
         ,,,\n\
         Oman,Namibia, tied,-\n\
         USA,Ireland,no result,-\n",
    );
    write_sources(dir.path(), &sources);

    let data = DatasetNormalizer::new(NormalizerOptions::with_data_dir(dir.path()))
        .load()
        .unwrap();

    let winners: Vec<&str> = data.matches().iter().map(|m| m.winner.as_str()).collect();
    assert_eq!(winners, vec!["India", "", " tied"]);
    assert_eq!(
        team_wins(data.matches()),
        vec![("India".to_string(), 1), (" tied".to_string(), 1)]
    );
}
