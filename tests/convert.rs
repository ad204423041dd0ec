use pgn_uci::{Batch, CompressionMode, ConvertError, ConverterConfig, run};
use pretty_assertions::assert_eq;
use std::fs::{self, create_dir_all, remove_dir_all};
use std::path::{Path, PathBuf};

const SAMPLE: &str = r#"[Event "Casual Game"]
[Site "London"]
[White "Anderssen"]
[Black "Kieseritzky"]
[Result "1-0"]

1. e4 e5 2. f4 exf4 3. Bc4 Qh4+ 4. Kf1 b5 5. Bxb5 Nf6 6. Nf3 Qh6 7. d3 Nh5
8. Nh4 Qg5 9. Nf5 c6 10. g4 Nf6 11. Rg1 cxb5 12. h4 Qg6 13. h5 Qg5 14. Qf3
Ng8 15. Bxf4 Qf6 16. Nc3 Bc5 17. Nd5 Qxb2 18. Bd6 Bxg1 19. e5 Qxa1+ 20. Ke2
Na6 21. Nxg7+ Kd8 22. Qf6+ Nxf6 23. Be7# 1-0

[Event "Scholar"]
[Result "1-0"]

1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# 1-0

[Event "Promotion"]
[Result "*"]

1. e4 d5 2. exd5 c6 3. dxc6 Nf6 4. cxb7 Nbd7 5. bxa8=Q *
"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = Path::new("target/convert_test").join(name);
    let _ = remove_dir_all(&dir);
    create_dir_all(&dir).unwrap();
    dir
}

fn config_for(dir: &Path, input: &str) -> ConverterConfig {
    ConverterConfig::new(
        dir.join(input).display().to_string(),
        dir.join("uci_games.txt"),
    )
}

#[test]
fn converts_sample_file() {
    let dir = scratch_dir("sample");
    fs::write(dir.join("games.pgn"), SAMPLE).unwrap();

    let report = run(&config_for(&dir, "games.pgn")).unwrap();
    let output = fs::read_to_string(dir.join("uci_games.txt")).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(report.games_found, 3);
    assert_eq!(report.games_converted, 3);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("e2e4 e7e5 f2f4 e5f4 f1c4 d8h4 e1f1 b7b5"));
    assert!(lines[0].ends_with("d6e7"));
    assert_eq!(lines[0].split(' ').count(), 45);
    assert_eq!(lines[1], "e2e4 e7e5 f1c4 b8c6 d1h5 g8f6 h5f7");
    assert_eq!(lines[2], "e2e4 d7d5 e4d5 c7c6 d5c6 g8f6 c6b7 b8d7 b7a8q");
}

#[test]
fn output_is_overwritten_and_identical_across_runs() {
    let dir = scratch_dir("idempotent");
    fs::write(dir.join("games.pgn"), SAMPLE).unwrap();
    fs::write(dir.join("uci_games.txt"), "stale content\n".repeat(10)).unwrap();
    let config = config_for(&dir, "games.pgn");

    run(&config).unwrap();
    let first = fs::read(dir.join("uci_games.txt")).unwrap();
    run(&config).unwrap();
    let second = fs::read(dir.join("uci_games.txt")).unwrap();

    assert_eq!(first, second);
    assert!(!String::from_utf8(first).unwrap().contains("stale"));
}

#[test]
fn missing_input_is_fatal() {
    let dir = scratch_dir("missing");
    let err = run(&config_for(&dir, "games.pgn")).unwrap_err();

    assert!(matches!(err, ConvertError::FileNotFound { .. }));
    assert!(!dir.join("uci_games.txt").exists());
}

#[test]
fn empty_input_writes_empty_output() {
    let dir = scratch_dir("empty");
    fs::write(dir.join("games.pgn"), "").unwrap();

    let report = run(&config_for(&dir, "games.pgn")).unwrap();

    assert_eq!(report.games_found, 0);
    assert_eq!(fs::read_to_string(dir.join("uci_games.txt")).unwrap(), "");
}

#[test]
fn failures_are_reported_as_json_lines() {
    let dir = scratch_dir("failures");
    fs::write(
        dir.join("games.pgn"),
        "1. e4 e5 2. Nf3 Nc6 1-0\n1. e4 e5 2. Ke3 Nc6 0-1\n1. d4 d5 2. c4 e6 1-0\n",
    )
    .unwrap();
    let mut config = config_for(&dir, "games.pgn");
    config.failure_report = Some(dir.join("failures.jsonl"));

    let report = run(&config).unwrap();

    assert_eq!(report.games_converted, 2);
    let failures = fs::read_to_string(dir.join("failures.jsonl")).unwrap();
    let records: Vec<serde_json::Value> = failures
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["game_index"], 2);
    assert!(records[0]["error"].as_str().unwrap().contains("Ke3"));
}

#[test]
fn glob_input_converts_files_in_sorted_order() {
    let dir = scratch_dir("glob");
    fs::write(dir.join("b.pgn"), "1. d4 d5 2. c4 e6 1-0\n").unwrap();
    fs::write(dir.join("a.pgn"), "1. e4 e5 2. Nf3 Nc6 1-0\n").unwrap();

    let batch = Batch::load(&format!("{}/*.pgn", dir.display()), CompressionMode::Auto).unwrap();
    assert_eq!(batch.game_count(), 2);
    assert_eq!(batch.sources[0].blocks[0].index, 1);
    assert_eq!(batch.sources[1].blocks[0].index, 1);

    let report = batch.convert(&config_for(&dir, "unused")).unwrap();
    let output = fs::read_to_string(dir.join("uci_games.txt")).unwrap();

    assert_eq!(report.games_converted, 2);
    assert_eq!(output, "e2e4 e7e5 g1f3 b8c6\nd2d4 d7d5 c2c4 e7e6\n");
}

#[test]
fn zstd_input_is_decoded() {
    let dir = scratch_dir("zstd");
    let compressed = zstd::stream::encode_all(SAMPLE.as_bytes(), 3).unwrap();
    fs::write(dir.join("games.pgn.zst"), compressed).unwrap();

    let report = run(&config_for(&dir, "games.pgn.zst")).unwrap();
    assert_eq!(report.games_converted, 3);
}

#[test]
fn unreadable_file_among_several_is_skipped() {
    let dir = scratch_dir("glob_corrupt");
    let good = zstd::stream::encode_all(&b"1. e4 e5 2. Nf3 Nc6 1-0\n"[..], 3).unwrap();
    fs::write(dir.join("a.pgn.zst"), good).unwrap();
    fs::write(dir.join("b.pgn.zst"), "not zstd at all").unwrap();

    let batch =
        Batch::load(&format!("{}/*.pgn.zst", dir.display()), CompressionMode::Auto).unwrap();

    assert_eq!(batch.sources.len(), 1);
    assert_eq!(batch.game_count(), 1);
}

#[test]
fn unreadable_sole_input_is_fatal() {
    let dir = scratch_dir("sole_corrupt");
    fs::write(dir.join("games.pgn.zst"), "not zstd at all").unwrap();

    let err = Batch::load(
        &dir.join("games.pgn.zst").display().to_string(),
        CompressionMode::Auto,
    )
    .unwrap_err();

    assert!(matches!(err, ConvertError::Io { .. }));
}

#[test]
fn fail_fast_still_writes_failure_report() {
    let dir = scratch_dir("fail_fast_report");
    fs::write(
        dir.join("games.pgn"),
        "1. e4 e5 2. Nf3 Nc6 1-0\n1. e4 e5 2. Ke3 Nc6 0-1\n1. d4 d5 2. c4 e6 1-0\n",
    )
    .unwrap();
    let mut config = config_for(&dir, "games.pgn");
    config.fail_fast = true;
    config.failure_report = Some(dir.join("failures.jsonl"));

    let err = run(&config).unwrap_err();
    assert!(matches!(err, ConvertError::IllegalMove { ply: 3, .. }));

    let failures = fs::read_to_string(dir.join("failures.jsonl")).unwrap();
    let records: Vec<serde_json::Value> = failures
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["game_index"], 2);
    assert_eq!(
        fs::read_to_string(dir.join("uci_games.txt")).unwrap(),
        "e2e4 e7e5 g1f3 b8c6\n"
    );
}
