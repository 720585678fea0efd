//! End-to-end tests of the edit-solver binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn edit_solver() -> Command {
    Command::cargo_bin("edit-solver").expect("binary should build")
}

#[test]
fn test_distance_plain() {
    edit_solver()
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout("Distance: 3\n");
}

#[test]
fn test_distance_trace_tally() {
    edit_solver()
        .args(["distance", "Fork Handles", "four candles", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 4"))
        .stdout(predicate::str::contains("{'S': 4, ' ': 1, "))
        .stdout(predicate::str::contains("'Total': 4}"))
        .stdout(predicate::str::contains("Operations: 12"));
}

#[test]
fn test_distance_alignment() {
    edit_solver()
        .args(["distance", "kitten", "sitting", "--align"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kitten-\nsitting\n^   ^ ^\n"));
}

#[test]
fn test_distance_transposition_flag() {
    edit_solver()
        .args(["distance", "abc", "acb", "-t", "1"])
        .assert()
        .success()
        .stdout("Distance: 1\n");
}

#[test]
fn test_distance_ignore_case() {
    edit_solver()
        .args(["distance", "Fork", "fork", "--ignore-case"])
        .assert()
        .success()
        .stdout("Distance: 0\n");
}

#[test]
fn test_distance_json() {
    let output = edit_solver()
        .args(["distance", "abcd", "acbd", "-t", "0.5", "--align", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["distance"], 0.5);
    assert_eq!(json["tally"]["edits"]["T"], 1);
    assert_eq!(json["tally"]["matches"]["a"], 1);
    assert_eq!(json["tally"]["operations"], 3);
    assert_eq!(json["ops"][1]["source"], "bc");
    assert_eq!(json["alignment"]["markers"], " ^^");
}

#[test]
fn test_distance_tsv() {
    edit_solver()
        .args(["distance", "ab", "b", "--trace", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t1\t0\t0\t1\t0\t2"));
}

#[test]
fn test_distance_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("a.txt");
    let target = dir.path().join("b.txt");
    std::fs::write(&source, "the quick brown fox\n").unwrap();
    std::fs::write(&target, "the quikc brown fox\n").unwrap();

    edit_solver()
        .args(["distance", "--files", "-t", "1"])
        .arg(&source)
        .arg(&target)
        .assert()
        .success()
        .stdout("Distance: 1\n");
}

#[test]
fn test_distance_missing_file() {
    edit_solver()
        .args(["distance", "--files", "/nonexistent/a.txt", "/nonexistent/b.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_negative_weight_rejected() {
    edit_solver()
        .args(["distance", "a", "b", "--sub-weight=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid substitution weight"));
}

#[test]
fn test_weights_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    std::fs::write(&path, r#"{"substitution": 2.5}"#).unwrap();

    edit_solver()
        .args(["distance", "a", "b", "--weights"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Distance: 2\n");
}

#[test]
fn test_fuzzy_ranking() {
    let output = edit_solver()
        .args(["fuzzy", "abc", "xxx", "acb", "cab", "bbb", "-t", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ranked: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(ranked, vec!["acb", "cab", "bbb", "xxx"]);
    assert!(stdout.starts_with("  0.6667  acb"));
}

#[test]
fn test_fuzzy_min_distance_and_limit() {
    edit_solver()
        .args(["fuzzy", "abc", "xxx", "acb", "cab", "-m", "2", "-n", "1"])
        .assert()
        .success()
        .stdout("  0.3333  acb\n");
}

#[test]
fn test_fuzzy_all_pairs_json() {
    let output = edit_solver()
        .args([
            "fuzzy",
            "I am Sam",
            "sam I am",
            "--ignore-case",
            "--mode",
            "all-pairs",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["rank"], 1);
    assert_eq!(json[0]["query"], "I am Sam");
    assert_eq!(json[0]["candidate"], "sam I am");
    assert_eq!(json[0]["score"], 5.0);
}

#[test]
fn test_fuzzy_no_matches() {
    edit_solver()
        .args(["fuzzy", "abc", "xyz", "--nonzero"])
        .assert()
        .success()
        .stdout("No matches found.\n");
}

#[test]
fn test_fuzzy_ignore_case_prints_candidates_as_given() {
    edit_solver()
        .args(["fuzzy", "Fork Handles", "FORK HANDLES", "four candles", "--ignore-case"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  2.0000  FORK HANDLES\n"));
}

#[test]
fn test_fuzzy_closest_token_scores() {
    edit_solver()
        .args(["fuzzy", "ab", "abcdef x", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t0.0000\t2\tabcdef x"));
}

#[test]
fn test_fuzzy_rejects_negative_scale() {
    edit_solver()
        .args(["fuzzy", "abc", "acb", "--scale", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --scale"));
}

#[test]
fn test_fuzzy_rejects_nan_scale() {
    edit_solver()
        .args(["fuzzy", "abc", "acb", "--scale", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --scale"));
}

#[test]
fn test_fuzzy_rejects_bad_min_distance() {
    edit_solver()
        .args(["fuzzy", "abc", "acb", "-m", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --min-distance"));

    edit_solver()
        .args(["fuzzy", "abc", "acb", "-m", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --min-distance"));
}
