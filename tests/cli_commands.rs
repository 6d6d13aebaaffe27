use std::path::Path;

use clap::Parser;
use tempfile::tempdir;
use tictactoe_td::{
    cli::commands::{evaluate, inspect, train},
    learning::SavedValueTable,
};

fn train_args(dir: &Path, games: &str, extra: &[&str]) -> train::TrainArgs {
    seeded_train_args(dir, games, "5", extra)
}

fn seeded_train_args(dir: &Path, games: &str, seed: &str, extra: &[&str]) -> train::TrainArgs {
    let p1 = dir.join("policy_p1");
    let p2 = dir.join("policy_p2");
    let mut args = vec![
        "train",
        "--games",
        games,
        "--seed",
        seed,
        "--first-policy",
        p1.to_str().unwrap(),
        "--second-policy",
        p2.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    train::TrainArgs::parse_from(args)
}

#[test]
fn train_saves_both_policies_and_summary() {
    let tmp = tempdir().unwrap();
    let summary_stem = tmp.path().join("run_overview");

    train::execute(train_args(
        tmp.path(),
        "30",
        &["--summary", summary_stem.to_str().unwrap()],
    ))
    .expect("training should succeed");

    assert!(tmp.path().join("policy_p1").exists());
    assert!(tmp.path().join("policy_p2").exists());

    let expected_path = summary_stem.with_extension("json");
    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["total_games"], 30);
}

#[test]
fn summary_directory_argument_creates_default_file() {
    let tmp = tempdir().unwrap();
    let summary_arg = format!("{}/", tmp.path().join("summaries").display());

    train::execute(train_args(tmp.path(), "5", &["--summary", &summary_arg]))
        .expect("training with directory summary should succeed");

    assert!(
        tmp.path()
            .join("summaries")
            .join("training_summary.json")
            .exists()
    );
}

#[test]
fn resume_requires_existing_policies() {
    let tmp = tempdir().unwrap();
    let result = train::execute(train_args(tmp.path(), "5", &["--resume"]));
    assert!(result.is_err());

    train::execute(train_args(tmp.path(), "5", &[])).unwrap();
    train::execute(train_args(tmp.path(), "5", &["--resume"])).unwrap();
}

#[test]
fn resumed_training_records_new_seed_and_total_episodes() {
    let tmp = tempdir().unwrap();
    train::execute(seeded_train_args(tmp.path(), "6", "5", &[])).unwrap();
    train::execute(seeded_train_args(tmp.path(), "4", "9", &["--resume"])).unwrap();

    let bytes = std::fs::read(tmp.path().join("policy_p1")).unwrap();
    let saved = SavedValueTable::from_bytes(&bytes).unwrap();
    assert_eq!(saved.metadata.seed, Some(9));
    assert_eq!(saved.metadata.episodes, 10);

    let bytes = std::fs::read(tmp.path().join("policy_p2")).unwrap();
    let saved = SavedValueTable::from_bytes(&bytes).unwrap();
    assert_eq!(saved.metadata.seed, Some(10));
}

#[test]
fn invalid_learning_rate_is_rejected() {
    let tmp = tempdir().unwrap();
    let result = train::execute(train_args(tmp.path(), "5", &["--learning-rate", "1.5"]));
    assert!(result.is_err());
    assert!(!tmp.path().join("policy_p1").exists());
}

#[test]
fn evaluate_and_inspect_read_trained_policies() {
    let tmp = tempdir().unwrap();
    train::execute(train_args(tmp.path(), "40", &[])).unwrap();

    let p1 = tmp.path().join("policy_p1");
    let p2 = tmp.path().join("policy_p2");

    evaluate::execute(evaluate::EvaluateArgs::parse_from([
        "evaluate",
        "--first-policy",
        p1.to_str().unwrap(),
        "--second-policy",
        p2.to_str().unwrap(),
        "--games",
        "10",
        "--seed",
        "1",
    ]))
    .expect("evaluation should succeed");

    inspect::execute(inspect::InspectArgs::parse_from([
        "inspect",
        p1.to_str().unwrap(),
        "--top",
        "3",
    ]))
    .expect("inspect should succeed");

    inspect::execute(inspect::InspectArgs::parse_from([
        "inspect",
        p2.to_str().unwrap(),
        "--json",
    ]))
    .expect("inspect --json should succeed");
}

#[test]
fn evaluate_fails_without_policies() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope");
    let result = evaluate::execute(evaluate::EvaluateArgs::parse_from([
        "evaluate",
        "--first-policy",
        missing.to_str().unwrap(),
    ]));
    assert!(result.is_err());
}
