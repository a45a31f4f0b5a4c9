//! Runs the bot end to end against payload files.

use std::io::Write;

use arena_bot::{BotConfig, run};
use tactics::{Action, CascadeRule};
use tempfile::NamedTempFile;

fn payload_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write payload");
    file
}

fn config(file: &NamedTempFile, seed: u64) -> BotConfig {
    BotConfig {
        input: Some(file.path().to_path_buf()),
        seed: Some(seed),
        ..BotConfig::default()
    }
}

const CORNERED: &str = r#"{
    "_links": { "self": { "href": "me" } },
    "arena": {
        "dims": [4, 3],
        "state": {
            "me": { "x": 0, "y": 0, "direction": "W", "wasHit": true, "score": -1 },
            "bystander": { "x": 3, "y": 2, "direction": "S", "wasHit": false, "score": 5 }
        }
    }
}"#;

const OPEN_FIELD: &str = r#"{
    "_links": { "self": { "href": "me" } },
    "arena": {
        "dims": [5, 5],
        "state": {
            "me": { "x": 2, "y": 2, "direction": "N" },
            "far": { "x": 4, "y": 4, "direction": "E" }
        }
    }
}"#;

#[test]
fn writes_single_action_code() {
    let file = payload_file(CORNERED);
    let mut out = Vec::new();

    let decision = run(&config(&file, 0), &mut out).unwrap();

    // Wall ahead, off-grid on the right: forced left turn.
    assert_eq!(decision.rule, CascadeRule::FrontBlocked);
    assert_eq!(decision.action, Action::TurnLeft);
    assert_eq!(out, b"L");
}

#[test]
fn same_seed_same_answers() {
    let file = payload_file(OPEN_FIELD);

    let answers = |seed: u64| {
        (0..20)
            .map(|offset| {
                let mut out = Vec::new();
                run(&config(&file, seed + offset), &mut out).unwrap();
                String::from_utf8(out).unwrap()
            })
            .collect::<Vec<_>>()
    };

    let first = answers(100);
    assert_eq!(first, answers(100));
    assert!(
        first
            .iter()
            .all(|code| ["F", "L", "R"].contains(&code.as_str()))
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = BotConfig {
        input: Some(dir.path().join("absent.json")),
        ..BotConfig::default()
    };
    let mut out = Vec::new();

    let err = run(&config, &mut out).unwrap_err();

    assert!(err.to_string().contains("failed to read payload"));
    assert!(out.is_empty());
}

#[test]
fn rejected_payload_writes_nothing() {
    let file = payload_file(&CORNERED.replace(r#""direction": "W""#, r#""direction": "up""#));
    let mut out = Vec::new();

    let err = run(&config(&file, 0), &mut out).unwrap_err();

    assert!(err.to_string().contains("unrecognised orientation code 'up'"));
    assert!(out.is_empty());
}
