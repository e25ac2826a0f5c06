mod helpers;

use std::fs;

use helpers::{TempEnvVar, clean_env, run_cli};
use holdem_cli::config::{self, ValueSource};
use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn file_then_env_precedence() {
    let _env = clean_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    fs::write(
        &path,
        "players = 4\nstarting_stack = 500\nsmall_blind = 10\nbig_blind = 20\nopponents = \"tight_passive\"\n",
    )
    .unwrap();
    let _cfg = TempEnvVar::set("HOLDEM_CONFIG", path.to_str().unwrap());
    let _players = TempEnvVar::set("HOLDEM_PLAYERS", "3");

    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.players, 3);
    assert_eq!(resolved.sources.players, ValueSource::Env);
    assert_eq!(resolved.config.starting_stack, 500);
    assert_eq!(resolved.sources.starting_stack, ValueSource::File);
    assert_eq!((resolved.config.small_blind, resolved.config.big_blind), (10, 20));
    assert_eq!(resolved.sources.blinds, ValueSource::File);
    assert_eq!(resolved.config.opponents, "tight_passive");
    assert_eq!(resolved.sources.timeout_secs, ValueSource::Default);
}

#[test]
#[serial]
fn blinds_and_seed_from_env() {
    let _env = clean_env();
    let _blinds = TempEnvVar::set("HOLDEM_BLINDS", "25/50");
    let _seed = TempEnvVar::set("HOLDEM_SEED", "99");

    let (code, out, _) = run_cli(&["cfg"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["blinds"]["value"], "25/50");
    assert_eq!(v["blinds"]["source"], "env");
    assert_eq!(v["seed"]["value"], 99);
    assert_eq!(v["seed"]["source"], "env");
}

#[test]
#[serial]
fn invalid_env_values_are_reported() {
    let _env = clean_env();
    let _blinds = TempEnvVar::set("HOLDEM_BLINDS", "50/25");
    let (code, _, err) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("Configuration error"));
    drop(_blinds);

    let _timeout = TempEnvVar::set("HOLDEM_TIMEOUT", "soon");
    let (code, _, err) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid timeout"));
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    let _env = clean_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let _cfg = TempEnvVar::set("HOLDEM_CONFIG", path.to_str().unwrap());
    assert!(matches!(
        config::load(),
        Err(config::ConfigError::Io(_))
    ));

    fs::write(&path, "players = \"many\"").unwrap();
    assert!(matches!(
        config::load(),
        Err(config::ConfigError::Parse(_))
    ));
}
