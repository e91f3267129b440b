//! Tests for loading arena configuration files.

use std::fs;
use tempfile::TempDir;

use strictly_arena::{ArenaConfig, CompetitorRegistry};
use strictly_gomoku::BoardSize;

/// Writes `content` to `arena.toml` in a fresh temporary directory.
fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arena.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    (dir, path)
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config(
        r#"board_size = 9
board_cols = 11
win_len = 4
matches_per_pair = 12
seed = 1234
competitors = ["greedy", "random"]
"#,
    );

    let config = ArenaConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.board(), BoardSize::new(9, 11));
    assert_eq!(*config.win_len(), 4);
    assert_eq!(*config.matches_per_pair(), 12);
    assert_eq!(*config.seed(), Some(1234));
    assert_eq!(config.competitors(), &["greedy", "random"]);
}

#[test]
fn test_missing_fields_use_defaults() {
    let (_dir, path) = write_config("win_len = 3\n");

    let config = ArenaConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.board(), BoardSize::square(20));
    assert_eq!(*config.win_len(), 3);
    assert_eq!(*config.matches_per_pair(), 100);
    assert!(config.competitors().is_empty());
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = write_config("");
    let config = ArenaConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ArenaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml() {
    let (_dir, path) = write_config("this is not valid toml !!!@@@");
    let err = ArenaConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_win_len_rejected() {
    let (_dir, path) = write_config("win_len = 0\n");
    let err = ArenaConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Invalid engine settings"));
}

#[test]
fn test_unknown_competitor_in_file() {
    let (_dir, path) = write_config("competitors = [\"random\", \"deep_blue\"]\n");
    let config = ArenaConfig::from_file(&path).expect("Load failed");

    let registry = CompetitorRegistry::with_builtins();
    let err = config.entrants(&registry).unwrap_err();
    assert!(err.message.contains("deep_blue"));
    assert!(err.to_string().starts_with("Config error: "));
}
