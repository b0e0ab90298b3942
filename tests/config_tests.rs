use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::tempdir;

use journal_life::config::Config;
use journal_life::errors::AppError;
use journal_life::JournalLifeCore;

const CONFIG_VARS: [&str; 4] = [
    "JOURNAL_LIFE_LOOKAHEAD_DAYS",
    "JOURNAL_LIFE_LOG_FORMAT",
    "JOURNAL_LIFE_LOG_LEVEL",
    "JOURNAL_LIFE_INPUT",
];

// Runs `f` with the config variables set as given, restoring the originals afterwards.
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let originals: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|name| (*name, env::var(name).ok()))
        .collect();

    for name in CONFIG_VARS {
        env::remove_var(name);
    }
    for (name, value) in vars {
        env::set_var(name, value);
    }

    let result = f();

    for (name, original) in originals {
        match original {
            Some(val) => env::set_var(name, val),
            None => env::remove_var(name),
        }
    }
    result
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("journal.json");
    let input_str = input.to_string_lossy().to_string();

    let config = with_env(
        &[
            ("JOURNAL_LIFE_LOOKAHEAD_DAYS", "14"),
            ("JOURNAL_LIFE_LOG_FORMAT", "json"),
            ("JOURNAL_LIFE_LOG_LEVEL", "warn"),
            ("JOURNAL_LIFE_INPUT", &input_str),
        ],
        Config::load,
    )
    .unwrap();

    assert_eq!(config.lookahead_days, 14);
    assert_eq!(config.log_format, "json");
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.input_path, Some(input));
}

#[test]
#[serial]
fn test_config_load_with_fallbacks() {
    let config = with_env(&[], Config::load).unwrap();

    assert_eq!(config.lookahead_days, 7);
    assert_eq!(config.log_format, "text");
    assert_eq!(config.log_level, "info");
    assert!(config.input_path.is_none());
}

#[test]
#[serial]
fn test_config_blank_input_is_ignored() {
    let config = with_env(&[("JOURNAL_LIFE_INPUT", "   ")], Config::load).unwrap();
    assert!(config.input_path.is_none());
}

#[test]
#[serial]
fn test_config_tilde_expansion() {
    let original_home = env::var("HOME").ok();
    env::set_var("HOME", "/home/journaler");

    let config = with_env(&[("JOURNAL_LIFE_INPUT", "~/notes/journal.json")], Config::load);

    match original_home {
        Some(val) => env::set_var("HOME", val),
        None => env::remove_var("HOME"),
    }

    assert_eq!(
        config.unwrap().input_path,
        Some(PathBuf::from("/home/journaler/notes/journal.json"))
    );
}

#[test]
#[serial]
fn test_config_invalid_values() {
    let cases = [
        ("JOURNAL_LIFE_LOOKAHEAD_DAYS", "a week"),
        ("JOURNAL_LIFE_LOOKAHEAD_DAYS", "-3"),
        ("JOURNAL_LIFE_LOG_FORMAT", "yaml"),
        ("JOURNAL_LIFE_LOG_LEVEL", "verbose"),
    ];

    for (name, value) in cases {
        let result = with_env(&[(name, value)], Config::load);
        assert!(
            matches!(result, Err(AppError::Config(_))),
            "{}={} should be rejected",
            name,
            value
        );
    }
}

#[test]
#[serial]
fn test_config_lookahead_flows_into_core() {
    let config = with_env(&[("JOURNAL_LIFE_LOOKAHEAD_DAYS", "0")], Config::load).unwrap();
    let core = JournalLifeCore::from_config(&config);

    assert_eq!(core.lookahead_days(), 0);
}

#[test]
fn test_config_validate_negative_window() {
    let config = Config {
        lookahead_days: -1,
        ..Config::default()
    };

    let result = config.validate();
    assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("negative")));
}
