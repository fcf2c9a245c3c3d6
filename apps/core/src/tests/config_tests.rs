//! Config Tests
//!
//! Loading `TutorConfig` from the real process environment and from `.env`
//! files. Every test scopes its variables with `temp_env` so nothing leaks.

use crate::brain::Language;
use crate::config::{LogFormat, TutorConfig};
use crate::tutor::Tutor;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const KEYS: [&str; 7] = [
    "THEORYCOACH_PRIMARY_ENDPOINT",
    "THEORYCOACH_FALLBACK_ENDPOINT",
    "THEORYCOACH_API_TOKEN",
    "THEORYCOACH_TIMEOUT_SECS",
    "THEORYCOACH_HISTORY_CAPACITY",
    "THEORYCOACH_LANGUAGE",
    "THEORYCOACH_LOG_FORMAT",
];

fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
    KEYS.iter().map(|k| (*k, None)).collect()
}

#[test]
fn test_from_env_reads_process_variables() {
    let mut vars = cleared();
    vars.push(("THEORYCOACH_TIMEOUT_SECS", Some("4")));
    vars.push(("THEORYCOACH_HISTORY_CAPACITY", Some("6")));
    vars.push(("THEORYCOACH_LANGUAGE", Some("ar")));

    temp_env::with_vars(vars, || {
        let config = TutorConfig::from_env().unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(4));
        assert_eq!(config.history_capacity, 6);
        assert_eq!(config.language, Language::Ar);
        assert!(!config.external_enabled());
    });
}

#[test]
fn test_from_env_rejects_out_of_range_capacity() {
    let mut vars = cleared();
    vars.push(("THEORYCOACH_HISTORY_CAPACITY", Some("0")));

    temp_env::with_vars(vars, || {
        assert!(TutorConfig::from_env().is_err());
    });
}

#[test]
fn test_from_env_file_seeds_missing_variables() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "THEORYCOACH_PRIMARY_ENDPOINT=http://127.0.0.1:9/models/tutor").unwrap();
    writeln!(file, "THEORYCOACH_API_TOKEN=file-token").unwrap();
    writeln!(file, "THEORYCOACH_LOG_FORMAT=json").unwrap();
    writeln!(file, "THEORYCOACH_TIMEOUT_SECS=3").unwrap();

    let mut vars = cleared();
    // Values already in the environment win over the file.
    vars.retain(|(k, _)| *k != "THEORYCOACH_TIMEOUT_SECS");
    vars.push(("THEORYCOACH_TIMEOUT_SECS", Some("9")));

    temp_env::with_vars(vars, || {
        let config = TutorConfig::from_env_file(file.path()).unwrap();
        assert!(config.external_enabled());
        assert_eq!(config.api_token.as_deref(), Some("file-token"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.timeout_secs, 9);

        // A configured endpoint attaches the hosted client without any I/O.
        assert!(Tutor::from_config(&config).is_ok());
    });
}

#[test]
fn test_missing_env_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TutorConfig::from_env_file(&dir.path().join("absent.env"));
    assert!(matches!(result, Err(crate::error::AppError::Config(_))));
}
