//! Settings read from the environment, with an optional `.env` file.

use std::path::PathBuf;

use crate::error::ConfigError;

pub const DB_VAR: &str = "MULTIFLASH_DB";
pub const CHOICES_VAR: &str = "MULTIFLASH_CHOICES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub num_choices: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("multiflash.db"),
            num_choices: 3,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(path) => log::debug!("loaded environment from {}", path.display()),
            Err(e) => allow_missing_env_file(e)?,
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = lookup(DB_VAR) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(CHOICES_VAR) {
            config.num_choices = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: CHOICES_VAR,
                    value: raw.clone(),
                })?;
        }
        Ok(config)
    }
}

/// A missing `.env` is fine; an unreadable or malformed one is not.
fn allow_missing_env_file(err: dotenv::Error) -> Result<(), ConfigError> {
    if err.not_found() {
        Ok(())
    } else {
        Err(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config =
            Config::from_lookup(lookup(&[(DB_VAR, "/tmp/facts.db"), (CHOICES_VAR, " 4 ")])).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/facts.db"));
        assert_eq!(config.num_choices, 4);
    }

    #[test]
    fn test_bad_choice_count() {
        let err = Config::from_lookup(lookup(&[(CHOICES_VAR, "many")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: CHOICES_VAR, ref value } if value == "many"
        ));
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let err = dotenv::from_path(dir.path().join(".env")).unwrap_err();
        assert!(allow_missing_env_file(err).is_ok());
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "this is not valid 'env\n").unwrap();

        let err = dotenv::from_path(&path).unwrap_err();
        assert!(matches!(
            allow_missing_env_file(err),
            Err(ConfigError::DotEnv(_))
        ));
    }
}
