use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod network;
pub mod profile;
pub mod storage;
pub mod translator;

/// Load `.env` into the process environment.
/// `Ok(None)` when there is no such file; the caller decides how to report the rest.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    env_file_status(dotenvy::dotenv())
}

fn env_file_status(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub storage: StorageConfig,

    /// Emit logs as JSON lines instead of the human formatter
    pub log_json: bool,
}

impl Config {
    /// Build the config from the environment, after loading `.env` if present
    pub fn new() -> Self {
        match load_dotenv() {
            Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to read .env file: {}", e),
        }

        Self::from_env()
    }

    /// Build the config from the current process environment only
    pub fn from_env() -> Self {
        let log_json = env::var("GLOSA_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Config {
            network: NetworkConfig::new(),
            dictionary: DictionaryConfig::new(),
            translator: TranslatorConfig::new(),
            storage: StorageConfig::new(),

            log_json,
        }
    }

    /// Warn about settings that will make upstream calls fail
    pub fn check(&self) {
        if self.dictionary.thesaurus.api_key.is_empty() {
            tracing::warn!("GLOSA_THESAURUS_API_KEY is not set, thesaurus lookups will fail");
        }
        if self.dictionary.dictionary.api_key.is_empty() {
            tracing::warn!("GLOSA_DICTIONARY_API_KEY is not set, dictionary lookups will fail");
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            dictionary: DictionaryConfig::default(),
            translator: TranslatorConfig::default(),
            storage: StorageConfig::default(),
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let status = env_file_status(dotenvy::from_filename("glosa-no-such-file.env"));
        assert!(matches!(status, Ok(None)));
    }

    #[test]
    fn test_env_file_status() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GLOSA_TEST_ENV_FILE_STATUS=1\n").unwrap();

        assert_eq!(env_file_status(Ok(path.clone())).unwrap(), Some(path.clone()));

        let malformed = dir.path().join("bad.env");
        fs::write(&malformed, "GLOSA_TEST_BAD='unterminated\n").unwrap();
        let err = dotenvy::from_path(&malformed).map(|_| malformed.clone());
        assert!(env_file_status(err).is_err());
    }
}
