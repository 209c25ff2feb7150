use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

fn default_db_path() -> PathBuf {
    ProjectDirs::from("", "", "glosa")
        .map(|dirs| dirs.data_local_dir().join("words.db"))
        .unwrap_or_else(|| PathBuf::from("glosa.db"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file holding saved words
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl StorageConfig {
    pub fn new() -> Self {
        let db_path = env::var("GLOSA_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());

        Self { db_path }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}
