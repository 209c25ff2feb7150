use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::Config;

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profiles stored as `<root>/profiles/<name>.json`
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Profiles under the platform config dir, or `./.glosa` when there is none
    pub fn new() -> Self {
        let root = ProjectDirs::from("", "", "glosa")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".glosa"));
        Self { root }
    }

    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Write the main profile from the environment config if it is missing
    pub fn init(&self) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(self.profiles_dir())?;

        let main_profile = self.profile_path("main");
        if !main_profile.exists() {
            let profile = Profile {
                name: "main".into(),
                value: Config::new(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(main_profile)
    }

    /// Load a profile by name, falling back to main, then to the environment
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);
        if profile_file.exists() {
            return read_profile(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or environment");
        let main_file = self.profile_path("main");
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            Ok(Config::new())
        }
    }

    pub fn save(&self, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(self.profiles_dir())?;
        let profile = Profile {
            name: name.into(),
            value: config.clone(),
        };
        let file = self.profile_path(name);
        fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Saved profile: {name}");
        Ok(file)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}
