use std::env;

use serde::{Deserialize, Deserializer, Serialize};

fn default_base_url() -> String {
    "https://www.dictionaryapi.com/api/v3/references".to_string()
}

fn default_thesaurus_reference() -> String {
    "thesaurus".to_string()
}

fn default_dictionary_reference() -> String {
    "collegiate".to_string()
}

/// One Merriam-Webster reference (endpoint + credential)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path segment selecting the reference, e.g. `thesaurus`. Empty means the slot's default.
    #[serde(default)]
    pub reference: String,
}

impl SourceConfig {
    fn or_reference(mut self, default: fn() -> String) -> Self {
        if self.reference.trim().is_empty() {
            self.reference = default();
        }
        self
    }
}

fn default_thesaurus_source() -> SourceConfig {
    DictionaryConfig::default().thesaurus
}

fn default_dictionary_source() -> SourceConfig {
    DictionaryConfig::default().dictionary
}

fn thesaurus_source<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SourceConfig, D::Error> {
    SourceConfig::deserialize(deserializer).map(|s| s.or_reference(default_thesaurus_reference))
}

fn dictionary_source<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SourceConfig, D::Error> {
    SourceConfig::deserialize(deserializer).map(|s| s.or_reference(default_dictionary_reference))
}

/// Definition providers, tried in this order: thesaurus, then dictionary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_thesaurus_source", deserialize_with = "thesaurus_source")]
    pub thesaurus: SourceConfig,
    #[serde(default = "default_dictionary_source", deserialize_with = "dictionary_source")]
    pub dictionary: SourceConfig,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let base_url = env::var("GLOSA_MW_BASE_URL").unwrap_or_else(|_| default_base_url());

        Self {
            thesaurus: SourceConfig {
                api_key: env::var("GLOSA_THESAURUS_API_KEY").unwrap_or_default(),
                base_url: base_url.clone(),
                reference: default_thesaurus_reference(),
            },
            dictionary: SourceConfig {
                api_key: env::var("GLOSA_DICTIONARY_API_KEY").unwrap_or_default(),
                base_url,
                reference: default_dictionary_reference(),
            },
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            thesaurus: SourceConfig {
                api_key: String::new(),
                base_url: default_base_url(),
                reference: default_thesaurus_reference(),
            },
            dictionary: SourceConfig {
                api_key: String::new(),
                base_url: default_base_url(),
                reference: default_dictionary_reference(),
            },
        }
    }
}
