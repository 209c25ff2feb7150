use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://www.wordreference.com".to_string()
}

fn default_dictionary() -> String {
    "ensv".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// WordReference language pair, e.g. `ensv` for English to Swedish
    #[serde(default = "default_dictionary")]
    pub dictionary: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self {
            base_url: env::var("GLOSA_TRANSLATION_BASE_URL").unwrap_or_else(|_| default_base_url()),
            dictionary: env::var("GLOSA_TRANSLATION_DICT").unwrap_or_else(|_| default_dictionary()),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            dictionary: default_dictionary(),
        }
    }
}
