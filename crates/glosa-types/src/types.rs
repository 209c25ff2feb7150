use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sense of a word as parsed from an upstream entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// Functional label, e.g. noun, verb
    pub word_type: String,
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Upstream provider that supplied the definitions of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionSource {
    Thesaurus,
    Dictionary,
}

impl DefinitionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionSource::Thesaurus => "thesaurus",
            DefinitionSource::Dictionary => "dictionary",
        }
    }
}

impl fmt::Display for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a resolved entry came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Origin {
    #[serde(rename = "net")]
    FromNetwork,
    #[serde(rename = "db")]
    FromStore {
        #[serde(rename = "timeAdded")]
        time_added: DateTime<Utc>,
    },
}

/// A resolved word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub definitions: Vec<Definition>,
    pub translations: Vec<String>,
    pub source: DefinitionSource,
    #[serde(flatten)]
    pub origin: Origin,
}

impl WordInfo {
    pub fn from_network(
        word: impl Into<String>,
        definitions: Vec<Definition>,
        translations: Vec<String>,
        source: DefinitionSource,
    ) -> Self {
        Self {
            word: word.into(),
            definitions,
            translations,
            source,
            origin: Origin::FromNetwork,
        }
    }

    /// Same data, marked as persisted at `time_added`
    pub fn into_stored(self, time_added: DateTime<Utc>) -> Self {
        Self {
            origin: Origin::FromStore { time_added },
            ..self
        }
    }

    /// Same data, marked as re-fetchable from the network
    pub fn into_network(self) -> Self {
        Self {
            origin: Origin::FromNetwork,
            ..self
        }
    }

    pub fn time_added(&self) -> Option<DateTime<Utc>> {
        match self.origin {
            Origin::FromStore { time_added } => Some(time_added),
            Origin::FromNetwork => None,
        }
    }

    pub fn is_from_store(&self) -> bool {
        matches!(self.origin, Origin::FromStore { .. })
    }
}

/// The requested word has no exact-match entry upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFound {
    pub requested_word: String,
    /// Alternate headwords offered by the upstream, in upstream order
    pub suggestions: Vec<String>,
}

impl NotFound {
    pub fn new(requested_word: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            requested_word: requested_word.into(),
            suggestions,
        }
    }
}

/// Upstream, network or payload failure carrying a provider-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Prefix the message with the offending provider, e.g. `[thesaurus] (503) ...`
    pub fn tagged(provider: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self {
            message: format!("[{provider}] {message}"),
        }
    }
}

/// Result of looking up a word. Consumers must handle all three shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LookupOutcome {
    Found(WordInfo),
    NotFound(NotFound),
    ApiError(ApiError),
}

impl LookupOutcome {
    pub fn word_info(&self) -> Option<&WordInfo> {
        match self {
            LookupOutcome::Found(info) => Some(info),
            LookupOutcome::NotFound(_) | LookupOutcome::ApiError(_) => None,
        }
    }
}

impl From<WordInfo> for LookupOutcome {
    fn from(info: WordInfo) -> Self {
        LookupOutcome::Found(info)
    }
}

impl From<NotFound> for LookupOutcome {
    fn from(not_found: NotFound) -> Self {
        LookupOutcome::NotFound(not_found)
    }
}

impl From<ApiError> for LookupOutcome {
    fn from(error: ApiError) -> Self {
        LookupOutcome::ApiError(error)
    }
}

/// Persisted row: word key, entry blob and the time it was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub word: String,
    pub entry: WordInfo,
    pub time_added: DateTime<Utc>,
}

impl StoredEntry {
    /// Entry reshaped as served from storage
    pub fn to_word_info(&self) -> WordInfo {
        self.entry.clone().into_stored(self.time_added)
    }
}

/// Self-graded result of one practice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Correct,
    Wrong,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordInfo {
        WordInfo::from_network(
            "manage",
            vec![Definition {
                word_type: "verb".into(),
                definition: "to handle or direct".into(),
                example: None,
                synonyms: vec!["run".into()],
            }],
            vec!["hantera".into()],
            DefinitionSource::Thesaurus,
        )
    }

    #[test]
    fn test_word_info_origin_discriminant() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "net");
        assert_eq!(json["source"], "thesaurus");
        assert_eq!(json["definitions"][0]["wordType"], "verb");
        assert!(json.get("timeAdded").is_none());

        let stored = sample().into_stored(Utc::now());
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["type"], "db");
        assert!(json["timeAdded"].is_string());

        let back: WordInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn test_outcome_kind_tag() {
        let outcome = LookupOutcome::from(NotFound::new("teh", vec!["the".into()]));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "notFound");
        assert_eq!(json["requestedWord"], "teh");

        let outcome = LookupOutcome::from(ApiError::tagged("dictionary", "(500) boom"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "apiError");
        assert_eq!(json["message"], "[dictionary] (500) boom");
    }

    #[test]
    fn test_stored_entry_reshapes_origin() {
        let time_added = Utc::now();
        let row = StoredEntry {
            word: "manage".into(),
            entry: sample(),
            time_added,
        };
        let info = row.to_word_info();
        assert_eq!(info.time_added(), Some(time_added));
        assert!(info.into_network().time_added().is_none());
    }
}
