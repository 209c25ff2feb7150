use glosa_config::dictionary::SourceConfig;
use glosa_core::cache::{Cache, MemoryCache};
use glosa_core::dictionary::{SourceClient, SourceResult};
use glosa_core::preprocess::normalize_headword;
use glosa_types::{ApiError, Definition, DefinitionSource, NotFound};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::markup::strip_markup;

/// Client for one Merriam-Webster reference (thesaurus or collegiate dictionary)
pub struct MerriamWebsterClient {
    client: reqwest::Client,
    source: DefinitionSource,
    api_key: String,
    base_url: String,
    reference: String,
    /// Raw bodies of successful lookups; entries never go stale
    responses: Mutex<MemoryCache<String>>,
}

impl MerriamWebsterClient {
    pub fn new(source: DefinitionSource, config: &SourceConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            source,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            reference: config.reference.clone(),
            responses: Mutex::new(MemoryCache::new()),
        }
    }

    fn request_url(&self, word: &str) -> String {
        format!(
            "{}/{}/json/{}?key={}",
            self.base_url,
            self.reference,
            urlencoding::encode(word),
            urlencoding::encode(&self.api_key)
        )
    }

    fn error(&self, message: impl std::fmt::Display) -> ApiError {
        ApiError::tagged(self.source, message)
    }
}

#[async_trait::async_trait]
impl SourceClient for MerriamWebsterClient {
    fn source(&self) -> DefinitionSource {
        self.source
    }

    async fn fetch_definitions(&self, word: &str) -> Result<SourceResult, ApiError> {
        let cached = self.responses.lock().await.get(word).cloned();
        if let Some(body) = cached {
            tracing::debug!("{} response for '{}' served from cache", self.source, word);
            return parse_response(word, &body).map_err(|raw| self.error(raw));
        }

        tracing::debug!("Requesting '{}' from {}", word, self.source);
        let response = self
            .client
            .get(self.request_url(word))
            .send()
            .await
            // The URL carries the API key
            .map_err(|e| self.error(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.error(format!(
                "({}) {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown status")
            )));
        }

        let body = response.text().await.map_err(|e| self.error(e.without_url()))?;

        // A 200 may still carry an error message instead of entries
        let result = parse_response(word, &body).map_err(|raw| self.error(raw))?;
        self.responses.lock().await.set(word.to_string(), body);
        Ok(result)
    }
}

// JSON structures of one Merriam-Webster entry
#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    hwi: Option<HeadwordInfo>,
    /// Functional label (noun, verb, ...)
    #[serde(default)]
    fl: Option<String>,
    #[serde(default)]
    def: Vec<DefinitionSection>,
}

#[derive(Debug, Deserialize)]
struct HeadwordInfo {
    hw: String,
}

#[derive(Debug, Deserialize)]
struct DefinitionSection {
    #[serde(default)]
    sseq: Value,
}

impl Entry {
    fn headword(&self) -> Option<&str> {
        self.hwi.as_ref().map(|h| h.hw.as_str())
    }
}

/// Parse a response body. `Err` holds the raw body when it is not a list of entries or suggestions.
pub fn parse_response(word: &str, body: &str) -> Result<SourceResult, String> {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(body) else {
        return Err(body.to_string());
    };

    // Without a headword the payload is a plain list of alternate spellings
    let has_headword = items
        .first()
        .and_then(|item| item.get("hwi"))
        .and_then(|hwi| hwi.get("hw"))
        .is_some();
    if !has_headword {
        let suggestions = unique(items.iter().filter_map(Value::as_str).map(str::to_string));
        return Ok(SourceResult::NotFound(NotFound::new(word, suggestions)));
    }

    let entries: Vec<Entry> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Entry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping malformed entry for '{}': {}", word, e);
                None
            }
        })
        .collect();

    let headwords = unique(entries.iter().filter_map(Entry::headword).map(str::to_string));
    let query = normalize_headword(word);

    let definitions: Vec<Definition> = entries
        .iter()
        .filter(|entry| entry.headword().is_some_and(|hw| normalize_headword(hw) == query))
        .flat_map(entry_definitions)
        .collect();

    if definitions.is_empty() {
        return Ok(SourceResult::NotFound(NotFound::new(word, headwords)));
    }

    Ok(SourceResult::Definitions(definitions))
}

fn entry_definitions(entry: &Entry) -> Vec<Definition> {
    let word_type = entry.fl.clone().unwrap_or_default();

    let mut senses = Vec::new();
    for section in &entry.def {
        collect_senses(&section.sseq, &mut senses);
    }

    senses
        .into_iter()
        .filter_map(|sense| sense_definition(&word_type, sense))
        .collect()
}

/// Walk the nested sense sequence (`sense`, `pseq`, `bs` wrappers) down to sense objects
fn collect_senses<'a>(node: &'a Value, out: &mut Vec<&'a serde_json::Map<String, Value>>) {
    match node {
        Value::Array(items) => {
            for item in items {
                collect_senses(item, out);
            }
        }
        Value::Object(map) if map.contains_key("dt") => out.push(map),
        Value::Object(map) => {
            // Binding sense: {"sense": {...}}
            if let Some(inner) = map.get("sense") {
                collect_senses(inner, out);
            }
        }
        _ => {}
    }
}

fn sense_definition(word_type: &str, sense: &serde_json::Map<String, Value>) -> Option<Definition> {
    let dt = sense.get("dt")?.as_array()?;

    let text = tagged(dt, "text").and_then(Value::as_str)?;
    let definition = strip_markup(text);
    if definition.is_empty() {
        return None;
    }

    let example = tagged(dt, "vis")
        .and_then(Value::as_array)
        .and_then(|examples| examples.first())
        .and_then(|example| example.get("t"))
        .and_then(Value::as_str)
        .map(strip_markup)
        .filter(|example| !example.is_empty());

    let mut synonyms = Vec::new();
    if let Some(syn_list) = sense.get("syn_list") {
        collect_words(syn_list, &mut synonyms);
    }

    Some(Definition {
        word_type: word_type.to_string(),
        definition,
        example,
        synonyms,
    })
}

/// First `[tag, content]` pair in a defining-text array
fn tagged<'a>(dt: &'a [Value], tag: &str) -> Option<&'a Value> {
    dt.iter().find_map(|pair| {
        let pair = pair.as_array()?;
        (pair.first()?.as_str()? == tag).then(|| pair.get(1)).flatten()
    })
}

/// Collect every `wd` in a nested synonym list
fn collect_words(node: &Value, out: &mut Vec<String>) {
    match node {
        Value::Array(items) => {
            for item in items {
                collect_words(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(word) = map.get("wd").and_then(Value::as_str) {
                out.push(word.to_string());
            }
        }
        _ => {}
    }
}

/// Drop duplicates, keep first-seen order
fn unique(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
