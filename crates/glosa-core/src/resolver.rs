use std::sync::Arc;

use glosa_types::{ApiError, Definition, DefinitionSource, NotFound};

use crate::dictionary::{SourceClient, SourceResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub definitions: Vec<Definition>,
    /// Provider that ultimately supplied the definitions
    pub source: DefinitionSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Resolved),
    NotFound(NotFound),
}

/// Tries source clients in priority order.
///
/// A `NotFound` moves on to the next source; an error is returned at once.
/// When every source misses, the first source's suggestions win.
pub struct DefinitionResolver {
    sources: Vec<Arc<dyn SourceClient>>,
}

impl DefinitionResolver {
    /// Primary source first (richer synonyms), fallback second
    pub fn new(primary: Arc<dyn SourceClient>, fallback: Arc<dyn SourceClient>) -> Self {
        Self::with_sources(vec![primary, fallback])
    }

    pub fn with_sources(sources: Vec<Arc<dyn SourceClient>>) -> Self {
        Self { sources }
    }

    pub async fn resolve(&self, word: &str) -> Result<Resolution, ApiError> {
        let mut first_miss: Option<NotFound> = None;

        for client in &self.sources {
            let source = client.source();
            match client.fetch_definitions(word).await? {
                SourceResult::Definitions(definitions) if !definitions.is_empty() => {
                    tracing::debug!("{} definitions for '{}' from {}", definitions.len(), word, source);
                    return Ok(Resolution::Found(Resolved {
                        definitions,
                        source,
                    }));
                }
                SourceResult::Definitions(_) => {
                    tracing::debug!("{} returned no definitions for '{}'", source, word);
                    first_miss.get_or_insert_with(|| NotFound::new(word, Vec::new()));
                }
                SourceResult::NotFound(not_found) => {
                    tracing::debug!(
                        "{} has no entry for '{}' ({} suggestions)",
                        source,
                        word,
                        not_found.suggestions.len()
                    );
                    first_miss.get_or_insert(not_found);
                }
            }
        }

        Ok(Resolution::NotFound(
            first_miss.unwrap_or_else(|| NotFound::new(word, Vec::new())),
        ))
    }
}
