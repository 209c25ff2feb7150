use std::sync::Arc;

use glosa_translator::Translator;
use glosa_types::{ApiError, LookupOutcome, WordInfo};

use crate::resolver::{DefinitionResolver, Resolution};

/// Network resolution of one word: definitions first, translations only for a confirmed headword
pub struct Orchestrator {
    resolver: DefinitionResolver,
    translator: Arc<dyn Translator>,
}

impl Orchestrator {
    pub fn new(resolver: DefinitionResolver, translator: Arc<dyn Translator>) -> Self {
        Self {
            resolver,
            translator,
        }
    }

    /// Never a partial result: a failed translation fails the whole lookup
    pub async fn fetch_word_info_from_web(&self, word: &str) -> LookupOutcome {
        let resolved = match self.resolver.resolve(word).await {
            Ok(Resolution::Found(resolved)) => resolved,
            Ok(Resolution::NotFound(not_found)) => {
                tracing::info!("'{}' not found, {} suggestions", word, not_found.suggestions.len());
                return not_found.into();
            }
            Err(e) => {
                tracing::warn!("Definition lookup for '{}' failed: {}", word, e);
                return e.into();
            }
        };

        let translations = match self.translator.translate(word).await {
            Ok(translations) => translations,
            Err(e) => {
                let provider = self.translator.metadata().name;
                tracing::warn!("Translation of '{}' via {} failed: {}", word, provider, e);
                return ApiError::tagged(provider, e).into();
            }
        };

        tracing::debug!(
            "Resolved '{}': {} definitions, {} translations",
            word,
            resolved.definitions.len(),
            translations.len()
        );

        WordInfo::from_network(word, resolved.definitions, translations, resolved.source).into()
    }
}
