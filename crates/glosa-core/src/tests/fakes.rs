//! In-process stand-ins for upstream providers and the word store

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use glosa_translator::{ProviderMetadata, TranslateError, Translator};
use glosa_types::{ApiError, Definition, DefinitionSource, NotFound, StoredEntry, WordInfo};

use crate::dictionary::{SourceClient, SourceResult};
use crate::orchestrator::Orchestrator;
use crate::resolver::DefinitionResolver;
use crate::store::{EntryStore, StoreError};

pub fn definition(text: &str) -> Definition {
    Definition {
        word_type: "verb".to_string(),
        definition: text.to_string(),
        example: None,
        synonyms: vec![],
    }
}

#[derive(Clone)]
pub enum Reply {
    Definitions(Vec<Definition>),
    NotFound(Vec<String>),
    Error(String),
}

pub struct FakeSource {
    source: DefinitionSource,
    reply: Reply,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(source: DefinitionSource, reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            source,
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SourceClient for FakeSource {
    fn source(&self) -> DefinitionSource {
        self.source
    }

    async fn fetch_definitions(&self, word: &str) -> Result<SourceResult, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Definitions(defs) => Ok(SourceResult::Definitions(defs.clone())),
            Reply::NotFound(suggestions) => {
                Ok(SourceResult::NotFound(NotFound::new(word, suggestions.clone())))
            }
            Reply::Error(message) => Err(ApiError::tagged(self.source, message)),
        }
    }
}

pub struct FakeTranslator {
    reply: Result<Vec<String>, String>,
    calls: AtomicUsize,
}

impl FakeTranslator {
    pub fn new(reply: Result<Vec<String>, String>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, _word: &str) -> Result<Vec<String>, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(TranslateError::ApiError)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "wordreference".to_string(),
            language_pair: "ensv".to_string(),
        }
    }
}

/// Providers wired the way the app wires the real ones
pub struct Upstream {
    pub thesaurus: Arc<FakeSource>,
    pub dictionary: Arc<FakeSource>,
    pub translator: Arc<FakeTranslator>,
}

impl Upstream {
    pub fn new(thesaurus: Reply, dictionary: Reply, translations: Result<Vec<String>, String>) -> Self {
        Self {
            thesaurus: FakeSource::new(DefinitionSource::Thesaurus, thesaurus),
            dictionary: FakeSource::new(DefinitionSource::Dictionary, dictionary),
            translator: FakeTranslator::new(translations),
        }
    }

    pub fn resolver(&self) -> DefinitionResolver {
        DefinitionResolver::new(self.thesaurus.clone(), self.dictionary.clone())
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(self.resolver(), self.translator.clone())
    }

    pub fn network_calls(&self) -> usize {
        self.thesaurus.calls() + self.dictionary.calls() + self.translator.calls()
    }
}

/// HashMap-backed store; `fail_writes` makes add/delete error out
#[derive(Default)]
pub struct MemoryStore {
    rows: HashMap<String, StoredEntry>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<StoredEntry>) -> Self {
        Self {
            rows: rows.into_iter().map(|r| (r.word.clone(), r)).collect(),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: HashMap::new(),
            fail_writes: true,
        }
    }
}

impl EntryStore for MemoryStore {
    fn add(&mut self, word: &str, entry: &WordInfo, time_added: DateTime<Utc>) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Backend("disk full".to_string()));
        }
        if self.rows.contains_key(word) {
            return Err(StoreError::Duplicate(word.to_string()));
        }
        self.rows.insert(
            word.to_string(),
            StoredEntry {
                word: word.to_string(),
                entry: entry.clone(),
                time_added,
            },
        );
        Ok(())
    }

    fn get(&self, word: &str) -> Result<Option<StoredEntry>, StoreError> {
        Ok(self.rows.get(word).cloned())
    }

    fn delete(&mut self, word: &str) -> Result<bool, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Backend("disk full".to_string()));
        }
        Ok(self.rows.remove(word).is_some())
    }

    fn list(&self) -> Result<Vec<StoredEntry>, StoreError> {
        Ok(self.rows.values().cloned().collect())
    }
}
