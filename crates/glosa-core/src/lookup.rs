use chrono::Utc;
use glosa_types::{LookupOutcome, NotFound, StoredEntry, WordInfo, WordListItem};

use crate::cache::{Cache, MemoryCache};
use crate::orchestrator::Orchestrator;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::store::{EntryStore, StoreError};

/// Saved words in front of network resolution.
///
/// `entries` is a rebuildable view over the store; `displayed` holds the last
/// outcome shown for each word so add/delete can reshape it in place.
pub struct WordBook {
    orchestrator: Orchestrator,
    store: Box<dyn EntryStore>,
    entries: Box<dyn Cache<StoredEntry>>,
    displayed: Box<dyn Cache<LookupOutcome>>,
    preprocessor: DefaultPreprocessor,
}

impl WordBook {
    /// Build with in-memory caches and fill the entry cache from the store
    pub fn open(orchestrator: Orchestrator, store: Box<dyn EntryStore>) -> Result<Self, StoreError> {
        Self::with_caches(
            orchestrator,
            store,
            Box::new(MemoryCache::new()),
            Box::new(MemoryCache::new()),
        )
    }

    pub fn with_caches(
        orchestrator: Orchestrator,
        store: Box<dyn EntryStore>,
        entries: Box<dyn Cache<StoredEntry>>,
        displayed: Box<dyn Cache<LookupOutcome>>,
    ) -> Result<Self, StoreError> {
        let mut book = Self {
            orchestrator,
            store,
            entries,
            displayed,
            preprocessor: DefaultPreprocessor,
        };
        book.reload()?;
        Ok(book)
    }

    /// Rebuild the entry cache wholesale from the store, which is the source of truth
    pub fn reload(&mut self) -> Result<usize, StoreError> {
        let rows = self.store.list()?;
        self.entries.clear();
        for row in rows {
            self.entries.set(row.word.clone(), row);
        }
        tracing::info!("Loaded {} saved words", self.entries.len());
        Ok(self.entries.len())
    }

    pub fn normalize(&self, word: &str) -> String {
        self.preprocessor.process(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(&self.normalize(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saved entry first, network otherwise. A saved word never touches the network.
    pub async fn lookup(&mut self, word: &str) -> LookupOutcome {
        let word = self.normalize(word);
        if word.is_empty() {
            return NotFound::new(word, Vec::new()).into();
        }

        let outcome = match self.entries.get(&word) {
            Some(row) => {
                tracing::debug!("'{}' served from saved words", word);
                LookupOutcome::Found(row.to_word_info())
            }
            None => self.orchestrator.fetch_word_info_from_web(&word).await,
        };

        self.displayed.set(word, outcome.clone());
        outcome
    }

    /// Last outcome shown for `word`
    pub fn displayed(&self, word: &str) -> Option<&LookupOutcome> {
        self.displayed.get(&self.normalize(word))
    }

    /// Whether `outcome` may be saved under `word`
    pub fn can_add(&self, word: &str, outcome: &LookupOutcome) -> bool {
        let word = self.normalize(word);
        if word.is_empty() || self.entries.contains(&word) {
            return false;
        }
        match outcome {
            LookupOutcome::Found(info) => info.word == word && !info.definitions.is_empty(),
            LookupOutcome::NotFound(_) | LookupOutcome::ApiError(_) => false,
        }
    }

    /// Persist a resolved word, then update the local view without re-fetching.
    ///
    /// Returns `None` when the outcome may not be saved. The local view is only
    /// touched after the store accepted the write; a later `reload` reconciles
    /// anything the store lost afterwards.
    pub fn add(&mut self, word: &str, outcome: &LookupOutcome) -> Result<Option<WordInfo>, StoreError> {
        if !self.can_add(word, outcome) {
            tracing::debug!("'{}' cannot be saved", word);
            return Ok(None);
        }
        let LookupOutcome::Found(info) = outcome else {
            return Ok(None);
        };

        let word = self.normalize(word);
        let time_added = Utc::now();
        let entry = info.clone().into_network();
        self.store.add(&word, &entry, time_added)?;

        let row = StoredEntry {
            word: word.clone(),
            entry,
            time_added,
        };
        let stored = row.to_word_info();
        self.entries.set(word.clone(), row);
        self.displayed
            .set(word.clone(), LookupOutcome::Found(stored.clone()));

        tracing::info!("Saved '{}'", word);
        Ok(Some(stored))
    }

    /// Remove a saved word; a displayed entry for it becomes network-shaped again
    pub fn delete(&mut self, word: &str) -> Result<bool, StoreError> {
        let word = self.normalize(word);
        if word.is_empty() {
            return Ok(false);
        }

        let removed = self.store.delete(&word)?;
        let cached = self.entries.invalidate(&word).is_some();

        if let Some(LookupOutcome::Found(info)) = self.displayed.invalidate(&word) {
            self.displayed
                .set(word.clone(), LookupOutcome::Found(info.into_network()));
        }

        if removed || cached {
            tracing::info!("Deleted '{}'", word);
        }
        Ok(removed || cached)
    }

    /// Saved words, newest first
    pub fn list(&self) -> Vec<WordListItem> {
        let mut items: Vec<WordListItem> = self
            .entries
            .entries()
            .map(|(word, row)| WordListItem {
                word: word.to_string(),
                time_added: row.time_added,
            })
            .collect();
        items.sort_by(|a, b| b.time_added.cmp(&a.time_added).then_with(|| a.word.cmp(&b.word)));
        items
    }

    /// Copy of every saved entry, for a practice session
    pub fn snapshot(&self) -> Vec<StoredEntry> {
        self.entries.entries().map(|(_, row)| row.clone()).collect()
    }
}
