use std::collections::HashMap;

use glosa_types::{Answer, PracticeStat, PracticeView, StoredEntry, WordInfo};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Item-selection policy for practice
pub trait Scheduler<T>: Send {
    /// Next item to ask, `None` only when there is nothing to ask
    fn next(&mut self) -> Option<T>;

    /// Feedback for an item that was just answered
    fn on_answer(&mut self, item: &T, answer: Answer);
}

/// Uniform random selection with replacement; ignores answers
pub struct RandomScheduler<T, R = StdRng> {
    items: Vec<T>,
    rng: R,
}

impl<T> RandomScheduler<T, StdRng> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }
}

impl<T, R: Rng> RandomScheduler<T, R> {
    pub fn with_rng(items: Vec<T>, rng: R) -> Self {
        Self { items, rng }
    }
}

impl<T, R> Scheduler<T> for RandomScheduler<T, R>
where
    T: Clone + Send + std::fmt::Debug,
    R: Rng + Send,
{
    fn next(&mut self) -> Option<T> {
        self.items.choose(&mut self.rng).cloned()
    }

    fn on_answer(&mut self, item: &T, answer: Answer) {
        tracing::trace!("scheduler received {:?}: {:?}", item, answer);
    }
}

/// Per-word counters kept for the length of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub num_seen: u32,
    pub num_correct: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Word shown, entry hidden
    Question(String),
    /// Entry shown, waiting for a grade
    Answer(String),
    /// No item to show
    Finished,
}

/// question -> answer -> graded -> question, over a snapshot of saved words
pub struct PracticeSession {
    entries: HashMap<String, StoredEntry>,
    scheduler: Box<dyn Scheduler<String>>,
    state: SessionState,
    stats: HashMap<String, ItemStats>,
}

impl PracticeSession {
    pub fn new(entries: Vec<StoredEntry>) -> Self {
        let words = entries.iter().map(|e| e.word.clone()).collect();
        Self::with_scheduler(entries, Box::new(RandomScheduler::new(words)))
    }

    pub fn with_scheduler(entries: Vec<StoredEntry>, scheduler: Box<dyn Scheduler<String>>) -> Self {
        let entries = entries.into_iter().map(|e| (e.word.clone(), e)).collect();
        let mut session = Self {
            entries,
            scheduler,
            state: SessionState::Finished,
            stats: HashMap::new(),
        };
        session.advance();
        session
    }

    fn advance(&mut self) {
        self.state = match self.scheduler.next() {
            Some(word) if self.entries.contains_key(&word) => SessionState::Question(word),
            Some(word) => {
                tracing::warn!("Scheduler picked '{}' which is not in the session", word);
                SessionState::Finished
            }
            None => SessionState::Finished,
        };
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Show the entry of the current question
    pub fn reveal(&mut self) -> Option<WordInfo> {
        let SessionState::Question(word) = &self.state else {
            return None;
        };
        let word = word.clone();
        let info = self.entries.get(&word).map(StoredEntry::to_word_info)?;
        self.state = SessionState::Answer(word);
        Some(info)
    }

    /// Grade the revealed word and move to the next question.
    /// Returns false outside the answer state.
    pub fn grade(&mut self, answer: Answer) -> bool {
        let SessionState::Answer(word) = &self.state else {
            return false;
        };
        let word = word.clone();

        let stats = self.stats.entry(word.clone()).or_default();
        stats.num_seen += 1;
        if answer == Answer::Correct {
            stats.num_correct += 1;
        }

        self.scheduler.on_answer(&word, answer);
        self.advance();
        true
    }

    pub fn view(&self) -> PracticeView {
        match &self.state {
            SessionState::Question(word) => PracticeView::Question { word: word.clone() },
            SessionState::Answer(word) => match self.entries.get(word) {
                Some(entry) => PracticeView::Answer {
                    entry: entry.to_word_info(),
                },
                None => PracticeView::Empty,
            },
            SessionState::Finished => PracticeView::Empty,
        }
    }

    /// Counters of every word answered this session, sorted by word
    pub fn summary(&self) -> Vec<PracticeStat> {
        let mut stats: Vec<PracticeStat> = self
            .stats
            .iter()
            .map(|(word, s)| PracticeStat {
                word: word.clone(),
                num_seen: s.num_seen,
                num_correct: s.num_correct,
            })
            .collect();
        stats.sort_by(|a, b| a.word.cmp(&b.word));
        stats
    }
}
