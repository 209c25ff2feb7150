use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Answer, LookupOutcome, WordInfo};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Command(Command),
    ShowOutcome(LookupOutcome),
    ShowWordList(Vec<WordListItem>),
    ShowPractice(PracticeView),
    Status(String),
    Shutdown,
}

/// User intents coming from the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(String),
    /// Save a word, or the currently displayed one
    Add(Option<String>),
    Delete(Option<String>),
    List,
    Practice,
    Show,
    Grade(Answer),
    StopPractice,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordListItem {
    pub word: String,
    pub time_added: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum PracticeView {
    Question { word: String },
    Answer { entry: WordInfo },
    Summary { stats: Vec<PracticeStat> },
    /// Nothing stored, nothing to practice
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeStat {
    pub word: String,
    pub num_seen: u32,
    pub num_correct: u32,
}
