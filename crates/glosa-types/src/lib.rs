pub mod events;
pub mod types;

pub use events::{AppEvent, Command, PracticeStat, PracticeView, WordListItem};
pub use types::{
    Answer, ApiError, Definition, DefinitionSource, LookupOutcome, NotFound, Origin, StoredEntry,
    WordInfo,
};
