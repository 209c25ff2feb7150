pub mod cache;
pub mod dictionary;
pub mod lookup;
pub mod orchestrator;
pub mod practice;
pub mod preprocess;
pub mod resolver;
pub mod store;

#[cfg(test)]
mod tests;

pub use cache::{Cache, MemoryCache};
pub use dictionary::{SourceClient, SourceResult};
pub use lookup::WordBook;
pub use orchestrator::Orchestrator;
pub use practice::{PracticeSession, RandomScheduler, Scheduler, SessionState};
pub use resolver::{DefinitionResolver, Resolution, Resolved};
pub use store::{EntryStore, StoreError};
