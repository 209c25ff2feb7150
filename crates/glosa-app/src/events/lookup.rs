use glosa_types::{AppEvent, LookupOutcome};

use super::Shell;

pub async fn handle_lookup(shell: &mut Shell, word: &str) -> AppEvent {
    let outcome = shell.book.lookup(word).await;

    // Misses and upstream failures are already logged by the orchestrator
    if let LookupOutcome::Found(info) = &outcome {
        tracing::debug!("'{}' resolved with {} definitions", info.word, info.definitions.len());
    }

    let word = shell.book.normalize(word);
    shell.current = Some(word).filter(|w| !w.is_empty());
    AppEvent::ShowOutcome(outcome)
}
