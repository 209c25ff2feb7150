use glosa_types::{AppEvent, LookupOutcome};

use super::Shell;

pub fn handle_add(shell: &mut Shell, word: Option<String>) -> AppEvent {
    let Some(word) = shell.target(word) else {
        return AppEvent::Status("Nothing to save, look up a word first".into());
    };
    if shell.book.contains(&word) {
        return AppEvent::Status(format!("'{word}' is already saved"));
    }
    let Some(outcome) = shell.book.displayed(&word).cloned() else {
        return AppEvent::Status(format!("Look up '{word}' before saving it"));
    };

    match shell.book.add(&word, &outcome) {
        Ok(Some(info)) => AppEvent::ShowOutcome(LookupOutcome::Found(info)),
        Ok(None) => AppEvent::Status(format!("'{word}' has no entry to save")),
        Err(e) => {
            tracing::error!("Failed to save '{}': {}", word, e);
            AppEvent::Status(format!("Could not save '{word}': {e}"))
        }
    }
}

pub fn handle_delete(shell: &mut Shell, word: Option<String>) -> AppEvent {
    let Some(word) = shell.target(word) else {
        return AppEvent::Status("Nothing to delete, look up a word first".into());
    };

    match shell.book.delete(&word) {
        Ok(true) => AppEvent::Status(format!("Deleted '{word}'")),
        Ok(false) => AppEvent::Status(format!("'{word}' is not saved")),
        Err(e) => {
            tracing::error!("Failed to delete '{}': {}", word, e);
            AppEvent::Status(format!("Could not delete '{word}': {e}"))
        }
    }
}

pub fn handle_list(shell: &mut Shell) -> AppEvent {
    AppEvent::ShowWordList(shell.book.list())
}

pub fn handle_reload(shell: &mut Shell) -> AppEvent {
    match shell.book.reload() {
        Ok(count) => AppEvent::Status(format!("Reloaded {count} saved words")),
        Err(e) => {
            tracing::error!("Reload failed: {}", e);
            AppEvent::Status(format!("Could not reload saved words: {e}"))
        }
    }
}
