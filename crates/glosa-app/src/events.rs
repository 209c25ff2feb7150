use kanal::{AsyncReceiver, AsyncSender};
use glosa_core::{PracticeSession, WordBook};
use glosa_types::{AppEvent, Command};

pub mod lookup;
pub mod practice;
pub mod words;

use lookup::handle_lookup;
use practice::{handle_grade, handle_practice, handle_show, handle_stop};
use words::{handle_add, handle_delete, handle_list, handle_reload};

use crate::io::HELP;

/// Everything a command can touch: saved words, the word on screen and an optional practice run
pub struct Shell {
    book: WordBook,
    /// Normalized word of the last lookup, target of a bare `add` / `delete`
    current: Option<String>,
    practice: Option<PracticeSession>,
}

impl Shell {
    pub fn new(book: WordBook) -> Self {
        Self {
            book,
            current: None,
            practice: None,
        }
    }

    pub fn book(&self) -> &WordBook {
        &self.book
    }

    /// Run one command; every command answers with exactly one event
    pub async fn handle(&mut self, command: Command) -> AppEvent {
        tracing::debug!("Handling {:?}", command);
        match command {
            Command::Lookup(word) => handle_lookup(self, &word).await,
            Command::Add(word) => handle_add(self, word),
            Command::Delete(word) => handle_delete(self, word),
            Command::List => handle_list(self),
            Command::Reload => handle_reload(self),
            Command::Practice => handle_practice(self),
            Command::Show => handle_show(self),
            Command::Grade(answer) => handle_grade(self, answer),
            Command::StopPractice => handle_stop(self),
            Command::Help => AppEvent::Status(HELP.to_string()),
            Command::Quit => AppEvent::Shutdown,
        }
    }

    /// Explicit word, or the one currently displayed
    fn target(&self, word: Option<String>) -> Option<String> {
        match word {
            Some(word) => Some(self.book.normalize(&word)).filter(|w| !w.is_empty()),
            None => self.current.clone(),
        }
    }
}

/// App's main loop
pub async fn event_loop(
    mut shell: Shell,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Event loop started with {} saved words", shell.book().len());
    loop {
        let event = input_rx.recv().await?;

        let AppEvent::Command(command) = event else {
            tracing::debug!("Ignoring non-command event {:?}", std::mem::discriminant(&event));
            continue;
        };

        let reply = shell.handle(command).await;
        let done = matches!(reply, AppEvent::Shutdown);
        app_to_ui_tx.send(reply).await?;

        if done {
            tracing::info!("Event loop stopping");
            return Ok(());
        }
    }
}
