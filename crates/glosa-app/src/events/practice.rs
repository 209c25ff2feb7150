use glosa_core::PracticeSession;
use glosa_types::{AppEvent, Answer, PracticeView};

use super::Shell;

const NO_SESSION: &str = "No practice session, type 'practice' to start one";

pub fn handle_practice(shell: &mut Shell) -> AppEvent {
    let session = PracticeSession::new(shell.book.snapshot());
    if session.is_finished() {
        return AppEvent::ShowPractice(PracticeView::Empty);
    }

    tracing::info!("Practice started over {} words", shell.book.len());
    let view = session.view();
    shell.practice = Some(session);
    AppEvent::ShowPractice(view)
}

pub fn handle_show(shell: &mut Shell) -> AppEvent {
    let Some(session) = shell.practice.as_mut() else {
        return AppEvent::Status(NO_SESSION.into());
    };

    match session.reveal() {
        Some(entry) => AppEvent::ShowPractice(PracticeView::Answer { entry }),
        None => AppEvent::Status("Already shown, grade it with 'correct' or 'wrong'".into()),
    }
}

pub fn handle_grade(shell: &mut Shell, answer: Answer) -> AppEvent {
    let Some(session) = shell.practice.as_mut() else {
        return AppEvent::Status(NO_SESSION.into());
    };

    if !session.grade(answer) {
        return AppEvent::Status("Reveal the entry with 'show' first".into());
    }
    AppEvent::ShowPractice(session.view())
}

pub fn handle_stop(shell: &mut Shell) -> AppEvent {
    match shell.practice.take() {
        Some(session) => AppEvent::ShowPractice(PracticeView::Summary {
            stats: session.summary(),
        }),
        None => AppEvent::Status(NO_SESSION.into()),
    }
}
