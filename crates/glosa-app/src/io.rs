use glosa_types::{AppEvent, Answer, Command};
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

pub const HELP: &str = "\
Commands:
  <word> | lookup <word>   look up a word (saved words never hit the network)
  add [word]               save the displayed word
  delete [word]            remove a saved word
  list                     saved words, newest first
  reload                   reread saved words from the database
  practice                 start practicing saved words
  show                     reveal the current practice word
  correct | wrong          grade the revealed word
  stop                     end practice and print the summary
  help                     this text
  quit                     exit";

/// Parse one line of shell input. Blank lines yield `None`; anything that is not a
/// command keyword is looked up as a word.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match (head.to_lowercase().as_str(), arg) {
        ("lookup" | "l", Some(word)) => Command::Lookup(word),
        ("add" | "a", word) => Command::Add(word),
        ("delete" | "del" | "d", word) => Command::Delete(word),
        ("list" | "ls", None) => Command::List,
        ("practice" | "p", None) => Command::Practice,
        ("show" | "s", None) => Command::Show,
        ("correct" | "c" | "y", None) => Command::Grade(Answer::Correct),
        ("wrong" | "w" | "n", None) => Command::Grade(Answer::Wrong),
        ("stop", None) => Command::StopPractice,
        ("reload", None) => Command::Reload,
        ("help" | "?", None) => Command::Help,
        ("quit" | "exit" | "q", None) => Command::Quit,
        _ => Command::Lookup(line.to_string()),
    };
    Some(command)
}

/// Read commands from stdin until EOF or cancellation. EOF quits the app.
pub async fn stdin_io(cancel: CancellationToken, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::debug!("stdin reader stopping");
                return Ok(());
            }
        };

        let Some(line) = line else {
            tracing::debug!("stdin closed");
            event_tx.send(AppEvent::Command(Command::Quit)).await?;
            return Ok(());
        };

        if let Some(command) = parse_command(&line) {
            let quit = command == Command::Quit;
            event_tx.send(AppEvent::Command(command)).await?;
            if quit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_word_is_lookup() {
        assert_eq!(parse_command("  manage \n"), Some(Command::Lookup("manage".into())));
        assert_eq!(parse_command("ice cream"), Some(Command::Lookup("ice cream".into())));
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("lookup run"), Some(Command::Lookup("run".into())));
        assert_eq!(parse_command("add"), Some(Command::Add(None)));
        assert_eq!(parse_command("add  ice cream "), Some(Command::Add(Some("ice cream".into()))));
        assert_eq!(parse_command("DELETE run"), Some(Command::Delete(Some("run".into()))));
        assert_eq!(parse_command("list"), Some(Command::List));
        assert_eq!(parse_command("correct"), Some(Command::Grade(Answer::Correct)));
        assert_eq!(parse_command("wrong"), Some(Command::Grade(Answer::Wrong)));
        assert_eq!(parse_command("stop"), Some(Command::StopPractice));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_keyword_words_need_lookup_prefix() {
        // A bare `lookup` has no argument, so it is looked up itself
        assert_eq!(parse_command("lookup"), Some(Command::Lookup("lookup".into())));
        // Argument-free keywords with trailing text are words to look up
        assert_eq!(parse_command("list of things"), Some(Command::Lookup("list of things".into())));
        assert_eq!(parse_command("lookup list"), Some(Command::Lookup("list".into())));
    }
}
