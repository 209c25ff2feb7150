use std::fmt::Write as _;
use std::io::Write as _;

use glosa_types::{AppEvent, LookupOutcome, Origin, PracticeView, WordInfo, WordListItem};
use kanal::AsyncReceiver;
use serde_json::json;

use crate::state::OutputFormat;

const PROMPT: &str = "glosa> ";

/// Print results as they arrive; returns on `Shutdown` or when the app side hangs up
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    format: OutputFormat,
    interactive: bool,
) -> anyhow::Result<()> {
    if interactive && format == OutputFormat::Text {
        println!("Type a word to look it up, 'help' for commands.");
        prompt();
    }

    while let Ok(event) = app_to_ui_rx.recv().await {
        if matches!(event, AppEvent::Shutdown) {
            tracing::debug!("UI loop stopping");
            break;
        }

        if let Some(output) = render(&event, format) {
            println!("{output}");
        }
        if interactive && format == OutputFormat::Text {
            prompt();
        }
    }

    Ok(())
}

fn prompt() {
    print!("{PROMPT}");
    let _ = std::io::stdout().flush();
}

pub fn render(event: &AppEvent, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => render_text(event),
        OutputFormat::Json => render_json(event),
    }
}

fn render_json(event: &AppEvent) -> Option<String> {
    let value = match event {
        AppEvent::ShowOutcome(outcome) => serde_json::to_value(outcome),
        AppEvent::ShowWordList(items) => Ok(json!({ "count": items.len(), "words": items })),
        AppEvent::ShowPractice(view) => serde_json::to_value(view),
        AppEvent::Status(message) => Ok(json!({ "status": message })),
        AppEvent::Command(_) | AppEvent::Shutdown => return None,
    };

    match value {
        Ok(value) => Some(value.to_string()),
        Err(e) => {
            tracing::error!("Failed to serialize output: {}", e);
            None
        }
    }
}

fn render_text(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowOutcome(outcome) => Some(render_outcome(outcome)),
        AppEvent::ShowWordList(items) => Some(render_word_list(items)),
        AppEvent::ShowPractice(view) => Some(render_practice(view)),
        AppEvent::Status(message) => Some(message.clone()),
        AppEvent::Command(_) | AppEvent::Shutdown => None,
    }
}

pub fn render_outcome(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Found(info) => render_word(info),
        LookupOutcome::NotFound(not_found) => {
            if not_found.suggestions.is_empty() {
                format!("No entry for '{}'", not_found.requested_word)
            } else {
                format!(
                    "No entry for '{}'. Did you mean: {}",
                    not_found.requested_word,
                    not_found.suggestions.join(", ")
                )
            }
        }
        LookupOutcome::ApiError(e) => format!("Error: {}", e.message),
    }
}

fn render_word(info: &WordInfo) -> String {
    let mut out = String::new();

    let origin = match &info.origin {
        Origin::FromNetwork => "not saved".to_string(),
        Origin::FromStore { time_added } => format!("saved {}", time_added.format("%Y-%m-%d %H:%M")),
    };
    let _ = writeln!(out, "{} ({}, {})", info.word, info.source, origin);

    for (i, def) in info.definitions.iter().enumerate() {
        if def.word_type.is_empty() {
            let _ = writeln!(out, "  {}. {}", i + 1, def.definition);
        } else {
            let _ = writeln!(out, "  {}. [{}] {}", i + 1, def.word_type, def.definition);
        }
        if let Some(example) = &def.example {
            let _ = writeln!(out, "       \"{example}\"");
        }
        if !def.synonyms.is_empty() {
            let _ = writeln!(out, "       synonyms: {}", def.synonyms.join(", "));
        }
    }

    if info.translations.is_empty() {
        out.push_str("  translations: none");
    } else {
        let _ = write!(out, "  translations: {}", info.translations.join(", "));
    }
    out
}

fn render_word_list(items: &[WordListItem]) -> String {
    if items.is_empty() {
        return "No saved words".to_string();
    }

    let mut out = format!("{} saved words", items.len());
    for item in items {
        let _ = write!(
            out,
            "\n  {:<24} {}",
            item.word,
            item.time_added.format("%Y-%m-%d %H:%M")
        );
    }
    out
}

fn render_practice(view: &PracticeView) -> String {
    match view {
        PracticeView::Question { word } => {
            format!("Do you know '{word}'? Type 'show' to reveal, 'stop' to finish.")
        }
        PracticeView::Answer { entry } => {
            format!("{}\nDid you know it? 'correct' or 'wrong'", render_word(entry))
        }
        PracticeView::Summary { stats } => {
            if stats.is_empty() {
                return "Practice finished, nothing graded".to_string();
            }
            let mut out = String::from("Practice finished:");
            for stat in stats {
                let _ = write!(
                    out,
                    "\n  {:<24} {}/{} correct",
                    stat.word, stat.num_correct, stat.num_seen
                );
            }
            out
        }
        PracticeView::Empty => "No saved words to practice".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use glosa_types::{ApiError, Definition, DefinitionSource, NotFound, PracticeStat};

    use super::*;

    fn manage() -> WordInfo {
        WordInfo::from_network(
            "manage",
            vec![Definition {
                word_type: "verb".into(),
                definition: "to have charge of".into(),
                example: Some("manage a store".into()),
                synonyms: vec!["run".into(), "direct".into()],
            }],
            vec!["leda".into(), "sköta".into()],
            DefinitionSource::Thesaurus,
        )
    }

    #[test]
    fn test_render_found() {
        let text = render_outcome(&LookupOutcome::Found(manage()));
        assert!(text.starts_with("manage (thesaurus, not saved)"));
        assert!(text.contains("1. [verb] to have charge of"));
        assert!(text.contains("\"manage a store\""));
        assert!(text.contains("synonyms: run, direct"));
        assert!(text.ends_with("translations: leda, sköta"));

        let saved = manage().into_stored(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
        assert!(render_outcome(&LookupOutcome::Found(saved)).starts_with("manage (thesaurus, saved 2024-03-01 09:30)"));
    }

    #[test]
    fn test_render_not_found_and_error() {
        let outcome = LookupOutcome::NotFound(NotFound::new("managre", vec!["manage".into(), "manager".into()]));
        assert_eq!(render_outcome(&outcome), "No entry for 'managre'. Did you mean: manage, manager");

        let outcome = LookupOutcome::ApiError(ApiError::tagged("thesaurus", "(503) Service Unavailable"));
        assert_eq!(render_outcome(&outcome), "Error: [thesaurus] (503) Service Unavailable");
    }

    #[test]
    fn test_render_json_shapes() {
        let event = AppEvent::ShowOutcome(LookupOutcome::Found(manage()));
        let value: serde_json::Value = serde_json::from_str(&render(&event, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["kind"], "found");
        assert_eq!(value["type"], "net");
        assert_eq!(value["source"], "thesaurus");

        let event = AppEvent::ShowPractice(PracticeView::Summary {
            stats: vec![PracticeStat {
                word: "run".into(),
                num_seen: 2,
                num_correct: 1,
            }],
        });
        let value: serde_json::Value = serde_json::from_str(&render(&event, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["view"], "summary");
        assert_eq!(value["stats"][0]["numCorrect"], 1);

        assert_eq!(render(&AppEvent::Shutdown, OutputFormat::Json), None);
    }

    #[test]
    fn test_render_word_list() {
        assert_eq!(render(&AppEvent::ShowWordList(vec![]), OutputFormat::Text).unwrap(), "No saved words");

        let items = vec![WordListItem {
            word: "run".into(),
            time_added: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }];
        let text = render(&AppEvent::ShowWordList(items), OutputFormat::Text).unwrap();
        assert!(text.starts_with("1 saved words"));
        assert!(text.contains("run"));
    }
}
