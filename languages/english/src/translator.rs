use async_trait::async_trait;
use glosa_config::translator::TranslatorConfig;
use glosa_translator::{ProviderMetadata, TranslateError, Translator};
use scraper::{ElementRef, Html, Selector};

/// Scrapes the WordReference translation table for a language pair
#[derive(Clone)]
pub struct WordReferenceTranslator {
    client: reqwest::Client,
    base_url: String,
    dictionary: String,
}

impl WordReferenceTranslator {
    pub fn new(config: &TranslatorConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            dictionary: config.dictionary.clone(),
        }
    }

    fn request_url(&self, word: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.dictionary,
            urlencoding::encode(word)
        )
    }
}

fn selector(css: &str) -> Result<Selector, TranslateError> {
    Selector::parse(css).map_err(|e| TranslateError::Selector(format!("{css}: {e:?}")))
}

/// First non-blank text node directly under the cell
fn leading_text(cell: ElementRef) -> Option<String> {
    cell.children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Target-language words from the translation table; an empty page yields an empty list.
/// Cells holding a phrase marker (`span.ph`) are skipped.
pub fn parse_translations(html: &str) -> Result<Vec<String>, TranslateError> {
    let document = Html::parse_document(html);
    let cells = selector("table.WRD td.ToWrd")?;
    let phrase = selector("span.ph")?;

    let mut translations: Vec<String> = Vec::new();
    for cell in document.select(&cells) {
        if cell.select(&phrase).next().is_some() {
            continue;
        }
        if let Some(text) = leading_text(cell)
            && !translations.contains(&text)
        {
            translations.push(text);
        }
    }

    Ok(translations)
}

#[async_trait]
impl Translator for WordReferenceTranslator {
    async fn translate(&self, word: &str) -> Result<Vec<String>, TranslateError> {
        tracing::debug!("Fetching translations for '{}'", word);

        let response = self.client.get(self.request_url(word)).send().await?;

        // Missing words come back as error pages; whatever table they hold still counts
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("WordReference answered {} for '{}'", status, word);
        }

        let html = response.text().await?;
        let translations = parse_translations(&html)?;
        tracing::debug!("{} translations for '{}'", translations.len(), word);
        Ok(translations)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "wordreference".to_string(),
            language_pair: self.dictionary.clone(),
        }
    }
}
