/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translation strings for a single headword.
    /// A page with no matches is an empty list, not an error.
    async fn translate(&self, word: &str) -> Result<Vec<String>, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    /// Short tag used to prefix error messages
    pub name: String,
    /// Source and target language, e.g. `ensv`
    pub language_pair: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),
}
