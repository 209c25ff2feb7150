use glosa_types::{ApiError, Definition, DefinitionSource, NotFound};

/// One upstream definition provider
#[async_trait::async_trait]
pub trait SourceClient: Send + Sync {
    /// Which provider this client talks to
    fn source(&self) -> DefinitionSource;

    /// Exact-match definitions for `word`, or the provider's suggestions.
    /// Errors carry a message tagged with the provider.
    async fn fetch_definitions(&self, word: &str) -> Result<SourceResult, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceResult {
    Definitions(Vec<Definition>),
    NotFound(NotFound),
}
