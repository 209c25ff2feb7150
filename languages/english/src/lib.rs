pub mod markup;
pub mod merriam_webster;
pub mod translator;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use glosa_config::Config;
use glosa_core::{DefinitionResolver, Orchestrator};
use glosa_types::DefinitionSource;

pub use merriam_webster::MerriamWebsterClient;
pub use translator::WordReferenceTranslator;

/// Wire the thesaurus, dictionary and translation providers from config
pub fn build_orchestrator(config: &Config) -> Result<Orchestrator, reqwest::Error> {
    let client = reqwest::Client::builder()
        .user_agent(config.network.user_agent.clone())
        .build()?;

    let thesaurus = MerriamWebsterClient::new(
        DefinitionSource::Thesaurus,
        &config.dictionary.thesaurus,
        client.clone(),
    );
    let dictionary = MerriamWebsterClient::new(
        DefinitionSource::Dictionary,
        &config.dictionary.dictionary,
        client.clone(),
    );
    let translator = WordReferenceTranslator::new(&config.translator, client);

    let resolver = DefinitionResolver::new(Arc::new(thesaurus), Arc::new(dictionary));
    Ok(Orchestrator::new(resolver, Arc::new(translator)))
}
