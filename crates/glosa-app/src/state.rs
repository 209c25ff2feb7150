use glosa_config::Config;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct AppState {
    pub config: Config,
    pub output: OutputFormat,
    /// Print a prompt between results
    pub interactive: bool,
}

impl AppState {
    pub fn new(config: Config, output: OutputFormat) -> Self {
        Self {
            config,
            output,
            interactive: atty::is(atty::Stream::Stdin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_keeps_loaded_config() {
        let mut config = Config::default();
        config.translator.dictionary = "enfr".into();

        let state = AppState::new(config, OutputFormat::Json);
        assert_eq!(state.config.translator.dictionary, "enfr");
        assert_eq!(state.output, OutputFormat::Json);
    }
}
