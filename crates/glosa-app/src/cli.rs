use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glosa", about = "Look up, save and practice English words", version)]
pub struct Cli {
    /// Load a named profile from the config dir
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Render results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Look up a word
    Lookup { word: String },

    /// Look up a word and save it
    Add { word: String },

    /// Remove a saved word
    Delete { word: String },

    /// List saved words, newest first
    List,

    /// Start an interactive practice session
    Practice,

    /// Manage config profiles
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ProfileCommand {
    /// Write the main profile from the current environment
    Init,
}
