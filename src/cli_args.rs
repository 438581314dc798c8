use clap::{ArgAction, Parser, Subcommand};

use crate::llm::anthropic::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "ai-commit",
    version,
    about = "AI-powered conventional commit message generator"
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, e.g. `ai-commit commit --preview`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save an Anthropic API key for later runs
    Configure {
        /// Anthropic API key; prompted for (hidden) when omitted
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Generate a commit message for the staged changes and commit with it
    Commit {
        /// Preview the commit message without committing
        #[arg(long)]
        preview: bool,

        /// Model to request
        #[arg(long, env = "AI_COMMIT_MODEL", default_value = DEFAULT_MODEL)]
        model: String,

        /// Base URL of the Anthropic API
        #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
        api_base_url: String,
    },
}
