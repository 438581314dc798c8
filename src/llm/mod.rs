pub mod anthropic;
mod extract;
mod prompt_builder;
mod prompts;

pub use extract::extract_commit_message;
pub use prompt_builder::commit_message_prompt;

use crate::config::Credential;
use crate::error::CommitError;

/// Trait for talking to a hosted text-completion model.
pub trait CompletionClient {
    /// Send `prompt` as a single user message and return the model's text.
    ///
    /// Every failure (auth, rate limit, transport, bad body) is a
    /// [`CommitError::Completion`]. Nothing is retried.
    fn complete(&self, prompt: &str, credential: &Credential) -> Result<String, CommitError>;
}
