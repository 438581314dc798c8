use crate::config::Credential;
use crate::error::CommitError;
use crate::git::Vcs;
use crate::llm::{self, CompletionClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// What happened to the generated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Shown to the user only.
    Previewed(String),
    /// Passed to `git commit`.
    Committed(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Previewed(m) | Outcome::Committed(m) => m,
        }
    }
}

/// Staged diff → prompt → completion → extracted message → commit (or preview).
///
/// Stops at the first failure. `git commit` only runs once a non-empty message
/// has been extracted, and never in preview mode.
pub fn run_commit(
    vcs: &dyn Vcs,
    llm: &dyn CompletionClient,
    credential: &Credential,
    preview: bool,
) -> Result<Outcome, CommitError> {
    let message = generate_message(vcs, llm, credential)?;

    if preview {
        return Ok(Outcome::Previewed(message));
    }

    vcs.commit(&message)?;
    Ok(Outcome::Committed(message))
}

/// Everything up to (not including) applying the message.
pub fn generate_message(
    vcs: &dyn Vcs,
    llm: &dyn CompletionClient,
    credential: &Credential,
) -> Result<String, CommitError> {
    let diff = vcs.staged_diff()?;
    if diff.trim().is_empty() {
        return Err(CommitError::EmptyDiff);
    }

    let prompt = llm::commit_message_prompt(&diff);

    let spinner = spinner("Generating commit message");
    let response = llm.complete(&prompt, credential);
    spinner.finish_and_clear();

    llm::extract_commit_message(&response?)
}

fn spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
