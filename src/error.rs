use thiserror::Error;

/// Every way a `commit` run can stop short of producing a commit.
///
/// None of these are retried; `main` prints the message and exits non-zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    #[error(
        "No API key found. Please run `ai-commit configure` first or set the ANTHROPIC_API_KEY environment variable."
    )]
    CredentialMissing,

    #[error("Error getting git diff: {0}")]
    VcsInvocation(String),

    #[error("No staged changes found.")]
    EmptyDiff,

    #[error("API error: {0}")]
    Completion(String),

    #[error("Failed to parse commit message from response")]
    Extraction,

    #[error("Generated commit message is empty")]
    EmptyMessage,

    #[error("Error executing git commit: {0}")]
    VcsCommit(String),
}
