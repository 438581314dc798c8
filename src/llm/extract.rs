use crate::error::CommitError;
use crate::llm::prompts::{CLOSE_TAG, OPEN_TAG};

/// Pull the commit message out of the first `<commit_message>` region.
///
/// Anything the model wrote outside the tags is ignored. The region may span
/// several lines; its content is trimmed.
pub fn extract_commit_message(response: &str) -> Result<String, CommitError> {
    let start = response.find(OPEN_TAG).ok_or(CommitError::Extraction)? + OPEN_TAG.len();
    let len = response[start..]
        .find(CLOSE_TAG)
        .ok_or(CommitError::Extraction)?;

    let message = response[start..start + len].trim();
    if message.is_empty() {
        return Err(CommitError::EmptyMessage);
    }

    Ok(message.to_string())
}
