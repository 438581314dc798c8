use crate::llm::prompts;

/// Fill the commit-message template with the staged diff.
///
/// The diff is inserted verbatim; nothing in it is interpreted, even text
/// that happens to look like the placeholder.
pub fn commit_message_prompt(diff: &str) -> String {
    prompts::COMMIT_MESSAGE.replace(prompts::STAGED_CHANGES_PLACEHOLDER, diff)
}
