use crate::error::CommitError;
use crate::llm::CompletionClient;
use crate::llm::anthropic::AnthropicClient;
use log::debug;

/// Build the completion client for a `commit` run.
pub fn build_llm_client(
    model: &str,
    api_base_url: &str,
) -> Result<Box<dyn CompletionClient>, CommitError> {
    debug!("Using AnthropicClient with model: {model}");

    let client = AnthropicClient::new(model.to_string(), api_base_url.to_string())?;
    Ok(Box::new(client))
}
