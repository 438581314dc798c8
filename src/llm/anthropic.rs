use super::CompletionClient;
use crate::config::Credential;
use crate::error::CommitError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.0;

/// Minimal request/response structs for the Anthropic Messages API.
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Anthropic-based implementation of CompletionClient.
pub struct AnthropicClient {
    client: Client,
    model: String,
    api_base_url: String,
}

impl AnthropicClient {
    pub fn new(model: String, api_base_url: String) -> Result<Self, CommitError> {
        // No explicit timeout: the transport default applies.
        let client = Client::builder()
            .build()
            .map_err(|e| CommitError::Completion(format!("failed to build HTTP client: {e}")))?;

        Ok(AnthropicClient {
            client,
            model,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn messages_url(&self) -> String {
        if self.api_base_url.ends_with("/v1") {
            format!("{}/messages", self.api_base_url)
        } else {
            format!("{}/v1/messages", self.api_base_url)
        }
    }

    fn request<'a>(&'a self, prompt: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        }
    }
}

impl CompletionClient for AnthropicClient {
    fn complete(&self, prompt: &str, credential: &Credential) -> Result<String, CommitError> {
        let url = self.messages_url();
        let req = self.request(prompt);

        log::info!("Calling Anthropic model {:?} at {}", self.model, url);
        log::trace!("Prompt:\n{}", truncate(prompt, 3000));

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", credential.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&req)
            .send()
            .map_err(|e| CommitError::Completion(format!("failed to send request: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            log::debug!("Anthropic returned HTTP {}", status.as_u16());
            return Err(CommitError::Completion(format!(
                "HTTP {} - {}",
                status.as_u16(),
                text
            )));
        }

        let body: MessagesResponse = resp
            .json()
            .map_err(|e| CommitError::Completion(format!("failed to parse response: {e}")))?;

        if let Some(usage) = &body.usage {
            log::debug!(
                "Token usage: input={}, output={}",
                usage.input_tokens,
                usage.output_tokens
            );
        }

        let text = first_text(body)?;
        log::trace!("Raw response:\n{text}");
        Ok(text)
    }
}

/// The first text segment of a response.
fn first_text(body: MessagesResponse) -> Result<String, CommitError> {
    body.content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| CommitError::Completion("no text content in response".to_string()))
}

/// Truncate long strings for debug logging.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...\n[truncated {} chars]", &s[..end], s.len() - end)
}
