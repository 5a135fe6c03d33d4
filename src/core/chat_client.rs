use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::{chat_completions_url, ChatMessage, ChatRequest, ChatResponse};
use crate::core::config::Config;
use crate::core::message::Message;

/// Source of replies for a prompt.
///
/// Failures are folded into the returned text so callers can treat every
/// outcome as a reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> String;
}

pub struct ChatClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl ChatClient {
    pub fn new(config: &Config, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: chat_completions_url(config.base_url()),
            api_key,
            model: config.default_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Use `model` instead of the configured default when given.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::from(&Message::user(prompt))],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn complete(&self, prompt: &str) -> String {
        let request = self.build_request(prompt);
        debug!(url = %self.url, model = %self.model, "sending chat completion request");

        let response = match self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "chat completion request failed");
                return format!("Connection error: {e}");
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, %status, "failed to read response body");
                return format!("Connection error: {e}");
            }
        };

        if !status.is_success() {
            warn!(%status, "chat completion returned an error status");
            return format_api_error(&body);
        }

        reply_from_body(&body)
    }
}

/// Extract `choices[0].message.content` from a successful response body.
pub fn reply_from_body(body: &str) -> String {
    match serde_json::from_str::<ChatResponse>(body) {
        Ok(response) => match response.first_content() {
            Some(content) => content.to_string(),
            None => "Error: response contained no message content".to_string(),
        },
        Err(e) => format!("Error: {e}"),
    }
}

fn extract_error_summary(value: &serde_json::Value) -> Option<String> {
    let summary = value
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .or_else(|| {
            value.get("error").and_then(|v| match v {
                serde_json::Value::String(s) => Some(s.to_string()),
                _ => None,
            })
        })
        .or_else(|| {
            value
                .get("message")
                .and_then(|v| v.as_str().map(str::to_owned))
        });

    summary.map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Render an error body as a reply. JSON and XML payloads are fenced with a
/// language tag so `-c` saves them like any other code block.
pub fn format_api_error(error_text: &str) -> String {
    let trimmed = error_text.trim();

    if trimmed.is_empty() {
        return "API Error:\n```\n<empty>\n```".to_string();
    }

    if let Ok(json_value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Ok(pretty_json) = serde_json::to_string_pretty(&json_value) {
            if let Some(summary) = extract_error_summary(&json_value) {
                if !summary.is_empty() {
                    return format!("API Error: {}\n```json\n{}\n```", summary, pretty_json);
                }
            }
            return format!("API Error:\n```json\n{}\n```", pretty_json);
        }
    }

    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        format!("API Error:\n```xml\n{}\n```", trimmed)
    } else {
        format!("API Error:\n```\n{}\n```", trimmed)
    }
}
