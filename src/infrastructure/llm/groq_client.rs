use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::TextCompletionClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const COMPARE_FALLBACK_EMPTY: &str = "No response from Groq.";
const COMPARE_FALLBACK_ERROR: &str = "Error processing text with Groq.";
const QUERY_FALLBACK_EMPTY: &str = "No response";
const QUERY_FALLBACK_ERROR: &str = "Error processing query with Groq.";

/// Adapter for the Groq chat-completions API (OpenAI-compatible). Failures
/// never escape this adapter: transport errors and empty responses both
/// collapse into literal fallback strings.
pub struct GroqCompletionClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GroqCompletionClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn chat(&self, content: &str) -> Result<Option<String>, GroqRequestError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": content
                }
            ]
        });

        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GroqRequestError::Status { status, body });
        }

        let completion: ChatCompletion = response.json().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty());

        Ok(content)
    }
}

#[derive(Debug, thiserror::Error)]
enum GroqRequestError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Groq returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl TextCompletionClient for GroqCompletionClient {
    #[tracing::instrument(skip(self, document_text), fields(text_chars = document_text.len()))]
    async fn compare_document_text(&self, document_text: &str) -> String {
        let prompt = format!(
            "Compare the following document with the new laws and highlight \
             what has been added and what has been removed:\n\n{document_text}"
        );

        match self.chat(&prompt).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::warn!("Groq comparison returned no choices");
                COMPARE_FALLBACK_EMPTY.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "Groq comparison request failed");
                COMPARE_FALLBACK_ERROR.to_string()
            }
        }
    }

    #[tracing::instrument(skip(self, query))]
    async fn answer_query(&self, query: &str) -> String {
        match self.chat(query).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::warn!("Groq query returned no choices");
                QUERY_FALLBACK_EMPTY.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "Groq query request failed");
                QUERY_FALLBACK_ERROR.to_string()
            }
        }
    }
}
