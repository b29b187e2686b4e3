use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{DocumentAnalyzer, DocumentAnalyzerError};

/// Instruction sent alongside every contract upload. The analysis scope is
/// fixed; callers cannot vary it.
const ANALYSIS_INSTRUCTION: &str = "Review this contract and identify risk clauses, \
     compliance issues, and safer alternative wording for any problematic terms.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Adapter for the Gemini `generateContent` API. The PDF travels inline as
/// base64; one call per request, no retries.
pub struct GeminiDocumentClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiDocumentClient {
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
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Gemini renders emphasis as markdown `*` markers; the relay returns plain
/// text, so they are removed wholesale.
fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

#[async_trait]
impl DocumentAnalyzer for GeminiDocumentClient {
    #[tracing::instrument(skip(self, data), fields(pdf_bytes = data.len()))]
    async fn analyze(&self, data: &[u8]) -> Result<String, DocumentAnalyzerError> {
        let encoded = general_purpose::STANDARD.encode(data);

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "inline_data": {
                                "mime_type": "application/pdf",
                                "data": encoded
                            }
                        },
                        {
                            "text": ANALYSIS_INSTRUCTION
                        }
                    ]
                }
            ]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DocumentAnalyzerError::AnalysisFailed(format!("Gemini request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DocumentAnalyzerError::AnalysisFailed(format!(
                "Gemini returned {status}: {text}"
            )));
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            DocumentAnalyzerError::InvalidResponse(format!("Gemini JSON parse error: {e}"))
        })?;

        let analysis: String = completion
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if analysis.trim().is_empty() {
            return Err(DocumentAnalyzerError::InvalidResponse(
                "empty analysis from Gemini".to_string(),
            ));
        }

        Ok(strip_emphasis(&analysis))
    }
}
