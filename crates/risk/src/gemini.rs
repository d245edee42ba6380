//! Gemini generateContent client.
//!
//! Thin REST wrapper over the generative language API. The provider sits
//! behind the [`GenerativeModel`] trait so the classifier can be exercised
//! with canned or failing models in tests.

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use syntria_common::RiskConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// One part of a multimodal request: plain text or inline binary content.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 payload, forwarded exactly as the client uploaded it
    pub data: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, None when the response
    /// carried no usable text.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let joined: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if joined.is_empty() {
            None
        } else {
            Some(joined.join("\n"))
        }
    }
}

/// A text/multimodal completion provider.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one multimodal request and await the full response text.
    async fn generate(&self, parts: Vec<Part>) -> anyhow::Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, config: &RiskConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build Gemini HTTP client")?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint, used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        // The key travels in the query string; keep this URL out of logs.
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, parts: Vec<Part>) -> anyhow::Result<String> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent { parts }],
        };
        let endpoint = self.endpoint();

        let response = match self.http.post(&endpoint).json(&request).send().await {
            Ok(response) => response,
            // One bounded retry on transport faults; anything else is final.
            Err(e) if e.is_timeout() || e.is_connect() => {
                tracing::warn!(model = %self.model, error = %e, "Gemini request failed in transport, retrying once");
                self.http
                    .post(&endpoint)
                    .json(&request)
                    .send()
                    .await
                    .context("Gemini request failed after retry")?
            }
            Err(e) => return Err(anyhow::Error::new(e).context("Gemini request failed")),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Gemini returned {status}: {}",
                body.chars().take(300).collect::<String>()
            );
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;

        body.text()
            .ok_or_else(|| anyhow::anyhow!("Gemini response contained no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Risk: HIGH"}, {"text": "- reason"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().unwrap(), "Risk: HIGH\n- reason");
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn inline_data_serializes_camel_case() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "application/pdf".to_string(),
                data: "AAAA".to_string(),
            },
        };
        let json = serde_json::to_string(&part).unwrap();
        assert_eq!(
            json,
            r#"{"inlineData":{"mimeType":"application/pdf","data":"AAAA"}}"#
        );
    }
}
