//! Gemini API client.
//!
//! One HTTPS request per generation: the prompt goes out as a
//! `generateContent` call, the first candidate's text comes back. No retry,
//! no backoff; every failure is fatal for the run.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeminiError;

/// Default model, matching Gemini's free tier.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Read the API key from the environment (populated from `.env` at startup).
pub fn api_key_from_env() -> Result<String, GeminiError> {
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(GeminiError::MissingApiKey),
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content>,
    #[serde(rename = "safetySettings")]
    safety_settings: &'a [SafetySetting],
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

// Commit diffs routinely mention things the default filters dislike
// (security fixes, test payloads), so all categories are unblocked.
const SAFETY_SETTINGS: [SafetySetting; 4] = [
    SafetySetting {
        category: "HARM_CATEGORY_HARASSMENT",
        threshold: "BLOCK_NONE",
    },
    SafetySetting {
        category: "HARM_CATEGORY_HATE_SPEECH",
        threshold: "BLOCK_NONE",
    },
    SafetySetting {
        category: "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        threshold: "BLOCK_NONE",
    },
    SafetySetting {
        category: "HARM_CATEGORY_DANGEROUS_CONTENT",
        threshold: "BLOCK_NONE",
    },
];

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL. Used by tests to point at a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the prompt and return the generated text, trimmed.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            safety_settings: &SAFETY_SETTINGS,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending generation request");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::Request)?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(GeminiError::AuthRejected {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::MalformedResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(GeminiError::EmptyResponse)?;

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        debug!(response_chars = text.len(), "received generation response");
        Ok(text)
    }
}
