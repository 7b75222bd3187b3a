use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::engine::prompt_builder;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Falls back to the GOOGLE_API_KEY environment variable when empty.
    pub api_key: String,
    pub extract_model: String,
    pub chat_model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            extract_model: "gemini-1.5-pro".into(),
            chat_model: "gemini-1.5-flash".into(),
        }
    }
}

impl GeminiConfig {
    fn resolved_key(&self) -> Result<String> {
        let configured = self.api_key.trim();
        if !configured.is_empty() {
            return Ok(configured.to_string());
        }
        std::env::var("GOOGLE_API_KEY").map_err(|_| {
            anyhow!("no API key configured; set one in Settings or export GOOGLE_API_KEY")
        })
    }
}

/* =========================
   Wire types
   ========================= */

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
struct InlineData {
    mime_type: String,
    /// Base64-encoded image bytes.
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/* =========================
   Client
   ========================= */

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Send the bill photo to the vision model and return its plain-text
    /// "item  price" rendering.
    pub fn extract_bill_text(&self, image_bytes: &[u8], mime_type: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: STANDARD.encode(image_bytes),
                        }),
                    },
                    Part {
                        text: Some(prompt_builder::extraction_prompt().to_string()),
                        inline_data: None,
                    },
                ],
            }],
        };

        self.generate(&self.config.extract_model, &request)
    }

    /// Forward a Bill Q&A prompt to the text model.
    pub fn answer(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
        };

        self.generate(&self.config.chat_model, &request)
    }

    fn generate(&self, model: &str, request: &GenerateContentRequest) -> Result<String> {
        let key = self.config.resolved_key()?;
        let url = format!("{API_BASE}/models/{model}:generateContent?key={key}");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .context("request to the Gemini API failed")?
            .error_for_status()
            .context("the Gemini API rejected the request")?
            .json::<GenerateContentResponse>()
            .context("malformed response from the Gemini API")?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .context("the model returned no candidates")?;

        candidate
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .find_map(|part| part.text)
            .context("the model returned no text")
    }

    pub fn test_connection(&self) -> Result<String> {
        let key = self.config.resolved_key()?;

        let response: serde_json::Value = self
            .http
            .get(format!("{API_BASE}/models?key={key}"))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(format!(
            "Connected ({} models available)",
            response["models"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_request_serializes_inline_data_and_prompt() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: STANDARD.encode(b"not a real jpeg"),
                        }),
                    },
                    Part {
                        text: Some("prompt".to_string()),
                        inline_data: None,
                    },
                ],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["inline_data"]["mime_type"], "image/jpeg");
        assert!(parts[0].get("text").is_none());
        assert_eq!(parts[1]["text"], "prompt");
        assert!(parts[1].get("inline_data").is_none());
    }

    #[test]
    fn response_text_survives_deserialization() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Coffee 3.50" } ] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text = response.candidates[0]
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref());
        assert_eq!(text, Some("Coffee 3.50"));
    }
}
