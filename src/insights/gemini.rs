//! Minimal async client for the Gemini `generateContent` endpoint.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::image::InlineImage;
use super::{InsightsError, InsightsResult};
use crate::config::Config;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// One piece of a prompt or reply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Reply parts this client does not interpret
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn image(image: &InlineImage) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    total_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Fails with `MissingApiKey` when `GEMINI_API_KEY` was not configured
    pub fn from_config(config: &Config) -> InsightsResult<Self> {
        let api_key = config
            .gemini_api_key
            .as_deref()
            .ok_or(InsightsError::MissingApiKey)?;
        Ok(Self::new(api_key, config.gemini_model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Free-text generation from a single prompt
    pub async fn generate_text(&self, prompt: &str) -> InsightsResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                response_mime_type: None,
                response_schema: None,
            }),
        };
        self.generate(&request).await
    }

    /// Structured generation: the reply is constrained to `schema` and decoded into `T`
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        parts: Vec<Part>,
        schema: serde_json::Value,
    ) -> InsightsResult<T> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.2),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
            }),
        };
        let text = self.generate(&request).await?;
        parse_json_reply(&text)
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(&self, request: &GenerateRequest) -> InsightsResult<String> {
        let url = format!("{API_BASE_URL}/models/{}:generateContent", self.model);
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(map_api_error(status.as_u16(), &body));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            InsightsError::Parse(e)
        })?;

        if let Some(tokens) = parsed.usage_metadata.as_ref().and_then(|u| u.total_token_count) {
            debug!(tokens, "Gemini usage");
        }
        extract_text(parsed)
    }
}

fn extract_text(response: GenerateResponse) -> InsightsResult<String> {
    if let Some(err) = response.error {
        return Err(InsightsError::Api {
            status: 200,
            message: err.message,
        });
    }

    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or(InsightsError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| match p {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } | Part::Other(_) => None,
        })
        .collect();

    if text.trim().is_empty() {
        debug!(finish_reason = ?candidate.finish_reason, "Gemini returned no text");
        return Err(InsightsError::EmptyResponse);
    }
    Ok(text)
}

/// Decodes a JSON reply, tolerating a surrounding markdown code fence
pub(crate) fn parse_json_reply<T: DeserializeOwned>(text: &str) -> InsightsResult<T> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);
    Ok(serde_json::from_str(body.trim())?)
}

fn map_api_error(status: u16, body: &str) -> InsightsError {
    let message = serde_json::from_str::<GenerateResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .map_or_else(|| body.to_string(), |e| e.message);

    if status == 429 {
        return InsightsError::RateLimited(quota_message(&message));
    }
    InsightsError::Api { status, message }
}

/// Turns "... Please retry in 6.4s." into a whole-second hint
fn quota_message(message: &str) -> String {
    const MARKER: &str = "Please retry in ";
    let seconds = message
        .find(MARKER)
        .map(|pos| &message[pos + MARKER.len()..])
        .and_then(|rest| rest.split('s').next())
        .and_then(|value| value.parse::<f64>().ok());

    match seconds {
        Some(s) => format!("AI quota exceeded, try again in {} seconds", s.ceil() as u64),
        None => "AI quota exceeded, try again shortly".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let image = InlineImage {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text("describe"), Part::image(&image)],
            }],
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(json!({"type": "object"})),
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "describe");
        assert_eq!(value["contents"][0]["parts"][1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert!(value["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Eat "}, {"text": "more fiber."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 42}
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Eat more fiber.");
    }

    #[test]
    fn test_extract_text_empty() {
        let response: GenerateResponse = serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(matches!(extract_text(response), Err(InsightsError::EmptyResponse)));

        let blocked: GenerateResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(matches!(extract_text(blocked), Err(InsightsError::EmptyResponse)));
    }

    #[test]
    fn test_parse_json_reply_with_fence() {
        let value: serde_json::Value = parse_json_reply("```json\n{\"a\": 1}\n```").unwrap();
        assert_eq!(value["a"], 1);
        let plain: serde_json::Value = parse_json_reply(" {\"a\": 2} ").unwrap();
        assert_eq!(plain["a"], 2);
        assert!(parse_json_reply::<serde_json::Value>("not json").is_err());
    }

    #[test]
    fn test_map_api_error() {
        let body = r#"{"error": {"message": "Quota exceeded. Please retry in 6.406453963s."}}"#;
        match map_api_error(429, body) {
            InsightsError::RateLimited(msg) => assert!(msg.contains("7 seconds")),
            other => panic!("unexpected error: {other:?}"),
        }

        match map_api_error(400, r#"{"error": {"message": "API key not valid"}}"#) {
            InsightsError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(map_api_error(500, "oops"), InsightsError::Api { status: 500, .. }));
    }

    #[test]
    fn test_quota_message_fallback() {
        assert_eq!(quota_message("rate limited"), "AI quota exceeded, try again shortly");
    }
}
