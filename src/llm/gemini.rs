//! Gemini `generateContent` client.
//!
//! Behaviour:
//! - System messages are merged into `systemInstruction`.
//! - User and assistant messages become `user` / `model` contents, in order.
//! - One non-streaming request per call; no retries.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::conversation::message::{Message, Role};
use crate::llm::completion::{CompletionFuture, CompletionModel};
use crate::llm::errors::{LlmError, LlmResult};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";
/// Maximum number of characters of an error body kept in errors.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

/// Async client for the hosted Gemini API.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> LlmResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(LlmError::Http)?;
        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    async fn generate(&self, messages: &[Message]) -> LlmResult<String> {
        let request = build_request(messages, self.temperature);
        debug!(
            model = %self.model,
            contents = request.contents.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = truncate_chars(&body, MAX_ERROR_BODY_CHARS);
            warn!(status = status.as_u16(), "gemini returned an error status");
            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                LlmError::RateLimited(body)
            } else {
                LlmError::Status {
                    status: status.as_u16(),
                    body,
                }
            });
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        extract_text(parsed)
    }
}

impl CompletionModel for GeminiClient {
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a, LlmResult<String>> {
        Box::pin(self.generate(messages))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn build_request(messages: &[Message], temperature: f32) -> GenerateContentRequest {
    let system: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| m.content.as_str())
        .collect();
    let system_instruction = (!system.is_empty()).then(|| Content {
        role: None,
        parts: vec![Part {
            text: Some(system.join("\n\n")),
        }],
    });

    let contents = messages
        .iter()
        .filter_map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => return None,
            };
            Some(Content {
                role: Some(role.to_string()),
                parts: vec![Part {
                    text: Some(m.content.clone()),
                }],
            })
        })
        .collect();

    GenerateContentRequest {
        system_instruction,
        contents,
        generation_config: GenerationConfig { temperature },
    }
}

fn extract_text(response: GenerateContentResponse) -> LlmResult<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(LlmError::EmptyResponse);
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = candidate.finish_reason {
            debug!(finish_reason = %reason, "gemini candidate carried no text");
        }
        return Err(LlmError::EmptyResponse);
    }

    Ok(text)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_maps_roles_and_system_instruction() {
        let messages = vec![
            Message::system("Solo seguros."),
            Message::user("hola"),
            Message::assistant("Bienvenido a SegurosVida+"),
            Message::user("precio del seguro de auto?"),
        ];

        let request = build_request(&messages, 0.0);
        let json = serde_json::to_value(&request).unwrap_or_default();

        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "Solo seguros."
        );
        assert!(json["systemInstruction"].get("role").is_none());
        let roles: Vec<&str> = json["contents"]
            .as_array()
            .map(|items| items.iter().filter_map(|c| c["role"].as_str()).collect())
            .unwrap_or_default();
        assert_eq!(roles, vec!["user", "model", "user"]);
        assert_eq!(json["contents"][2]["parts"][0]["text"], "precio del seguro de auto?");
        assert_eq!(json["generationConfig"]["temperature"], 0.0);
    }

    #[test]
    fn test_build_request_without_system_omits_instruction() {
        let request = build_request(&[Message::user("hola")], 0.5);
        let json = serde_json::to_value(&request).unwrap_or_default();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hola, "}, {"text": "soy tu asesor."}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap_or(GenerateContentResponse { candidates: vec![] });

        let text = extract_text(response).unwrap_or_default();
        assert_eq!(text, "Hola, soy tu asesor.");
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let empty = GenerateContentResponse { candidates: vec![] };
        assert!(matches!(extract_text(empty), Err(LlmError::EmptyResponse)));

        let blocked: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap_or(GenerateContentResponse { candidates: vec![] });
        assert!(matches!(extract_text(blocked), Err(LlmError::EmptyResponse)));
    }

    #[test]
    fn test_endpoint_uses_model_and_trims_slash() {
        let config = LlmConfig {
            api_key: "key".to_string(),
            base_url: "http://localhost:9999/v1beta/".to_string(),
            ..LlmConfig::default()
        };
        let client = GeminiClient::new(&config);
        assert!(client.is_ok());
        if let Ok(client) = client {
            assert_eq!(
                client.endpoint,
                "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
            );
            assert_eq!(client.model_name(), "gemini-2.5-flash");
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transient() {
        let config = LlmConfig {
            api_key: "key".to_string(),
            base_url: "http://127.0.0.1:9/v1beta".to_string(),
            timeout_secs: 2,
            connect_timeout_secs: 1,
            ..LlmConfig::default()
        };
        let Ok(client) = GeminiClient::new(&config) else {
            return;
        };
        let result = client.complete(&[Message::user("hola")]).await;
        assert!(result.as_ref().is_err_and(LlmError::is_transient), "{result:?}");
    }
}
