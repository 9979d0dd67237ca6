use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{ports::LLMClient, value_objects::GenerationRequest},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// `models/text-bison-001` and `text-bison-001` address the same resource.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    async fn call_gemini_api(
        &self,
        model: &str,
        request: GeminiRequest,
        timeout: Option<std::time::Duration>,
    ) -> Result<String, CoreError> {
        let mut builder = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.api_key.as_str())])
            .json(&request);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        // The request URL carries the API key, keep it out of messages
        let response = builder.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!(model, "Gemini API request failed: {}", e);
            CoreError::ExternalServiceError(format!("LLM API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(model, "Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!(model, "Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
        let GenerationRequest {
            model,
            prompt,
            response_schema,
            timeout,
        } = request;

        let gemini_request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: response_schema.map(|response_schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(&model, gemini_request, timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_models_prefix() {
        let client = GeminiLLMClient::new(
            "key".to_string(),
            "http://localhost:9000/v1beta/".to_string(),
        );
        assert_eq!(
            client.endpoint("models/text-bison-001"),
            "http://localhost:9000/v1beta/models/text-bison-001:generateContent"
        );
        assert_eq!(
            client.endpoint("gemini-2.0-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_plain_text_request_has_no_generation_config() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Say hi".to_string(),
                }],
            }],
            generation_config: None,
        };
        let value = serde_json::to_value(request).unwrap();
        assert!(value.get("generation_config").is_none());
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Say hi");
    }

    #[test]
    fn test_response_text_is_optional_per_part() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"thought":true},{"text":"{}"}]}}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text));
        assert_eq!(text.as_deref(), Some("{}"));
    }
}
