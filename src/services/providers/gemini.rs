/// Gemini text-generation provider
///
/// Calls `POST /v1beta/models/{model}:generateContent` and reads the generated
/// text from `candidates[0].content.parts[*].text`.
use crate::{
    error::{AppError, AppResult, UpstreamService},
    services::providers::SuggestionProvider,
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Sampling parameters sent with every prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: 200,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    params: GenerationParams,
}

impl GeminiProvider {
    pub fn new(api_key: String, api_url: String, model: String, params: GenerationParams) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
            params,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }

    /// Concatenates the text parts of the first candidate
    fn extract_text(response: GenerateResponse) -> AppResult<String> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::upstream(
                UpstreamService::Suggestion,
                "Gemini response carried no text",
            ));
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.params.max_output_tokens,
                temperature: self.params.temperature,
            },
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::upstream(UpstreamService::Suggestion, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                provider = "gemini",
                "Generation request failed"
            );
            return Err(AppError::upstream(
                UpstreamService::Suggestion,
                format!("Gemini API returned status {}", status),
            ));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            AppError::upstream(
                UpstreamService::Suggestion,
                format!("Failed to parse Gemini response: {}", e),
            )
        })?;

        let text = Self::extract_text(parsed)?;

        tracing::debug!(generated = %text, provider = "gemini", "Generation completed");

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_text_single_part() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Up, Toy Story 3"}],"role":"model"}}]}"#,
        );
        assert_eq!(
            GeminiProvider::extract_text(response).unwrap(),
            "Up, Toy Story 3"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Up, "},{"text":"Coco"}]}}]}"#,
        );
        assert_eq!(GeminiProvider::extract_text(response).unwrap(), "Up, Coco");
    }

    #[test]
    fn test_extract_text_without_candidates_is_upstream_error() {
        let response = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        let err = GeminiProvider::extract_text(response).unwrap_err();
        assert!(err.is_upstream(UpstreamService::Suggestion));
    }

    #[test]
    fn test_extract_text_blank_is_upstream_error() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#);
        assert!(GeminiProvider::extract_text(response).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 200,
                temperature: 0.5,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 200);
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = GeminiProvider::new(
            "key".to_string(),
            "http://test.local/".to_string(),
            "gemini-1.5-flash".to_string(),
            GenerationParams::default(),
        );
        assert_eq!(
            provider.endpoint(),
            "http://test.local/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
