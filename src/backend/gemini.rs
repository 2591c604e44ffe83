use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::backend::models::{GenerateRequest, GenerateResponse, GroundingLink};
use crate::backend::{AdviceBackend, BackendError};
use crate::config::GeminiConfig;

pub struct GeminiBackend {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(config.api_key.clone(), config.api_base.clone())
    }
}

#[async_trait]
impl AdviceBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError> {
        let mut parts = vec![json!({ "text": request.prompt })];
        if let Some(image) = &request.image {
            parts.push(json!({
                "inline_data": { "mime_type": image.mime_type, "data": image.data }
            }));
        }

        let mut body = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "temperature": request.temperature },
        });

        if let Some(system) = &request.system_instruction {
            body["system_instruction"] = json!({ "parts": [{ "text": system }] });
        }

        if let Some(location) = &request.location {
            body["tools"] = json!([{ "google_maps": {} }]);
            body["tool_config"] = json!({
                "retrieval_config": {
                    "lat_lng": { "latitude": location.latitude, "longitude": location.longitude }
                }
            });
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            request.model,
            self.api_key
        );

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            // Status code and body must stay in the message verbatim; the
            // caller classifies rate limiting by substring.
            return Err(BackendError::Api(format!(
                "Gemini Error {}: {}",
                status.as_u16(),
                text
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let candidate = &json["candidates"][0];

        let mut text = String::new();
        if let Some(parts) = candidate["content"]["parts"].as_array() {
            for part in parts {
                if let Some(t) = part["text"].as_str() {
                    text.push_str(t);
                }
            }
        }

        let mut grounding_links = Vec::new();
        if let Some(chunks) = candidate["groundingMetadata"]["groundingChunks"].as_array() {
            for chunk in chunks {
                let maps = &chunk["maps"];
                if let Some(uri) = maps["uri"].as_str() {
                    grounding_links.push(GroundingLink {
                        title: maps["title"].as_str().unwrap_or("Health Center").to_string(),
                        uri: uri.to_string(),
                    });
                }
            }
        }

        Ok(GenerateResponse {
            text,
            grounding_links,
        })
    }
}
