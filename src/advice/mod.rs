pub mod local;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::backend::models::{GenerateRequest, GenerateResponse, GroundingLink, InlineImage};
use crate::backend::{AdviceBackend, BackendError};
use crate::config::{AdviceConfig, GeminiConfig};
use crate::data::Language;
use crate::input::location::UserLocation;
use local::local_knowledge_response;

const SYSTEM_PROMPT: &str = "You are JeevanSathi, a friendly health worker for rural communities. \
Respond ONLY in {LANGUAGE_NAME} script. \
Rules: No diagnosis, no prescription. Use very simple words. \
Always end with: \"Consult a doctor for health issues.\"";

const EMPTY_RESPONSE_PLACEHOLDER: &str = "I am processing your request...";

const RATE_LIMIT_TEXT: &str =
    "Daily limit reached. Use the 'Vaccines' or 'Alerts' tabs for offline info. In emergency, call 108.";

const CONNECTIVITY_TEXT: &str =
    "Connection is slow. Please try again or check the provided info tabs.";

/// Outcome of an advice request. Never a hard failure: every error path
/// folds into an error-flagged result the caller can render.
#[derive(Debug, Clone)]
pub struct AdviceResult {
    pub text: String,
    pub grounding_links: Vec<GroundingLink>,
    pub is_error: bool,
}

pub struct AdviceService {
    backend: Arc<dyn AdviceBackend>,
    default_model: String,
    location_model: String,
    temperature: f32,
    request_timeout: Duration,
    translate_timeout: Duration,
}

impl AdviceService {
    pub fn new(
        backend: Arc<dyn AdviceBackend>,
        gemini: &GeminiConfig,
        advice: &AdviceConfig,
    ) -> Self {
        Self {
            backend,
            default_model: gemini.default_model.clone(),
            location_model: gemini.location_model.clone(),
            temperature: advice.temperature,
            request_timeout: Duration::from_secs(advice.request_timeout_secs),
            translate_timeout: Duration::from_secs(advice.translate_timeout_secs),
        }
    }

    pub async fn get_advice(
        &self,
        prompt: &str,
        language: Language,
        location: Option<UserLocation>,
        image: Option<InlineImage>,
    ) -> AdviceResult {
        // Local knowledge first. An attached image always goes to the
        // model, the tables cannot look at pictures.
        if image.is_none() {
            if let Some(text) = local_knowledge_response(prompt, language) {
                return AdviceResult {
                    text,
                    grounding_links: vec![],
                    is_error: false,
                };
            }
        }

        let model = if location.is_some() {
            self.location_model.clone()
        } else {
            self.default_model.clone()
        };

        let request = GenerateRequest {
            model,
            prompt: prompt.to_string(),
            image,
            system_instruction: Some(
                SYSTEM_PROMPT.replace("{LANGUAGE_NAME}", language.display_name()),
            ),
            temperature: self.temperature,
            location,
        };

        match race_timeout(self.request_timeout, self.backend.generate(request)).await {
            Ok(response) => success_result(response),
            Err(e) => {
                warn!("advice request failed: {e}");
                failure_result(&e)
            }
        }
    }

    /// Script conversion/translation of free text into the target
    /// language. Degrades silently: any failure returns the input.
    pub async fn translate(&self, text: &str, target: Language) -> String {
        if text.trim().chars().count() < 2 || target == Language::En {
            return text.to_string();
        }

        let name = target.display_name();
        let request = GenerateRequest {
            model: self.default_model.clone(),
            prompt: format!(
                "Script convert/translate this to {name} script: \"{text}\". Output only the {name} script."
            ),
            image: None,
            system_instruction: None,
            temperature: self.temperature,
            location: None,
        };

        match race_timeout(self.translate_timeout, self.backend.generate(request)).await {
            Ok(response) => {
                let translated = response.text.trim();
                if translated.is_empty() {
                    text.to_string()
                } else {
                    translated.to_string()
                }
            }
            Err(e) => {
                warn!("translation failed: {e}");
                text.to_string()
            }
        }
    }
}

/// Race a backend call against a deadline. Whichever settles first wins;
/// a late success is dropped with the future.
async fn race_timeout<T>(
    duration: Duration,
    fut: impl Future<Output = Result<T, BackendError>>,
) -> Result<T, BackendError> {
    match tokio::time::timeout(duration, fut).await {
        Ok(result) => result,
        Err(_) => Err(BackendError::Network("Request timed out".to_string())),
    }
}

fn success_result(response: GenerateResponse) -> AdviceResult {
    let text = if response.text.is_empty() {
        EMPTY_RESPONSE_PLACEHOLDER.to_string()
    } else {
        response.text
    };
    AdviceResult {
        text,
        grounding_links: response.grounding_links,
        is_error: false,
    }
}

fn failure_result(error: &BackendError) -> AdviceResult {
    let msg = error.to_string();
    let text = if msg.contains("429") || msg.contains("Quota") || msg.contains("RESOURCE_EXHAUSTED")
    {
        RATE_LIMIT_TEXT
    } else {
        CONNECTIVITY_TEXT
    };
    AdviceResult {
        text: text.to_string(),
        grounding_links: vec![],
        is_error: true,
    }
}
