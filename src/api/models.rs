use serde::{Deserialize, Serialize};

use crate::backend::models::InlineImage;
use crate::data::Language;

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub text: String,
    pub image: Option<InlineImage>,
    /// Rendered preview kept on the user message when an image is sent.
    pub image_preview: Option<String>,
    #[serde(default)]
    pub is_retry: bool,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct VaccineQuery {
    /// ISO date; when present, rows due for the computed age are flagged.
    pub birth_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub language: Language,
    pub message_count: usize,
}

/// Localized UI text handed to frontends in one shot.
#[derive(Debug, Serialize)]
pub struct UiInfo {
    pub welcome: &'static str,
    pub disclaimer: &'static str,
    pub report_analysis: &'static str,
    pub quick_questions: &'static [&'static str],
    pub vax_detail_prompt: &'static str,
    pub alert_detail_prompt: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HelplineInfo {
    pub ambulance: &'static str,
    pub health_helpline: &'static str,
}
