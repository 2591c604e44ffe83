use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::models::GroundingLink;
use crate::data::{ui_strings, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    System,
}

/// One chat bubble. Immutable once created; appended to exactly one
/// language's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grounding_links: Vec<GroundingLink>,
    #[serde(default)]
    pub is_error: bool,
    /// The original prompt, kept on error messages so the user can retry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_prompt: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            image: None,
            grounding_links: vec![],
            is_error: false,
            retry_prompt: None,
        }
    }

    pub fn welcome(language: Language) -> Self {
        Self::new(Role::Model, ui_strings(language).welcome)
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn with_grounding_links(mut self, links: Vec<GroundingLink>) -> Self {
        self.grounding_links = links;
        self
    }

    pub fn with_error(mut self, is_error: bool, retry_prompt: Option<String>) -> Self {
        self.is_error = is_error;
        self.retry_prompt = retry_prompt;
        self
    }
}
