use serde::{Deserialize, Serialize};

use crate::input::location::UserLocation;

/// A client-side base64 image attached to a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineImage {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub image: Option<InlineImage>,
    pub system_instruction: Option<String>,
    pub temperature: f32,
    /// Presence enables maps grounding on backends that support it.
    pub location: Option<UserLocation>,
}

/// A citation returned by the backend pointing at a real-world resource,
/// typically a map entry for a nearby health facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingLink {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateResponse {
    pub text: String,
    pub grounding_links: Vec<GroundingLink>,
}
