pub mod gemini;
pub mod models;

use async_trait::async_trait;
use thiserror::Error;

use models::{GenerateRequest, GenerateResponse};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("API Error: {0}")]
    Api(String),
}

/// Narrow capability contract for the generative backend. Error display
/// strings are part of the contract: the advice layer classifies failures
/// by substring (`429`, `Quota`, `RESOURCE_EXHAUSTED`), so implementations
/// must pass HTTP status codes and response bodies through verbatim.
#[async_trait]
pub trait AdviceBackend: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError>;
}
