pub mod middleware;
pub mod models;
pub mod routes;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::advice::AdviceService;
use crate::chat::ConversationController;

/// Shared HTTP state. The controller is the single owner of the history
/// map; the mutex serializes handler access to it (ownership artifact,
/// not a request queue). Translation goes through the service directly
/// and never takes the controller lock.
pub struct AppState {
    pub controller: Mutex<ConversationController>,
    pub advice: Arc<AdviceService>,
}
