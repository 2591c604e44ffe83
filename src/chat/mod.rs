pub mod controller;
pub mod models;
pub mod store;
pub mod translator;

pub use controller::ConversationController;
pub use models::{Message, Role};
pub use store::{HistoryStore, MemoryStore};
pub use translator::AutoTranslator;
