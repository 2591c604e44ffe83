use std::collections::HashMap;
use std::sync::Mutex;

use crate::chat::models::Message;
use crate::data::Language;

/// Injectable persistence boundary for the language→history map. The
/// controller is the only writer; implementations just load and save
/// whole per-language lists.
pub trait HistoryStore: Send + Sync {
    fn load(&self, language: Language) -> Vec<Message>;
    fn save(&self, language: Language, messages: &[Message]);
    /// Languages that currently have a non-empty history.
    fn languages(&self) -> Vec<Language>;
}

/// The shipped implementation: plain in-memory state, dropped with the
/// process.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<Language, Vec<Message>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, language: Language) -> Vec<Message> {
        self.inner
            .lock()
            .unwrap()
            .get(&language)
            .cloned()
            .unwrap_or_default()
    }

    fn save(&self, language: Language, messages: &[Message]) {
        self.inner
            .lock()
            .unwrap()
            .insert(language, messages.to_vec());
    }

    fn languages(&self) -> Vec<Language> {
        let inner = self.inner.lock().unwrap();
        Language::ALL
            .into_iter()
            .filter(|l| inner.get(l).map(|m| !m.is_empty()).unwrap_or(false))
            .collect()
    }
}
