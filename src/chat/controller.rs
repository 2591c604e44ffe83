use std::sync::Arc;
use tracing::debug;

use crate::advice::AdviceService;
use crate::backend::models::InlineImage;
use crate::chat::models::{Message, Role};
use crate::chat::store::HistoryStore;
use crate::data::{ui_strings, Language};
use crate::input::location::UserLocation;

/// Owns the conversation state: the active message list, the per-language
/// history map (through the store), the typing flag, session location and
/// the staged image. The single logical writer of all of it.
pub struct ConversationController {
    advice: Arc<AdviceService>,
    store: Box<dyn HistoryStore>,
    language: Language,
    messages: Vec<Message>,
    is_typing: bool,
    location: Option<UserLocation>,
    pending_image: Option<InlineImage>,
    pending_preview: Option<String>,
    viewing_history: Option<Language>,
}

impl ConversationController {
    pub fn new(advice: Arc<AdviceService>, store: Box<dyn HistoryStore>) -> Self {
        Self {
            advice,
            store,
            language: Language::En,
            messages: vec![],
            is_typing: false,
            location: None,
            pending_image: None,
            pending_preview: None,
            viewing_history: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn location(&self) -> Option<UserLocation> {
        self.location
    }

    /// Activate a language: load its saved history, or seed a single
    /// welcome message when there is none. Idempotent per language.
    pub fn start(&mut self, language: Language) {
        self.language = language;
        self.viewing_history = None;
        let existing = self.store.load(language);
        if existing.is_empty() {
            self.messages = vec![Message::welcome(language)];
            self.store.save(language, &self.messages);
        } else {
            self.messages = existing;
        }
    }

    /// Send a prompt (plus any staged image) to the advice service and
    /// append the outcome. Returns false for the empty no-op case.
    /// Failures never escape: they land as error-flagged model messages
    /// carrying the prompt for retry.
    pub async fn send(&mut self, text: &str, is_retry: bool) -> bool {
        let prompt = text.trim();
        if prompt.is_empty() && self.pending_image.is_none() {
            return false;
        }

        self.viewing_history = None;

        let image = self.pending_image.take();
        let preview = self.pending_preview.take();

        // Image-only sends get a fixed label as the effective prompt.
        let effective_prompt = if prompt.is_empty() {
            ui_strings(self.language).report_analysis.to_string()
        } else {
            prompt.to_string()
        };

        if !is_retry {
            self.append(Message::new(Role::User, &effective_prompt).with_image(preview));
        }

        self.is_typing = true;
        let result = self
            .advice
            .get_advice(&effective_prompt, self.language, self.location, image)
            .await;
        self.is_typing = false;

        let retry_prompt = result.is_error.then(|| effective_prompt.clone());
        self.append(
            Message::new(Role::Model, result.text)
                .with_grounding_links(result.grounding_links)
                .with_error(result.is_error, retry_prompt),
        );
        true
    }

    /// Reset the active language's history to a fresh welcome message.
    /// Other languages keep theirs.
    pub fn clear(&mut self) {
        debug!("clearing chat for {}", self.language);
        self.messages = vec![Message::welcome(self.language)];
        self.store.save(self.language, &self.messages);
    }

    /// Read-only view into another language's saved history. Does not
    /// touch the active conversation.
    pub fn switch_history(&mut self, language: Language) -> Vec<Message> {
        self.viewing_history = Some(language);
        self.store.load(language)
    }

    pub fn exit_history_view(&mut self) {
        self.viewing_history = None;
    }

    pub fn viewing_history(&self) -> Option<Language> {
        self.viewing_history
    }

    /// Make a saved history the active conversation. No-op (and false)
    /// when that language has no history.
    pub fn restore_history(&mut self, language: Language) -> bool {
        let history = self.store.load(language);
        if history.is_empty() {
            return false;
        }
        self.language = language;
        self.messages = history;
        self.viewing_history = None;
        true
    }

    /// Languages with saved history and their message counts.
    pub fn history_overview(&self) -> Vec<(Language, usize)> {
        self.store
            .languages()
            .into_iter()
            .map(|l| (l, self.store.load(l).len()))
            .collect()
    }

    pub fn set_location(&mut self, location: UserLocation) {
        self.location = Some(location);
    }

    /// Stage an image for the next send. `preview` is what history
    /// rendering shows; `image` is what goes to the backend.
    pub fn attach_image(&mut self, image: InlineImage, preview: Option<String>) {
        self.pending_image = Some(image);
        self.pending_preview = preview;
    }

    pub fn has_pending_image(&self) -> bool {
        self.pending_image.is_some()
    }

    fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.store.save(self.language, &self.messages);
    }
}
