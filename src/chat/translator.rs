use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::advice::AdviceService;
use crate::data::Language;

/// Minimum composed length before auto-translation kicks in. The manual
/// path goes straight to `AdviceService::translate`, which has its own
/// 2-character floor.
const MIN_AUTO_LEN: usize = 3;

/// Debounced auto-translation of the input the user is composing. Each
/// input change cancels the pending timer and arms a new one; only the
/// surviving task may deliver a result, so a superseded request can never
/// apply late. Translated text arrives on the channel handed out at
/// construction.
pub struct AutoTranslator {
    advice: Arc<AdviceService>,
    delay: Duration,
    last_translated: Arc<Mutex<String>>,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<String>,
}

impl AutoTranslator {
    pub fn new(
        advice: Arc<AdviceService>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                advice,
                delay,
                last_translated: Arc::new(Mutex::new(String::new())),
                pending: None,
                tx,
            },
            rx,
        )
    }

    /// The user changed the input. Cancels any armed timer; arms a new
    /// one unless the text is too short, already in the target, or equal
    /// to our own last output (the feedback-loop guard).
    pub fn input_changed(&mut self, text: String, language: Language) {
        self.cancel_pending();

        if language == Language::En || text.chars().count() < MIN_AUTO_LEN {
            return;
        }
        if text == *self.last_translated.lock().unwrap() {
            return;
        }

        let advice = Arc::clone(&self.advice);
        let delay = self.delay;
        let last_translated = Arc::clone(&self.last_translated);
        let tx = self.tx.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let translated = advice.translate(&text, language).await;
            if translated != text {
                *last_translated.lock().unwrap() = translated.clone();
                let _ = tx.send(translated);
            }
        }));
    }

    /// Manual translation request: skips the debounce entirely.
    pub async fn translate_now(&mut self, text: &str, language: Language) -> String {
        self.cancel_pending();
        let translated = self.advice.translate(text, language).await;
        *self.last_translated.lock().unwrap() = translated.clone();
        translated
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for AutoTranslator {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
