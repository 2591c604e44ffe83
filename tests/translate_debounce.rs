#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use jeevansathi::advice::AdviceService;
    use jeevansathi::backend::models::{GenerateRequest, GenerateResponse};
    use jeevansathi::backend::{AdviceBackend, BackendError};
    use jeevansathi::chat::AutoTranslator;
    use jeevansathi::config::{AdviceConfig, GeminiConfig};
    use jeevansathi::data::Language;

    const DEBOUNCE: Duration = Duration::from_millis(2500);

    /// Replies with a fixed translation and counts requests.
    struct CountingBackend {
        calls: AtomicUsize,
        last_prompt: Mutex<String>,
        reply_text: &'static str,
    }

    impl CountingBackend {
        fn new(reply_text: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(String::new()),
                reply_text,
            })
        }
    }

    #[async_trait]
    impl AdviceBackend for CountingBackend {
        fn name(&self) -> &str {
            "counting"
        }

        async fn generate(
            &self,
            request: GenerateRequest,
        ) -> Result<GenerateResponse, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = request.prompt;
            Ok(GenerateResponse {
                text: self.reply_text.to_string(),
                grounding_links: vec![],
            })
        }
    }

    fn service(backend: Arc<dyn AdviceBackend>) -> Arc<AdviceService> {
        let gemini = GeminiConfig {
            api_base: "http://localhost".to_string(),
            api_key: "test-key".to_string(),
            default_model: "gemini-3-flash-preview".to_string(),
            location_model: "gemini-2.5-flash".to_string(),
        };
        Arc::new(AdviceService::new(backend, &gemini, &AdviceConfig::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_period_triggers_exactly_one_translation() {
        let backend = CountingBackend::new("पानी उबाल कर पियो");
        let (mut translator, mut rx) = AutoTranslator::new(service(backend.clone()), DEBOUNCE);

        translator.input_changed("pani ubal kar piyo".to_string(), Language::Hi);

        let translated = rx.recv().await.unwrap();
        assert_eq!(translated, "पानी उबाल कर पियो");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retrigger_within_the_window_cancels_the_earlier_timer() {
        let backend = CountingBackend::new("पानी उबाल कर पियो");
        let (mut translator, mut rx) = AutoTranslator::new(service(backend.clone()), DEBOUNCE);

        translator.input_changed("pani ubal".to_string(), Language::Hi);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        translator.input_changed("pani ubal kar piyo".to_string(), Language::Hi);

        let translated = rx.recv().await.unwrap();
        assert_eq!(translated, "पानी उबाल कर पियो");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert!(backend
            .last_prompt
            .lock()
            .unwrap()
            .contains("pani ubal kar piyo"));
    }

    #[tokio::test(start_paused = true)]
    async fn own_output_does_not_retrigger_translation() {
        let backend = CountingBackend::new("पानी उबाल कर पियो");
        let (mut translator, _rx) = AutoTranslator::new(service(backend.clone()), DEBOUNCE);

        translator.input_changed("pani ubal kar piyo".to_string(), Language::Hi);
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        // The UI echoes our own output back as an input change.
        translator.input_changed("पानी उबाल कर पियो".to_string(), Language::Hi);
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn short_input_and_english_are_skipped() {
        let backend = CountingBackend::new("पानी");
        let (mut translator, _rx) = AutoTranslator::new(service(backend.clone()), DEBOUNCE);

        translator.input_changed("ab".to_string(), Language::Hi);
        translator.input_changed("boil your water first".to_string(), Language::En);
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_translate_bypasses_the_debounce() {
        let backend = CountingBackend::new("पानी उबाल कर पियो");
        let (mut translator, _rx) = AutoTranslator::new(service(backend.clone()), DEBOUNCE);

        // An armed timer is superseded by the manual request.
        translator.input_changed("pani ubal".to_string(), Language::Hi);
        let translated = translator
            .translate_now("pani ubal kar piyo", Language::Hi)
            .await;

        assert_eq!(translated, "पानी उबाल कर पियो");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        tokio::time::sleep(DEBOUNCE + Duration::from_millis(100)).await;
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }
}
