#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use jeevansathi::advice::AdviceService;
    use jeevansathi::backend::models::{
        GenerateRequest, GenerateResponse, GroundingLink, InlineImage,
    };
    use jeevansathi::backend::{AdviceBackend, BackendError};
    use jeevansathi::config::{AdviceConfig, GeminiConfig};
    use jeevansathi::data::Language;
    use jeevansathi::input::location::UserLocation;

    type Reply = fn() -> Result<GenerateResponse, BackendError>;

    /// Counts calls and records the last request, answering with a fixed
    /// reply. Stands in for the remote model.
    struct RecordingBackend {
        calls: AtomicUsize,
        last_request: Mutex<Option<GenerateRequest>>,
        reply: Reply,
    }

    impl RecordingBackend {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                reply,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_request(&self) -> Option<GenerateRequest> {
            self.last_request.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AdviceBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(
            &self,
            request: GenerateRequest,
        ) -> Result<GenerateResponse, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            (self.reply)()
        }
    }

    /// Never answers; used to drive the timeout race.
    struct StalledBackend;

    #[async_trait]
    impl AdviceBackend for StalledBackend {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn generate(
            &self,
            _request: GenerateRequest,
        ) -> Result<GenerateResponse, BackendError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(GenerateResponse {
                text: "too late".to_string(),
                grounding_links: vec![],
            })
        }
    }

    fn service(backend: Arc<dyn AdviceBackend>) -> AdviceService {
        let gemini = GeminiConfig {
            api_base: "http://localhost".to_string(),
            api_key: "test-key".to_string(),
            default_model: "gemini-3-flash-preview".to_string(),
            location_model: "gemini-2.5-flash".to_string(),
        };
        AdviceService::new(backend, &gemini, &AdviceConfig::default())
    }

    fn ok_reply() -> Result<GenerateResponse, BackendError> {
        Ok(GenerateResponse {
            text: "Drink clean water. Consult a doctor for health issues.".to_string(),
            grounding_links: vec![],
        })
    }

    #[tokio::test]
    async fn vaccine_prompt_is_answered_offline() {
        let backend = RecordingBackend::new(ok_reply);
        let service = service(backend.clone());

        let result = service.get_advice("BCG", Language::En, None, None).await;

        assert!(!result.is_error);
        assert!(result.text.starts_with("[Offline Info] BCG"));
        assert!(result.text.contains("Consult a doctor for health issues."));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn alert_keyword_is_answered_offline() {
        let backend = RecordingBackend::new(ok_reply);
        let service = service(backend.clone());

        let result = service
            .get_advice("machar kat gaya, kya karun", Language::Hi, None, None)
            .await;

        assert!(!result.is_error);
        assert!(result.text.starts_with("[Offline Alert] Dengue Outbreak Alert"));
        assert!(result.text.contains("Precautions:"));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn attached_image_bypasses_local_lookup() {
        let backend = RecordingBackend::new(ok_reply);
        let service = service(backend.clone());
        let image = InlineImage {
            data: "aGVsbG8=".to_string(),
            mime_type: "image/png".to_string(),
        };

        let result = service
            .get_advice("BCG", Language::En, None, Some(image))
            .await;

        assert!(!result.is_error);
        assert_eq!(backend.call_count(), 1);
        let request = backend.last_request().unwrap();
        assert_eq!(request.image.unwrap().mime_type, "image/png");
    }

    #[tokio::test]
    async fn resource_exhausted_maps_to_rate_limit_text() {
        let backend = RecordingBackend::new(|| {
            Err(BackendError::Api(
                "Gemini Error 500: RESOURCE_EXHAUSTED".to_string(),
            ))
        });
        let service = service(backend);

        let result = service
            .get_advice("what helps a cough", Language::En, None, None)
            .await;

        assert!(result.is_error);
        assert!(result.text.starts_with("Daily limit reached."));
    }

    #[tokio::test]
    async fn status_429_maps_to_rate_limit_text() {
        let backend = RecordingBackend::new(|| {
            Err(BackendError::Api("Gemini Error 429: slow down".to_string()))
        });
        let service = service(backend);

        let result = service
            .get_advice("what helps a cough", Language::En, None, None)
            .await;

        assert!(result.is_error);
        assert!(result.text.starts_with("Daily limit reached."));
    }

    #[tokio::test]
    async fn other_failures_map_to_connectivity_text() {
        let backend =
            RecordingBackend::new(|| Err(BackendError::Network("connection refused".to_string())));
        let service = service(backend);

        let result = service
            .get_advice("what helps a cough", Language::En, None, None)
            .await;

        assert!(result.is_error);
        assert!(result.text.starts_with("Connection is slow."));
    }

    #[tokio::test(start_paused = true)]
    async fn request_times_out_after_twelve_seconds() {
        let service = service(Arc::new(StalledBackend));

        let result = service
            .get_advice("what helps a cough", Language::En, None, None)
            .await;

        assert!(result.is_error);
        assert!(result.text.starts_with("Connection is slow."));
    }

    #[tokio::test]
    async fn empty_response_gets_placeholder_text() {
        let backend = RecordingBackend::new(|| Ok(GenerateResponse::default()));
        let service = service(backend);

        let result = service
            .get_advice("what helps a cough", Language::En, None, None)
            .await;

        assert!(!result.is_error);
        assert_eq!(result.text, "I am processing your request...");
    }

    #[tokio::test]
    async fn grounding_links_pass_through() {
        let backend = RecordingBackend::new(|| {
            Ok(GenerateResponse {
                text: "Visit the nearest centre.".to_string(),
                grounding_links: vec![GroundingLink {
                    title: "PHC Rampur".to_string(),
                    uri: "https://maps.example/phc-rampur".to_string(),
                }],
            })
        });
        let service = service(backend);

        let result = service
            .get_advice("nearest clinic please", Language::En, None, None)
            .await;

        assert_eq!(result.grounding_links.len(), 1);
        assert_eq!(result.grounding_links[0].title, "PHC Rampur");
    }

    #[tokio::test]
    async fn location_selects_the_location_model() {
        let backend = RecordingBackend::new(ok_reply);
        let service = service(backend.clone());
        let location = UserLocation {
            latitude: 19.07,
            longitude: 72.87,
        };

        service
            .get_advice("nearest clinic please", Language::Hi, Some(location), None)
            .await;

        let request = backend.last_request().unwrap();
        assert_eq!(request.model, "gemini-2.5-flash");
        assert!(request.location.is_some());
    }

    #[tokio::test]
    async fn default_model_without_location_and_localized_instruction() {
        let backend = RecordingBackend::new(ok_reply);
        let service = service(backend.clone());

        service
            .get_advice("nearest clinic please", Language::Hi, None, None)
            .await;

        let request = backend.last_request().unwrap();
        assert_eq!(request.model, "gemini-3-flash-preview");
        assert!(request.location.is_none());
        assert!(request.system_instruction.unwrap().contains("Hindi"));
    }

    #[tokio::test]
    async fn translate_passes_short_text_through() {
        let backend = RecordingBackend::new(ok_reply);
        let service = service(backend.clone());

        assert_eq!(service.translate("a", Language::Hi).await, "a");
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn translate_is_a_noop_for_english() {
        let backend = RecordingBackend::new(ok_reply);
        let service = service(backend.clone());

        assert_eq!(
            service.translate("pani ubal kar piyo", Language::En).await,
            "pani ubal kar piyo"
        );
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn translate_failure_returns_original_text() {
        let backend =
            RecordingBackend::new(|| Err(BackendError::Network("connection refused".to_string())));
        let service = service(backend);

        assert_eq!(
            service.translate("pani ubal kar piyo", Language::Hi).await,
            "pani ubal kar piyo"
        );
    }

    #[tokio::test]
    async fn translate_returns_trimmed_model_output() {
        let backend = RecordingBackend::new(|| {
            Ok(GenerateResponse {
                text: "  पानी उबाल कर पियो \n".to_string(),
                grounding_links: vec![],
            })
        });
        let service = service(backend.clone());

        assert_eq!(
            service.translate("pani ubal kar piyo", Language::Hi).await,
            "पानी उबाल कर पियो"
        );
        let request = backend.last_request().unwrap();
        assert!(request.prompt.contains("Hindi script"));
    }
}
