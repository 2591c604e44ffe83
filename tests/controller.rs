#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Arc;

    use jeevansathi::advice::AdviceService;
    use jeevansathi::backend::models::{GenerateRequest, GenerateResponse, InlineImage};
    use jeevansathi::backend::{AdviceBackend, BackendError};
    use jeevansathi::chat::{ConversationController, MemoryStore, Role};
    use jeevansathi::config::{AdviceConfig, GeminiConfig};
    use jeevansathi::data::{ui_strings, Language};

    struct EchoBackend;

    #[async_trait]
    impl AdviceBackend for EchoBackend {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: GenerateRequest,
        ) -> Result<GenerateResponse, BackendError> {
            Ok(GenerateResponse {
                text: format!("advice for: {}", request.prompt),
                grounding_links: vec![],
            })
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl AdviceBackend for FailingBackend {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(
            &self,
            _request: GenerateRequest,
        ) -> Result<GenerateResponse, BackendError> {
            Err(BackendError::Network("connection refused".to_string()))
        }
    }

    fn controller_with(backend: Arc<dyn AdviceBackend>) -> ConversationController {
        let gemini = GeminiConfig {
            api_base: "http://localhost".to_string(),
            api_key: "test-key".to_string(),
            default_model: "gemini-3-flash-preview".to_string(),
            location_model: "gemini-2.5-flash".to_string(),
        };
        let service = Arc::new(AdviceService::new(backend, &gemini, &AdviceConfig::default()));
        ConversationController::new(service, Box::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn start_seeds_exactly_one_welcome_message_per_language() {
        for language in Language::ALL {
            let mut controller = controller_with(Arc::new(EchoBackend));
            controller.start(language);

            let messages = controller.messages();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].role, Role::Model);
            assert_eq!(messages[0].content, ui_strings(language).welcome);
        }
    }

    #[tokio::test]
    async fn start_is_idempotent_and_reloads_history() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::En);
        controller.send("namaste doctor", false).await;
        assert_eq!(controller.messages().len(), 3);

        controller.start(Language::En);
        assert_eq!(controller.messages().len(), 3);
    }

    #[tokio::test]
    async fn sends_interleave_user_and_model_messages_in_order() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::En);

        let prompts = ["first question", "second question", "third question"];
        for prompt in prompts {
            assert!(controller.send(prompt, false).await);
        }

        let messages = controller.messages();
        // welcome + (user, model) per send
        assert_eq!(messages.len(), 1 + 2 * prompts.len());
        for (i, prompt) in prompts.iter().enumerate() {
            let user = &messages[1 + 2 * i];
            let model = &messages[2 + 2 * i];
            assert_eq!(user.role, Role::User);
            assert_eq!(user.content, *prompt);
            assert_eq!(model.role, Role::Model);
            assert_eq!(model.content, format!("advice for: {prompt}"));
        }
    }

    #[tokio::test]
    async fn clear_resets_only_the_active_language() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::Hi);
        controller.send("namaste doctor", false).await;
        controller.start(Language::En);
        controller.send("namaste doctor", false).await;
        assert_eq!(controller.messages().len(), 3);

        controller.clear();

        let en = controller.messages();
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].content, ui_strings(Language::En).welcome);

        let hi = controller.switch_history(Language::Hi);
        assert_eq!(hi.len(), 3);
    }

    #[tokio::test]
    async fn history_view_is_read_only_and_round_trips() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::Te);
        controller.send("namaste doctor", false).await;
        controller.send("oka prashna", false).await;

        let active: Vec<String> = controller.messages().iter().map(|m| m.id.clone()).collect();

        let viewed = controller.switch_history(Language::Te);
        let viewed_ids: Vec<String> = viewed.iter().map(|m| m.id.clone()).collect();
        assert_eq!(viewed_ids, active);
        assert_eq!(controller.viewing_history(), Some(Language::Te));

        controller.exit_history_view();
        assert_eq!(controller.viewing_history(), None);

        // Viewing changed nothing.
        let after: Vec<String> = controller.messages().iter().map(|m| m.id.clone()).collect();
        assert_eq!(after, active);
    }

    #[tokio::test]
    async fn restore_history_activates_a_saved_conversation() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::Bn);
        controller.send("namaste doctor", false).await;
        controller.start(Language::En);

        assert!(controller.restore_history(Language::Bn));
        assert_eq!(controller.language(), Language::Bn);
        assert_eq!(controller.messages().len(), 3);

        // No saved history, nothing changes.
        assert!(!controller.restore_history(Language::Mr));
        assert_eq!(controller.language(), Language::Bn);
    }

    #[tokio::test]
    async fn empty_send_without_image_is_a_noop() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::En);

        assert!(!controller.send("   ", false).await);
        assert_eq!(controller.messages().len(), 1);
    }

    #[tokio::test]
    async fn image_only_send_uses_the_report_analysis_label() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::En);
        let image = InlineImage {
            data: "aGVsbG8=".to_string(),
            mime_type: "image/jpeg".to_string(),
        };
        controller.attach_image(image, Some("data:image/jpeg;base64,aGVsbG8=".to_string()));

        assert!(controller.send("", false).await);

        let messages = controller.messages();
        let user = &messages[1];
        assert_eq!(user.content, ui_strings(Language::En).report_analysis);
        assert!(user.image.is_some());
        assert!(!controller.has_pending_image());
    }

    #[tokio::test]
    async fn failed_send_keeps_the_prompt_for_retry() {
        let mut controller = controller_with(Arc::new(FailingBackend));
        controller.start(Language::En);

        controller.send("namaste doctor", false).await;

        let messages = controller.messages();
        assert_eq!(messages.len(), 3);
        let reply = &messages[2];
        assert!(reply.is_error);
        assert_eq!(reply.retry_prompt.as_deref(), Some("namaste doctor"));
        assert!(reply.content.starts_with("Connection is slow."));

        // Retry re-invokes without appending another user message.
        let retry_prompt = reply.retry_prompt.clone().unwrap();
        controller.send(&retry_prompt, true).await;

        let messages = controller.messages();
        assert_eq!(messages.len(), 4);
        let users = messages.iter().filter(|m| m.role == Role::User).count();
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn history_overview_lists_only_used_languages() {
        let mut controller = controller_with(Arc::new(EchoBackend));
        controller.start(Language::En);
        controller.send("namaste doctor", false).await;
        controller.start(Language::Hi);

        let overview = controller.history_overview();
        let languages: Vec<Language> = overview.iter().map(|(l, _)| *l).collect();
        assert!(languages.contains(&Language::En));
        assert!(languages.contains(&Language::Hi));
        assert!(!languages.contains(&Language::Te));

        let en_count = overview
            .iter()
            .find(|(l, _)| *l == Language::En)
            .map(|(_, n)| *n)
            .unwrap();
        assert_eq!(en_count, 3);
    }
}
