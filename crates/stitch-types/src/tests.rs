#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::credentials::*;
    use crate::clip::*;
    use crate::event::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_error_prefix() {
        let msg = Message::error("bad key");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "Error: bad key");
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!(serde_json::from_str::<Role>(r#""system""#).is_err());
    }

    // ─── Credential Tests ────────────────────────────────────

    #[test]
    fn test_credentials_default_empty() {
        let creds = CredentialSet::default();
        assert!(creds.is_empty());
        assert_eq!(creds.effective_server_secret(), DEFAULT_SERVER_SECRET);
        assert!(creds.preferred_provider().is_none());
    }

    #[test]
    fn test_credentials_wire_names() {
        let creds = CredentialSet {
            openai: "sk-1".to_string(),
            server_secret: "s3cret".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "openai": "sk-1",
                "anthropic": "",
                "gemini": "",
                "serverSecret": "s3cret",
            })
        );
    }

    #[test]
    fn test_credentials_missing_server_secret_loads_empty() {
        let creds: CredentialSet =
            serde_json::from_str(r#"{"openai":"sk","anthropic":"","gemini":""}"#).unwrap();
        assert_eq!(creds.server_secret, "");
        assert_eq!(creds.effective_server_secret(), "stitch-secret");
    }

    #[test]
    fn test_credentials_null_fields_load_empty() {
        let creds: CredentialSet =
            serde_json::from_str(r#"{"openai":null,"gemini":"g"}"#).unwrap();
        assert_eq!(creds.openai, "");
        assert_eq!(creds.anthropic, "");
        assert_eq!(creds.gemini, "g");
    }

    #[test]
    fn test_credentials_non_string_fields_load_empty() {
        let creds: CredentialSet =
            serde_json::from_str(r#"{"openai":5,"anthropic":{"k":1},"serverSecret":"s"}"#)
                .unwrap();
        assert_eq!(creds.openai, "");
        assert_eq!(creds.anthropic, "");
        assert_eq!(creds.server_secret, "s");
    }

    #[test]
    fn test_credentials_custom_secret_used() {
        let creds = CredentialSet {
            server_secret: "mine".to_string(),
            ..Default::default()
        };
        assert_eq!(creds.effective_server_secret(), "mine");
    }

    #[test]
    fn test_preferred_provider_order() {
        let mut creds = CredentialSet {
            gemini: "g".to_string(),
            anthropic: "a".to_string(),
            ..Default::default()
        };
        assert_eq!(creds.preferred_provider(), Some(Provider::Anthropic));
        creds.openai = "o".to_string();
        assert_eq!(creds.preferred_provider(), Some(Provider::OpenAi));
    }

    #[test]
    fn test_provider_labels() {
        assert_eq!(Provider::OpenAi.label(), "OpenAI");
        assert_eq!(Provider::Gemini.label(), "Gemini");
        assert_eq!(Provider::all().len(), 3);
        assert_eq!(serde_json::to_string(&Provider::OpenAi).unwrap(), r#""openai""#);
    }

    // ─── Clip Tests ──────────────────────────────────────────

    #[test]
    fn test_clip_deserialize_backend_shape() {
        let clip: Clip = serde_json::from_str(
            r#"{"id":"abc","name":"Clip abc","duration":"Unknown","thumbnail":"/placeholder.svg","type":"video/mp4"}"#,
        )
        .unwrap();
        assert_eq!(clip.id, "abc");
        assert_eq!(clip.kind, "video/mp4");
        assert_eq!(clip.kind_label(), "MP4");
        assert!(clip.has_thumbnail());
        assert!(!clip.is_image());
    }

    #[test]
    fn test_clip_missing_optional_fields() {
        let clip: Clip = serde_json::from_str(r#"{"id":"x","type":"ImageClip"}"#).unwrap();
        assert!(clip.name.is_empty());
        assert!(!clip.has_thumbnail());
        assert!(!clip.is_image());
        assert_eq!(clip.kind_label(), "IMAGECLIP");
    }

    #[test]
    fn test_clip_requires_id() {
        assert!(serde_json::from_str::<Clip>(r#"{"name":"n"}"#).is_err());
    }

    #[test]
    fn test_clip_image_kind() {
        let clip: Clip = serde_json::from_str(r#"{"id":"i","type":"image/png"}"#).unwrap();
        assert!(clip.is_image());
        assert_eq!(clip.kind_label(), "PNG");
    }

    #[test]
    fn test_clip_view_carries_display_fields() {
        let clip: Clip = serde_json::from_str(
            r#"{"id":"i","name":"Still","thumbnail":"/t.png","type":"image/png"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(ClipView::from(&clip)).unwrap();
        assert_eq!(json["id"], "i");
        assert_eq!(json["type"], "image/png");
        assert_eq!(json["kindLabel"], "PNG");
        assert_eq!(json["isImage"], true);
        assert_eq!(json["hasThumbnail"], true);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_client_event_tagged() {
        let json = serde_json::to_value(ClientEvent::ClipsUpdated { count: 3 }).unwrap();
        assert_eq!(json["type"], "ClipsUpdated");
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn test_message_appended_event_role() {
        let json = serde_json::to_string(&ClientEvent::MessageAppended {
            role: Role::User,
            index: 1,
        })
        .unwrap();
        assert!(json.contains(r#""role":"user""#));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.sync.poll_interval_ms, 5_000);
        assert!(config.backend.request_timeout_ms > 0);
        assert!(config.welcome_message.starts_with("Hello!"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"backend":{"base_url":"http://api:9000"}}"#).unwrap();
        assert_eq!(config.backend.base_url, "http://api:9000");
        assert_eq!(config.backend.request_timeout_ms, 120_000);
        assert_eq!(config.sync.poll_interval_ms, 5_000);
    }

    #[test]
    fn test_config_validate_rejects_zero_interval() {
        let mut config = ClientConfig::default();
        config.sync.poll_interval_ms = 0;
        assert!(matches!(config.validate(), Err(StitchError::Config(_))));
    }

    #[test]
    fn test_config_validate_rejects_empty_url() {
        let mut config = ClientConfig::default();
        config.backend.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_join() {
        let mut backend = BackendConfig::default();
        assert_eq!(backend.endpoint("/api/chat"), "http://localhost:8000/api/chat");
        backend.base_url = "http://host/".to_string();
        assert_eq!(backend.endpoint("/api/clips"), "http://host/api/clips");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(StitchError::Timeout(5000).to_string(), "Timeout after 5000ms");
        assert_eq!(
            StitchError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
        let err = StitchError::Backend { status: 400, detail: None };
        assert_eq!(err.to_string(), "Backend returned HTTP 400: Failed to send message");
    }

    #[test]
    fn test_description_prefers_backend_detail() {
        let err = StitchError::Backend {
            status: 400,
            detail: Some("bad key".to_string()),
        };
        assert_eq!(err.description(), "bad key");
    }

    #[test]
    fn test_description_backend_without_detail() {
        let err = StitchError::Backend { status: 500, detail: None };
        assert_eq!(err.description(), GENERIC_SEND_FAILURE);
    }

    #[test]
    fn test_description_transport() {
        let err = StitchError::Network("Failed to fetch".to_string());
        assert_eq!(err.description(), "Failed to fetch");
        assert_eq!(StitchError::Timeout(10).description(), "Timeout after 10ms");
    }

    #[test]
    fn test_description_empty_falls_back() {
        let err = StitchError::Network(String::new());
        assert_eq!(err.description(), "Unknown error");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: StitchError = serde_err.into();
        assert!(matches!(err, StitchError::Serialization(_)));
    }
}
