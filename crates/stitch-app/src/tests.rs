#[cfg(test)]
mod tests {
    use crate::client::parse_config;
    use stitch_types::StitchError;

    #[test]
    fn test_parse_config_none_is_default() {
        let config = parse_config(None).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.sync.poll_interval_ms, 5_000);
    }

    #[test]
    fn test_parse_config_blank_is_default() {
        assert!(parse_config(Some("   ")).is_ok());
    }

    #[test]
    fn test_parse_config_partial() {
        let config =
            parse_config(Some(r#"{"sync":{"poll_interval_ms":2000},"welcome_message":"Hi"}"#))
                .unwrap();
        assert_eq!(config.sync.poll_interval_ms, 2_000);
        assert_eq!(config.sync.request_timeout_ms, 10_000);
        assert_eq!(config.welcome_message, "Hi");
    }

    #[test]
    fn test_parse_config_invalid_json() {
        assert!(matches!(
            parse_config(Some("{base_url")),
            Err(StitchError::Serialization(_))
        ));
    }

    #[test]
    fn test_parse_config_rejects_zero_interval() {
        assert!(matches!(
            parse_config(Some(r#"{"sync":{"poll_interval_ms":0}}"#)),
            Err(StitchError::Config(_))
        ));
    }
}
