// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use money_stories_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_vault_format() {
        let err = CoreError::InvalidVaultFormat("bad header".into());
        assert_eq!(err.to_string(), "Invalid vault format: bad header");
    }

    #[test]
    fn unsupported_version() {
        let err = CoreError::UnsupportedVersion(99);
        assert_eq!(err.to_string(), "Unsupported vault version: 99");
    }

    #[test]
    fn encryption() {
        let err = CoreError::Encryption("AES key size invalid".into());
        assert_eq!(err.to_string(), "Encryption failed: AES key size invalid");
    }

    #[test]
    fn decryption() {
        let err = CoreError::Decryption;
        assert_eq!(
            err.to_string(),
            "Decryption failed — wrong password or corrupted vault"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("buffer overflow".into());
        assert_eq!(err.to_string(), "Serialization error: buffer overflow");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn store_error() {
        let err = CoreError::Store {
            store: "rest".into(),
            message: "stories query returned HTTP 503".into(),
        };
        assert_eq!(
            err.to_string(),
            "Store error (rest): stories query returned HTTP 503"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("service_url is not set".into());
        assert_eq!(err.to_string(), "Configuration error: service_url is not set");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("Story title is required".into());
        assert_eq!(err.to_string(), "Validation failed: Story title is required");
    }

    #[test]
    fn story_not_found() {
        let err = CoreError::StoryNotFound("abc-123".into());
        assert_eq!(err.to_string(), "Story not found: abc-123");
    }

    #[test]
    fn goal_not_found() {
        let err = CoreError::GoalNotFound("def-456".into());
        assert_eq!(err.to_string(), "Goal not found: def-456");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let core_err: CoreError = io_err.into();
        match &core_err {
            CoreError::FileIO(msg) => assert!(msg.contains("gone")),
            other => panic!("Expected FileIO, got {:?}", other),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("");
        let json_err = result.unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Deserialization(msg) => assert!(msg.contains("EOF")),
            other => panic!("Expected Deserialization, got {:?}", other),
        }
    }

    #[test]
    fn from_bincode_error() {
        let result: Result<String, _> = bincode::deserialize(&[0xFF]);
        let bin_err = result.unwrap_err();
        let core_err: CoreError = bin_err.into();
        assert!(matches!(core_err, CoreError::Serialization(_)));
    }

    #[test]
    fn from_aes_gcm_error_via_open() {
        use money_stories_core::storage::cipher::{open, seal, KEY_LEN, NONCE_LEN};

        let key = [1u8; KEY_LEN];
        let nonce = [2u8; NONCE_LEN];
        let ciphertext = seal(b"hello world", &key, &nonce).unwrap();

        let wrong_key = [9u8; KEY_LEN];
        match open(&ciphertext, &wrong_key, &nonce) {
            Err(CoreError::Decryption) => {}
            other => panic!("Expected Decryption, got {:?}", other),
        }
    }
}

// ── Error is std::error::Error ──────────────────────────────────────

mod std_error {
    use super::*;

    #[test]
    fn implements_error_trait() {
        let err: Box<dyn std::error::Error> =
            Box::new(CoreError::InvalidVaultFormat("test".into()));
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn implements_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<CoreError>();
        assert_sync::<CoreError>();
    }
}

// ── Edge cases ──────────────────────────────────────────────────────

mod edge_cases {
    use super::*;

    #[test]
    fn very_long_error_message() {
        let long_msg = "x".repeat(10_000);
        let err = CoreError::Encryption(long_msg.clone());
        assert_eq!(err.to_string(), format!("Encryption failed: {}", long_msg));
    }

    #[test]
    fn unicode_in_error_message() {
        let err = CoreError::Store {
            store: "ローカル".into(),
            message: "接続エラー".into(),
        };
        assert_eq!(err.to_string(), "Store error (ローカル): 接続エラー");
    }

    #[test]
    fn newlines_survive_display() {
        let err = CoreError::FileIO("line1\nline2".into());
        assert!(err.to_string().contains("line1\nline2"));
    }
}
