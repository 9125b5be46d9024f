use shrt::errors::{Result, ShrtError};
use std::collections::HashSet;
use std::error::Error;

fn all_variants() -> Vec<ShrtError> {
    vec![
        ShrtError::authentication("a"),
        ShrtError::server("b"),
        ShrtError::request("c"),
        ShrtError::unexpected_status(404, "d"),
        ShrtError::timeout("e"),
        ShrtError::network("f"),
        ShrtError::decode("g"),
        ShrtError::configuration("h"),
        ShrtError::validation("i"),
        ShrtError::clipboard("j"),
        ShrtError::file_operation("k"),
    ]
}

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_authentication_error() {
        let error = ShrtError::authentication("Unauthorized");

        assert!(matches!(error, ShrtError::Authentication(_)));
        assert_eq!(error.to_string(), "Authentication Error: Unauthorized");
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_server_error() {
        let error = ShrtError::server("Internal Server Error");

        assert!(matches!(error, ShrtError::Server(_)));
        assert!(error.to_string().contains("Server Error"));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_unexpected_status_error() {
        let error = ShrtError::unexpected_status(404, "gone");

        assert_eq!(error.status(), Some(404));
        assert_eq!(error.to_string(), "Unexpected Status (HTTP 404): gone");
    }

    #[test]
    fn test_local_errors_have_no_status() {
        for error in [
            ShrtError::timeout("t"),
            ShrtError::network("n"),
            ShrtError::decode("d"),
            ShrtError::configuration("c"),
        ] {
            assert_eq!(error.status(), None, "{:?}", error);
        }
    }
}

#[cfg(test)]
mod error_code_tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = all_variants().iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), all_variants().len());
    }

    #[test]
    fn test_message_is_preserved() {
        let messages: Vec<String> = all_variants()
            .iter()
            .map(|e| e.message().to_string())
            .collect();
        assert_eq!(
            messages,
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
        );
    }

    #[test]
    fn test_format_colored_contains_code_and_message() {
        for error in all_variants() {
            let rendered = error.format_colored();
            assert!(rendered.contains(error.code()));
            assert!(rendered.contains(error.message()));
        }
    }
}

#[cfg(test)]
mod api_detail_tests {
    use super::*;

    #[test]
    fn test_request_error_exposes_problem_details() {
        let error = ShrtError::request(
            r#"{"title":"Invalid custom slug","type":"https://shlink.io/api/error/non-unique-slug","detail":"Slug already in use","status":400}"#,
        );

        let detail = error.api_error_detail().unwrap();
        assert_eq!(detail.title, "Invalid custom slug");
        assert_eq!(detail.status, 400);
        assert!(error.format_colored().contains("Slug already in use"));
    }

    #[test]
    fn test_non_json_body_falls_back_to_raw_text() {
        let error = ShrtError::request("plain text failure");

        assert!(error.api_error_detail().is_none());
        assert!(error.format_colored().contains("plain text failure"));
    }

    #[test]
    fn test_other_variants_have_no_detail() {
        let error = ShrtError::authentication(r#"{"detail":"x"}"#);
        assert!(error.api_error_detail().is_none());
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: ShrtError = err.into();
        assert!(matches!(error, ShrtError::Decode(_)));
    }

    #[test]
    fn test_from_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ShrtError = err.into();
        assert!(matches!(error, ShrtError::FileOperation(_)));
        assert!(error.message().contains("denied"));
    }

    #[test]
    fn test_from_config_error() {
        let err = config::ConfigError::Message("bad value".to_string());
        let error: ShrtError = err.into();
        assert!(matches!(error, ShrtError::Configuration(_)));
        assert!(error.message().contains("bad value"));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("[")?)
        }
        assert!(matches!(parse(), Err(ShrtError::Decode(_))));
    }

    #[test]
    fn test_implements_std_error() {
        let error = ShrtError::network("refused");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
        assert_eq!(dyn_error.to_string(), "Network Error: refused");
    }
}
