//! Domain-specific error types for insight-synth

use thiserror::Error;

/// Main error type for the insight synthesis pipeline
#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP error: {message}")]
    Http { message: String },

    #[error("Model provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Model reply was not a JSON array of insight cards ({} bytes)", .raw.len())]
    UnparseableReply { raw: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for SynthError {
    fn from(err: anyhow::Error) -> Self {
        SynthError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SynthError {
    fn from(err: serde_json::Error) -> Self {
        SynthError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SynthError {
    fn from(err: toml::de::Error) -> Self {
        SynthError::Config {
            message: format!("invalid TOML: {}", err),
        }
    }
}

impl From<reqwest::Error> for SynthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SynthError::Http {
                message: format!("request timed out: {}", err),
            };
        }
        SynthError::Http {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<std::io::Error> for SynthError {
    fn from(err: std::io::Error) -> Self {
        SynthError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type alias for insight-synth operations
pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_mentions_status_and_body() {
        let err = SynthError::Provider {
            status: 403,
            body: "API key not valid".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("API key not valid"));
    }

    #[test]
    fn unparseable_reply_reports_size_not_content() {
        let err = SynthError::UnparseableReply {
            raw: "sorry, I can't".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Model reply was not a JSON array of insight cards (14 bytes)"
        );
    }

    #[test]
    fn json_errors_map_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SynthError = json_err.into();
        assert!(matches!(err, SynthError::Serialization { .. }));
    }
}
