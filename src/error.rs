use thiserror::Error;

/// Main error type for the order form
#[derive(Error, Debug)]
pub enum FormError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    // Event parsing errors
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    // Terminal errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for FormError
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_event_message() {
        let err = FormError::InvalidEvent("slider=abc".to_string());
        assert_eq!(err.to_string(), "Invalid event: slider=abc");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        let err: FormError = io.into();
        assert!(matches!(err, FormError::Io(_)));
        assert!(err.to_string().contains("no tty"));
    }

    #[test]
    fn test_json_conversion() {
        let err: FormError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON serialization error"));
    }
}
