use thiserror::Error;

/// Errors surfaced by data loading and local persistence
#[derive(Debug, Error)]
pub enum AppError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to decode {what}: {message}")]
    Decode { what: &'static str, message: String },

    #[error("failed to write `{key}` to local storage")]
    StorageWrite { key: String },

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_displayable() {
        assert_eq!(AppError::Status(404).to_string(), "server responded with status 404");
        let err = AppError::Decode {
            what: "school directory",
            message: "expected array".into(),
        };
        assert_eq!(err.to_string(), "failed to decode school directory: expected array");
    }
}
