use thiserror::Error;

/// Failure classification for completion calls, surfaced inline in the UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Invalid request: {0}")]
    InvalidArgument(String),

    #[error("Completion failed: {0}")]
    Unknown(String),
}

impl CompletionError {
    /// Classify a transport failure by HTTP status: 429 is rate-limited
    /// (resource exhausted), 400 a malformed request, anything else
    /// unknown.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            429 => CompletionError::RateLimited(message),
            400 => CompletionError::InvalidArgument(message),
            _ => CompletionError::Unknown(message),
        }
    }

    /// The message shown to the coach.
    pub fn user_message(&self) -> String {
        match self {
            CompletionError::RateLimited(_) => {
                "Rate limit exceeded. Please wait and try again.".to_string()
            }
            CompletionError::InvalidArgument(msg) | CompletionError::Unknown(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            CompletionError::from_status(429, "too many requests"),
            CompletionError::RateLimited(_)
        ));
        assert!(matches!(
            CompletionError::from_status(400, "bad schema"),
            CompletionError::InvalidArgument(_)
        ));
        assert!(matches!(
            CompletionError::from_status(500, "server error"),
            CompletionError::Unknown(_)
        ));
    }

    #[test]
    fn test_rate_limit_user_message() {
        let err = CompletionError::from_status(429, "quota exceeded");
        assert_eq!(err.user_message(), "Rate limit exceeded. Please wait and try again.");
    }
}
