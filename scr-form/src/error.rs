/// Error types for a form submission
use thiserror::Error;

/// Shown when the form is submitted without a soil.
pub const VALIDATION_MESSAGE: &str = "Please select a soil type.";

/// Shown when the endpoint answers with a non-success status.
pub const NETWORK_ERROR_MESSAGE: &str = "Network response was not ok";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Nothing selected; never reaches the network
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    /// Endpoint answered with a non-success status
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network { status: u16 },

    /// Request never completed (connection refused, fetch rejected, ...)
    #[error("{0}")]
    Transport(String),

    /// Body was not valid JSON or not the expected shape
    #[error("{0}")]
    Parse(String),

    /// Successful response carrying an `error` field
    #[error("{0}")]
    Remote(String),
}

impl FormError {
    /// Text for the error panel.
    pub fn user_message(&self) -> String {
        match self {
            FormError::Validation => self.to_string(),
            other => format!("Error: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_not_prefixed() {
        assert_eq!(FormError::Validation.user_message(), "Please select a soil type.");
    }

    #[test]
    fn remote_message_is_prefixed() {
        assert_eq!(
            FormError::Remote("soil not found".to_string()).user_message(),
            "Error: soil not found"
        );
    }

    #[test]
    fn network_message_hides_status() {
        assert_eq!(
            FormError::Network { status: 503 }.user_message(),
            "Error: Network response was not ok"
        );
    }
}
