use thiserror::Error;

/// Error types for the FizzBuzz engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FizzBuzzError {
    /// The builder was given a range that cannot be generated
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl FizzBuzzError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// The message without the error kind prefix
    pub fn message(&self) -> &str {
        match self {
            FizzBuzzError::InvalidConfiguration { message } => message,
        }
    }
}
