use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Insufficient text: no usable sentences or key phrases")]
    InsufficientText,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Text shown to the person chatting with the bot.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::EmptyInput => "⚠️ Please enter some text to generate questions.",
            AppError::InsufficientText => {
                "⚠️ Please provide more detailed text (at least a few sentences)."
            }
            AppError::ConfigError(_) => "⚠️ The bot is misconfigured, please try again later.",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::ConfigError("bad value".into());
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_user_messages_differ_per_input_error() {
        assert_ne!(
            AppError::EmptyInput.user_message(),
            AppError::InsufficientText.user_message()
        );
        assert!(AppError::InsufficientText
            .user_message()
            .contains("more detailed text"));
    }

    #[test]
    fn test_io_error_becomes_config_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "stop_words.txt");
        assert!(matches!(AppError::from(io), AppError::ConfigError(_)));
    }
}
