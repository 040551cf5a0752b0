use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Identity request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Identity endpoint returned status {status}")]
    IdentityStatusError { status: u16 },

    #[error("Malformed identity payload: {message}")]
    MalformedIdentityError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Network,
    Payload,
    Io,
}

impl RouteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RouteError::IoError(_) => ErrorCategory::Io,
            RouteError::HttpError(_) | RouteError::IdentityStatusError { .. } => {
                ErrorCategory::Network
            }
            RouteError::SerializationError(_) | RouteError::MalformedIdentityError { .. } => {
                ErrorCategory::Payload
            }
            RouteError::ConfigError { .. }
            | RouteError::InvalidConfigValueError { .. }
            | RouteError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Network => "Could not reach the identity service".to_string(),
            ErrorCategory::Payload => "The identity service sent an unexpected response".to_string(),
            ErrorCategory::Io => format!("File access failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = RouteError::MissingConfigError {
            field: "auth.identity_endpoint".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.user_friendly_message().contains("auth.identity_endpoint"));

        let err = RouteError::IdentityStatusError { status: 401 };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.to_string(), "Identity endpoint returned status 401");
    }
}
