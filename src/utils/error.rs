use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Missing configuration: {field}")]
    MissingConfiguration { field: String },

    #[error("API error: {message}")]
    DataUnavailable { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    FileSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::MissingConfiguration { .. }
            | ReportError::InvalidConfigValue { .. }
            | ReportError::ConfigParse { .. }
            | ReportError::UrlError(_) => ErrorCategory::Configuration,
            ReportError::ApiError(_) => ErrorCategory::Network,
            ReportError::DataUnavailable { .. } | ReportError::SerializationError(_) => {
                ErrorCategory::Data
            }
            ReportError::IoError(_) => ErrorCategory::FileSystem,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::MissingConfiguration { field } => {
                format!("Missing Configuration: {}", field)
            }
            ReportError::DataUnavailable { .. } => {
                "API Error: Could not retrieve data".to_string()
            }
            ReportError::ApiError(e) if e.is_connect() => {
                "Could not connect to the board API".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check boardId, auth.key and auth.token in the configuration file"
            }
            ErrorCategory::Network => "Check your network connection and the board API address",
            ErrorCategory::Data => "Verify the board id and that the API credentials can read it",
            ErrorCategory::FileSystem => "Make sure the reports directory is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_names_field() {
        let err = ReportError::MissingConfiguration {
            field: "auth.token".to_string(),
        };
        assert_eq!(err.to_string(), "Missing configuration: auth.token");
        assert_eq!(err.user_friendly_message(), "Missing Configuration: auth.token");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_data_unavailable_category() {
        let err = ReportError::DataUnavailable {
            message: "response has no actions".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.user_friendly_message(), "API Error: Could not retrieve data");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = ReportError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
