use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessenError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Dataset could not be loaded ({status}) from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Cache error: {message}")]
    CacheError { message: String },

    #[error("No lesson table for grade '{grade}' and program '{slug}'")]
    NoMatchError { grade: String, slug: String },

    #[error("Dataset has not been loaded yet")]
    NotLoadedError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Cache,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LessenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessenError::ApiError(_) | LessenError::HttpStatusError { .. } => ErrorCategory::Network,
            LessenError::CsvError(_)
            | LessenError::SerializationError(_)
            | LessenError::NoMatchError { .. }
            | LessenError::NotLoadedError => ErrorCategory::Data,
            LessenError::CacheError { .. } => ErrorCategory::Cache,
            LessenError::ConfigValidationError { .. }
            | LessenError::InvalidConfigValueError { .. }
            | LessenError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LessenError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Cache => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Fetch failures can be retried by the user; nothing else can.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Network
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LessenError::ApiError(_) => "Check the network connection and run again with --retry",
            LessenError::HttpStatusError { .. } => {
                "Check that --source-url points to the published dataset and try again"
            }
            LessenError::NoMatchError { .. } => {
                "Run the `menu` command to list the available programs and their links"
            }
            LessenError::NotLoadedError => "Load the dataset before opening a program",
            LessenError::CacheError { .. } => "Remove the cache directory or run with --no-cache",
            LessenError::SerializationError(_) => "Run again with --verbose to see the failing value",
            LessenError::ConfigValidationError { .. }
            | LessenError::InvalidConfigValueError { .. }
            | LessenError::MissingConfigError { .. } => "Fix the configuration value and run again",
            LessenError::CsvError(_) | LessenError::IoError(_) => {
                "Check that the output path is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LessenError::ApiError(_) | LessenError::HttpStatusError { .. } => {
                format!("Er is een probleem opgetreden: {}", self)
            }
            LessenError::NoMatchError { .. } => {
                "Geen lessentabel beschikbaar voor deze richting.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LessenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_are_retryable() {
        let err = LessenError::HttpStatusError {
            status: 404,
            url: "https://example.com/data.csv".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_no_match_is_not_retryable() {
        let err = LessenError::NoMatchError {
            grade: "TWEEDE GRAAD".to_string(),
            slug: "onbestaand".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(
            err.user_friendly_message(),
            "Geen lessentabel beschikbaar voor deze richting."
        );
    }
}
