//! Error types for quotebook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quotebook
#[derive(Debug, Error)]
pub enum QuotebookError {
    #[error("Not a quotebook directory: {0}")]
    NotQuotebookDirectory(PathBuf),

    #[error("Invalid quote: {0}")]
    Validation(String),

    #[error("Invalid import file: {0}")]
    ImportFormat(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Corrupt stored data: {0}")]
    StorageParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<reqwest::Error> for QuotebookError {
    fn from(err: reqwest::Error) -> Self {
        QuotebookError::Network(err.to_string())
    }
}

impl QuotebookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuotebookError::NotQuotebookDirectory(_) => 2,
            QuotebookError::Validation(_) => 3,
            QuotebookError::ImportFormat(_) => 4,
            QuotebookError::Network(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuotebookError::NotQuotebookDirectory(path) => {
                format!(
                    "Not a quotebook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quotebook init' in this directory to create a new quotebook\n\
                    • Navigate to an existing quotebook directory\n\
                    • Set QUOTEBOOK_ROOT environment variable to your quotebook path",
                    path.display()
                )
            }
            QuotebookError::Validation(msg) => {
                format!(
                    "Invalid quote: {}\n\n\
                    Please enter both quote text and category.\n\
                    Example: quotebook add \"Stay hungry\" Motivation",
                    msg
                )
            }
            QuotebookError::ImportFormat(msg) => {
                format!(
                    "Invalid import file: {}\n\n\
                    Expected a JSON array of quotes, e.g.:\n\
                    [{{\"text\": \"Stay hungry\", \"category\": \"Motivation\"}}]",
                    msg
                )
            }
            QuotebookError::Network(msg) => {
                format!(
                    "Network error: {}\n\n\
                    Suggestions:\n\
                    • Check your network connection\n\
                    • Check the remote endpoint: quotebook config remote_url",
                    msg
                )
            }
            QuotebookError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: quotebook config sync_interval_secs 120",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuotebookError
pub type Result<T> = std::result::Result<T, QuotebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_quotebook_directory_suggestion() {
        let err = QuotebookError::NotQuotebookDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("quotebook init"));
        assert!(msg.contains("QUOTEBOOK_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_validation_suggestion() {
        let err = QuotebookError::Validation("text must not be empty".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("both quote text and category"));
        assert!(msg.contains("quotebook add"));
    }

    #[test]
    fn test_import_format_shows_example() {
        let err = QuotebookError::ImportFormat("expected a JSON array".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("JSON array"));
        assert!(msg.contains("\"category\""));
    }

    #[test]
    fn test_network_suggestions() {
        let err = QuotebookError::Network("connection refused".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("connection refused"));
        assert!(msg.contains("remote_url"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            QuotebookError::NotQuotebookDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(QuotebookError::Validation(String::new()).exit_code(), 3);
        assert_eq!(QuotebookError::ImportFormat(String::new()).exit_code(), 4);
        assert_eq!(QuotebookError::Network(String::new()).exit_code(), 5);
        assert_eq!(QuotebookError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = QuotebookError::StorageParse("bad json".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Corrupt stored data: bad json");
    }
}
