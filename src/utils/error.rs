use crate::domain::model::SourceFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Error reading {format} file {}: {source}", path.display())]
    FileAccess {
        format: SourceFormat,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error finding Markdown file: {file_name} not found under {}", root.display())]
    NotFound { file_name: String, root: PathBuf },

    #[error("Error walking directory {}: {source}", root.display())]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Lookup,
    Configuration,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::FileAccess { .. } | CheckError::Traversal { .. } | CheckError::Output(_) => {
                ErrorCategory::Io
            }
            CheckError::NotFound { .. } => ErrorCategory::Lookup,
            CheckError::Config { .. } | CheckError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 給終端使用者看的單行訊息
    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::FileAccess { format: SourceFormat::Definition, .. } => {
                "Check that the source file path exists and is readable"
            }
            CheckError::FileAccess { format: SourceFormat::Documentation, .. } => {
                "Check the permissions of the documentation file"
            }
            CheckError::NotFound { .. } => {
                "Add the documentation page or check the repository root argument"
            }
            CheckError::Traversal { .. } => {
                "Make sure the docs directory exists and can be listed"
            }
            CheckError::Output(_) => "Check that standard output is writable",
            CheckError::Config { .. } | CheckError::InvalidConfigValue { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_file_and_root() {
        let err = CheckError::NotFound {
            file_name: "widget.html.markdown".to_string(),
            root: PathBuf::from("/repo/website/docs/r"),
        };
        let message = err.user_friendly_message();
        assert!(message.starts_with("Error finding Markdown file"));
        assert!(message.contains("widget.html.markdown"));
        assert!(message.contains("/repo/website/docs/r"));
        assert_eq!(err.category(), ErrorCategory::Lookup);
    }

    #[test]
    fn test_file_access_message_names_format() {
        let err = CheckError::FileAccess {
            format: SourceFormat::Definition,
            path: PathBuf::from("widget_resource.go"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("Error reading Go file"));
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
