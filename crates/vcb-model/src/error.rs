//! Error types for loading and validating the content document.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single validation finding, located by a dotted path into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub path: String,
    pub message: String,
}

impl Problem {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Errors raised when static configuration or content is unusable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The content file could not be read.
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON or does not match the schema shape.
    #[error("Content does not match the document schema: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The content parsed but broke one or more validation rules.
    #[error("Content failed validation ({} problem(s))", .problems.len())]
    Invalid { problems: Vec<Problem> },

    /// A tab set was declared inconsistently.
    #[error("Invalid tab configuration: {reason}")]
    InvalidTabs { reason: String },
}

impl ConfigurationError {
    /// Validation problems carried by this error, empty for other variants.
    pub fn problems(&self) -> &[Problem] {
        match self {
            Self::Invalid { problems } => problems,
            _ => &[],
        }
    }

    /// Get a user-friendly message listing every problem.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid { problems } => {
                let mut message = format!("The content has {} problem(s):", problems.len());
                for problem in problems {
                    message.push_str("\n  - ");
                    message.push_str(&problem.to_string());
                }
                message
            }
            other => other.to_string(),
        }
    }
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
