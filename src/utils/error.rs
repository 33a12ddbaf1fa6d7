use crate::domain::model::Coord;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReachError {
    #[error("Input file not readable: {}: {source}", .path.display())]
    FileNotFoundError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line} ({content:?}): {reason}")]
    FormatError {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("No source record ('*') found in input")]
    MissingSourceError,

    #[error("Duplicate source on line {line}: {second} (first source at {first})")]
    DuplicateSourceError {
        first: Coord,
        second: Coord,
        line: usize,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ReachError {
    pub fn format(line: usize, content: &str, reason: impl Into<String>) -> Self {
        ReachError::FormatError {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ReachError::FileNotFoundError { .. }
            | ReachError::FormatError { .. }
            | ReachError::MissingSourceError
            | ReachError::DuplicateSourceError { .. } => ErrorCategory::Input,
            ReachError::ConfigError { .. } | ReachError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ReachError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定的程序退出碼
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReachError::FileNotFoundError { path, .. } => {
                format!("Cannot read input file '{}'", path.display())
            }
            ReachError::FormatError { line, reason, .. } => {
                format!("Line {} is not a valid '<tag> <x> <y>' record: {}", line, reason)
            }
            ReachError::MissingSourceError => "The input has no source cell ('*')".to_string(),
            ReachError::DuplicateSourceError { line, .. } => {
                format!("The input defines more than one source cell (again on line {})", line)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReachError::FileNotFoundError { .. } => {
                "Check that the input path exists and is readable"
            }
            ReachError::FormatError { .. } => {
                "Fix the record or rerun with --skip-malformed to ignore bad lines"
            }
            ReachError::MissingSourceError => "Add exactly one '* <x> <y>' record to the input",
            ReachError::DuplicateSourceError { .. } => {
                "Remove the extra '*' records or drop --strict-source"
            }
            ReachError::ConfigError { .. } | ReachError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the TOML configuration file"
            }
            ReachError::SerializationError(_) => "Retry with --format text and report the failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReachError>;
