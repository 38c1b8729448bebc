use std::fmt;
use std::path::PathBuf;

/// Error produced when a single dependency or environment variable line
/// cannot be decoded. Never fatal: at most one line's data is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The row marker is neither `-` (basic) nor `|` (extended)
    UnknownPrefix { line: String },

    /// Bracket/brace structure does not match the dependency grammar
    MalformedDependency { line: String },

    /// Category token outside the closed set
    UnknownCategory { value: String },

    /// Environment variable line without `=`
    MissingSeparator { line: String },

    /// Environment variable line whose key (text before the first `=`) is empty
    EmptyKey { line: String },
}

impl FormatError {
    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            FormatError::UnknownPrefix { .. } => "UnknownPrefix",
            FormatError::MalformedDependency { .. } => "MalformedDependency",
            FormatError::UnknownCategory { .. } => "UnknownCategory",
            FormatError::MissingSeparator { .. } => "MissingSeparator",
            FormatError::EmptyKey { .. } => "EmptyKey",
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownPrefix { line } => {
                write!(f, "Unknown row prefix (expected '-' or '|'): {:?}", line)
            }
            FormatError::MalformedDependency { line } => {
                write!(f, "Malformed dependency line: {:?}", line)
            }
            FormatError::UnknownCategory { value } => write!(
                f,
                "Unknown dependency category {:?} (expected one of PYTHON, LOCAL, PyPI, Apt, DockerHub)",
                value
            ),
            FormatError::MissingSeparator { line } => {
                write!(f, "Environment variable is missing '=': {:?}", line)
            }
            FormatError::EmptyKey { line } => {
                write!(f, "Environment variable has an empty key: {:?}", line)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Custom error type for blueprint operations
#[derive(Debug)]
pub enum Error {
    /// JSON parsing or serialization errors
    Json { path: PathBuf, source: serde_json::Error },

    /// One or more lines of a blueprint could not be decoded
    InvalidLines { path: PathBuf, count: usize },

    /// Errors related to file operations
    FileOperation { path: PathBuf, message: String },

    /// General errors
    General(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json { path, source } => {
                write!(f, "JSON error in {}: {}", path.display(), source)
            }
            Error::InvalidLines { path, count } => write!(
                f,
                "{} invalid line(s) in {}",
                count,
                path.display()
            ),
            Error::FileOperation { path, message } => {
                write!(f, "File operation error on {}: {}", path.display(), message)
            }
            Error::General(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error {
    /// Check if the error message contains a specific string
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Error::FileOperation { path: _, message } => message.contains(needle),
            _ => self.to_string().contains(needle),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for blueprint operations
pub type Result<T> = std::result::Result<T, Error>;
