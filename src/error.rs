use std::fmt;

/// Errors that can occur while loading settings or rendering reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A renderer was given nothing to render
    EmptyInput(&'static str),
    /// A setting was present but could not be interpreted
    InvalidSetting {
        key: String,
        value: String,
        message: String,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::EmptyInput(what) => write!(f, "Empty input: no {}", what),
            ReportError::InvalidSetting {
                key,
                value,
                message,
            } => write!(f, "Invalid setting {}={:?}: {}", key, value, message),
        }
    }
}

impl std::error::Error for ReportError {}
