use std::fmt;

/// Result type for frame decoding
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Error raised when a stream frame cannot be turned into an event
#[derive(Debug)]
pub enum DecodeError {
    /// Frame data is not valid JSON
    Json(serde_json::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Json(err) => write!(f, "Invalid event payload: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err)
    }
}
