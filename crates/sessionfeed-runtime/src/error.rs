use std::fmt;

/// Result type for sessionfeed-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a viewer before it mounts
#[derive(Debug)]
pub enum Error {
    /// Missing or invalid configuration value
    Config(String),

    /// Events URL cannot be used as a stream endpoint
    InvalidUrl(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Config file could not be parsed or written
    Toml(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidUrl(msg) => write!(f, "Invalid events URL: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Toml(msg) => write!(f, "Config file error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::InvalidUrl(_) | Error::Toml(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Toml(err.to_string())
    }
}

/// Connection-level failure. Never fatal: the connection retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Request could not be sent or the connection was refused
    Connect(String),

    /// Server answered with a non-success status
    Status(u16),

    /// Server answered with something other than an event stream
    ContentType(String),

    /// Reading the response body failed mid-stream
    Read(String),

    /// Server closed the stream
    Ended,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect(msg) => write!(f, "connection failed: {}", msg),
            TransportError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            TransportError::ContentType(ct) => {
                write!(f, "unexpected content type '{}'", ct)
            }
            TransportError::Read(msg) => write!(f, "stream read failed: {}", msg),
            TransportError::Ended => write!(f, "stream ended by server"),
        }
    }
}

impl std::error::Error for TransportError {}
