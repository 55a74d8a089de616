use std::fmt;

/// Errors raised while configuring a run (arguments, spawn scripts)
#[derive(Debug)]
pub enum ConfigError {
    /// IO operation failed
    IoError(std::io::Error),
    /// Invalid line format in a spawn script
    InvalidLine(String),
    /// Invalid `X,Y` point
    InvalidPoint(String),
    /// Argument outside its accepted range
    InvalidArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(err) => write!(f, "IO error: {}", err),
            ConfigError::InvalidLine(msg) => write!(f, "Invalid line: {}", msg),
            ConfigError::InvalidPoint(point) => write!(f, "Invalid point: {}", point),
            ConfigError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ConfigError>;
