//! Error types and Result aliases for the AEI driver

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the AEI driver
#[derive(Debug)]
pub enum Error {
    // === Engine process errors ===
    /// Failed to spawn the engine binary
    SpawnFailed {
        command: String,
        reason: String,
    },

    /// The spawned child did not expose one of its pipes
    PipeUnavailable {
        command: String,
        stream: String,
    },

    /// Failed to write a command to the engine's stdin
    CommandSend {
        command: String,
        reason: String,
    },

    /// The engine closed its output stream before producing the awaited line
    EngineExited {
        wanted: String,
    },

    /// The wait deadline elapsed before the awaited line appeared
    Timeout {
        wanted: String,
        waited: Duration,
    },

    /// Failed to reap the engine process during shutdown
    ShutdownFailed {
        reason: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to save configuration file
    ConfigSaveFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    /// Failed to serialize configuration
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Engine process errors
            Error::SpawnFailed { command, reason } => {
                write!(f, "Failed to spawn engine '{}': {}", command, reason)
            }
            Error::PipeUnavailable { command, stream } => {
                write!(f, "Engine '{}' has no {} pipe", command, stream)
            }
            Error::CommandSend { command, reason } => {
                write!(f, "Failed to send '{}' to engine: {}", command, reason)
            }
            Error::EngineExited { wanted } => {
                write!(
                    f,
                    "Engine exited without producing a '{}' line",
                    wanted
                )
            }
            Error::Timeout { wanted, waited } => {
                write!(
                    f,
                    "No '{}' line from engine within {:?}",
                    wanted, waited
                )
            }
            Error::ShutdownFailed { reason } => {
                write!(f, "Failed to reap engine process: {}", reason)
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigSaveFailed { path, reason } => {
                write!(f, "Failed to save config to '{}': {}", path.display(), reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_display() {
        let err = Error::SpawnFailed {
            command: "./sharp2015.exe".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("./sharp2015.exe"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_timeout_display_names_the_awaited_prefix() {
        let err = Error::Timeout {
            wanted: "bestmove".to_string(),
            waited: Duration::from_secs(300),
        };
        assert!(err.to_string().contains("bestmove"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
