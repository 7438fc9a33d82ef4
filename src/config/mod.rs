//! Configuration management for the AEI driver
//!
//! Provides the configuration structures for the engine invocation and
//! the session's wait behavior, plus loading/saving via [`loader`].

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure for the driver
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Engine invocation configuration
    pub engine: EngineConfig,

    /// Session wait-loop configuration
    pub session: SessionConfig,
}

/// How to launch the engine binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine executable path
    pub command: PathBuf,

    /// Arguments passed to the engine
    pub args: Vec<String>,

    /// Working directory for the engine process
    pub working_directory: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: PathBuf::from("./sharp2015.exe"),
            args: vec!["aei".to_string()],
            working_directory: None,
        }
    }
}

/// Wait-loop behavior for the response waiter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long each poll of the output queue waits, in milliseconds
    pub poll_interval_ms: u64,

    /// Total deadline for a result line, in seconds
    pub wait_deadline_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            wait_deadline_secs: 300,
        }
    }
}

impl SessionConfig {
    /// Poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Wait deadline as a [`Duration`]
    pub fn wait_deadline(&self) -> Duration {
        Duration::from_secs(self.wait_deadline_secs)
    }
}

impl Config {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.engine.command.as_os_str().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "engine.command".to_string(),
                reason: "engine command must not be empty".to_string(),
            });
        }
        if self.session.poll_interval_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "session.poll_interval_ms".to_string(),
                reason: "poll interval must be greater than zero".to_string(),
            });
        }
        if self.session.wait_deadline_secs == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "session.wait_deadline_secs".to_string(),
                reason: "wait deadline must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_invocation() {
        let config = Config::default();
        assert_eq!(config.engine.command, PathBuf::from("./sharp2015.exe"));
        assert_eq!(config.engine.args, vec!["aei".to_string()]);
        assert!(config.engine.working_directory.is_none());
    }

    #[test]
    fn test_default_session_timings() {
        let config = SessionConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
        assert_eq!(config.wait_deadline(), Duration::from_secs(300));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_command_fails_validation() {
        let mut config = Config::default();
        config.engine.command = PathBuf::new();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::ConfigValidationFailed { ref field, .. } if field == "engine.command"
        ));
    }

    #[test]
    fn test_zero_poll_interval_fails_validation() {
        let mut config = Config::default();
        config.session.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }
}
