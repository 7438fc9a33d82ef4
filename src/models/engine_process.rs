//! Engine Process Model
//!
//! Tracks the lifecycle of the external engine child process: identity,
//! state, timestamps and the exit code recorded when the process is
//! reaped. The OS handles themselves (child, pipes) live on the session;
//! this model is the bookkeeping that outlives them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the state of the engine process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EngineState {
    /// Process has been created but not started
    #[default]
    Created,
    /// Process is currently running
    Running,
    /// Process has terminated and been reaped
    Terminated,
}

/// Lifecycle record of one engine child process
#[derive(Debug, Clone)]
pub struct EngineProcess {
    /// OS process identifier
    pub pid: Option<u32>,

    /// Current state of the process
    pub state: EngineState,

    /// When the process was started
    pub start_time: Option<DateTime<Utc>>,

    /// When the process was reaped (if applicable)
    pub end_time: Option<DateTime<Utc>>,

    /// Exit code (if the process has terminated and reported one)
    pub exit_code: Option<i32>,

    /// Engine binary that was executed
    pub command: String,

    /// Arguments passed to the engine
    pub args: Vec<String>,
}

impl EngineProcess {
    /// Create a new engine process record in the Created state
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self {
            pid: None,
            state: EngineState::Created,
            start_time: None,
            end_time: None,
            exit_code: None,
            command,
            args,
        }
    }

    /// Mark the process as started with the given PID
    pub fn mark_started(&mut self, pid: u32) {
        self.pid = Some(pid);
        self.state = EngineState::Running;
        self.start_time = Some(Utc::now());
    }

    /// Mark the process as reaped with the given exit code, if any.
    ///
    /// The code is `None` when the process was killed by a signal.
    pub fn mark_terminated(&mut self, exit_code: Option<i32>) {
        self.state = EngineState::Terminated;
        self.end_time = Some(Utc::now());
        self.exit_code = exit_code;
    }

    /// Check if the process is currently running
    pub fn is_running(&self) -> bool {
        matches!(self.state, EngineState::Running)
    }

    /// Check if the process has terminated
    pub fn is_terminated(&self) -> bool {
        matches!(self.state, EngineState::Terminated)
    }

    /// Get the time the engine was alive, if it has terminated
    pub fn execution_duration(&self) -> Option<std::time::Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                Some(end.signed_duration_since(start).to_std().unwrap_or_default())
            }
            _ => None,
        }
    }

    /// Check if the process exited successfully (exit code 0)
    pub fn exited_successfully(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl std::fmt::Display for EngineProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state_str = match self.state {
            EngineState::Created => "Created",
            EngineState::Running => "Running",
            EngineState::Terminated => "Terminated",
        };
        let pid_str = self.pid.map_or("N/A".to_string(), |pid| pid.to_string());

        write!(
            f,
            "{} [{}] - {} {}{}",
            self.command,
            pid_str,
            state_str,
            self.args.join(" "),
            self.exit_code
                .map_or(String::new(), |code| format!(" (exit: {})", code))
        )
    }
}
