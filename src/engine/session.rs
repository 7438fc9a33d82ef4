//! Engine Session
//!
//! The session object owns one engine child process, its I/O streams and
//! its lifecycle record; every operation on the engine goes through it.
//! A session moves `Started -> AwaitingResult -> Finished`: sending `go`
//! enters the waiting state, observing the result line (or a terminal
//! error) finishes it, and `shutdown` always follows, reaping the child.

use std::time::Instant;

use crate::config::{EngineConfig, SessionConfig};
use crate::engine::process::spawn_engine_process;
use crate::engine::streams::{EngineStreams, LinePoll};
use crate::error::{Error, Result};
use crate::models::{EngineProcess, OutputLine, Position};
use crate::protocol;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Engine launched, commands may be sent
    Started,
    /// `go` has been sent, the result line is awaited
    AwaitingResult,
    /// The result (or a terminal error) has been observed
    Finished,
}

/// One engine process's lifecycle, from launch to shutdown
pub struct EngineSession {
    process: EngineProcess,
    child: std::process::Child,
    streams: EngineStreams,
    state: SessionState,
    config: SessionConfig,
}

impl EngineSession {
    /// Launch the engine and start draining its output.
    ///
    /// Fails with [`Error::SpawnFailed`] when the binary is missing or
    /// not executable. The session owns the spawned process exclusively.
    pub fn launch(engine: &EngineConfig, config: SessionConfig) -> Result<Self> {
        let spawned = spawn_engine_process(engine)?;
        info!("Engine session started: {}", spawned.process);

        Ok(Self {
            process: spawned.process,
            child: spawned.child,
            streams: EngineStreams::new(spawned.lines, spawned.stdin),
            state: SessionState::Started,
            config,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Lifecycle record of the engine process
    pub fn process(&self) -> &EngineProcess {
        &self.process
    }

    /// Send one protocol command to the engine.
    ///
    /// A failed write means the engine exited early; the error
    /// propagates, there is no retry path.
    pub fn send(&mut self, command: &str) -> Result<()> {
        trace!("-> {}", command);
        self.streams.send_line(command)
    }

    /// Send the full setup sequence for a board position
    pub fn send_position(&mut self, position: &Position) -> Result<()> {
        for command in position.setup_commands() {
            self.send(&command)?;
        }
        Ok(())
    }

    /// Ask the engine to compute a move; the session starts awaiting the
    /// result line.
    pub fn request_move(&mut self) -> Result<()> {
        self.send(protocol::GO)?;
        self.state = SessionState::AwaitingResult;
        Ok(())
    }

    /// Wait for the `bestmove` result line.
    ///
    /// Every line the engine produces is handed to `observer` in arrival
    /// order, the result line included. The wait ends the instant a line
    /// with the result prefix arrives; it also ends, distinctly, when
    /// the engine closes its output without one ([`Error::EngineExited`])
    /// or when the configured deadline elapses ([`Error::Timeout`]).
    pub async fn wait_for_bestmove<F>(&mut self, mut observer: F) -> Result<OutputLine>
    where
        F: FnMut(&OutputLine),
    {
        let interval = self.config.poll_interval();
        let deadline = self.config.wait_deadline();
        let started = Instant::now();

        loop {
            match self.streams.poll_line(interval).await {
                LinePoll::Line(line) => {
                    observer(&line);
                    if protocol::is_bestmove(&line.text) {
                        debug!("Result line arrived as line {}", line.seq);
                        self.state = SessionState::Finished;
                        return Ok(line);
                    }
                }
                LinePoll::Closed => {
                    self.state = SessionState::Finished;
                    return Err(Error::EngineExited {
                        wanted: protocol::BESTMOVE_PREFIX.to_string(),
                    });
                }
                LinePoll::Idle => {
                    if started.elapsed() >= deadline {
                        self.state = SessionState::Finished;
                        return Err(Error::Timeout {
                            wanted: protocol::BESTMOVE_PREFIX.to_string(),
                            waited: started.elapsed(),
                        });
                    }
                }
            }
        }
    }

    /// Shut the engine down: send `quit`, then block until the child is
    /// reaped, recording its exit status.
    ///
    /// The `quit` send is best-effort, since an engine that already
    /// crashed has closed its pipe. The reap always happens, so no
    /// zombie outlives the session.
    pub fn shutdown(self) -> Result<EngineProcess> {
        let Self {
            mut process,
            mut child,
            mut streams,
            ..
        } = self;

        if let Err(e) = streams.send_line(protocol::QUIT) {
            warn!("quit not delivered: {}", e);
        }
        // Drop the writer so the child sees EOF on stdin before the
        // blocking wait.
        drop(streams);

        let status = child.wait().map_err(|e| Error::ShutdownFailed {
            reason: e.to_string(),
        })?;
        process.mark_terminated(status.code());
        info!("Engine session finished: {}", process);
        Ok(process)
    }
}
