//! Engine I/O Streams
//!
//! Wraps the two halves of the engine conversation: the write half of
//! the child's stdin and the receive half of the drained output line
//! channel. Commands go out as a single write-plus-flush; lines come
//! back through bounded polls so the caller can interleave deadline
//! checks.

use std::io::Write;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

use crate::error::{Error, Result};
use crate::models::OutputLine;

/// Outcome of one bounded poll of the output line channel
#[derive(Debug)]
pub enum LinePoll {
    /// A line arrived
    Line(OutputLine),
    /// Nothing arrived within the poll interval
    Idle,
    /// The drainers have exited; the engine closed its output stream
    Closed,
}

/// Engine I/O streams wrapper
pub struct EngineStreams {
    /// Receiver for decoded output lines (stdout and stderr merged)
    line_rx: UnboundedReceiver<OutputLine>,
    /// Write half of the engine's stdin
    writer: Box<dyn Write + Send>,
}

impl EngineStreams {
    /// Create engine streams from the line channel and the stdin writer
    pub fn new(line_rx: UnboundedReceiver<OutputLine>, writer: impl Write + Send + 'static) -> Self {
        Self {
            line_rx,
            writer: Box::new(writer),
        }
    }

    /// Send one command line: append the terminator, write, flush.
    ///
    /// Must only be called while the engine is alive; a write to an
    /// exited engine surfaces the broken pipe as [`Error::CommandSend`].
    pub fn send_line(&mut self, command: &str) -> Result<()> {
        let framed = format!("{}\n", command);
        self.writer
            .write_all(framed.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| Error::CommandSend {
                command: command.to_string(),
                reason: e.to_string(),
            })
    }

    /// Wait up to `interval` for the next output line
    pub async fn poll_line(&mut self, interval: Duration) -> LinePoll {
        match timeout(interval, self.line_rx.recv()).await {
            Ok(Some(line)) => LinePoll::Line(line),
            Ok(None) => LinePoll::Closed,
            Err(_) => LinePoll::Idle,
        }
    }
}
