//! Engine Process Spawning
//!
//! Starts the external engine as a child process with piped stdio and
//! bridges its blocking output pipes to async code: one reader thread
//! per pipe drains byte lines into a single unbounded channel. The
//! stderr reader shares the stdout reader's channel, so the session
//! observes one merged output stream, which is how the wire protocol
//! expects engine logging to arrive.

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::models::{EngineProcess, OutputLine};

/// Everything a session needs from a freshly spawned engine
pub struct SpawnedEngine {
    /// Lifecycle record for the child
    pub process: EngineProcess,
    /// Child handle, kept for the final reap
    pub child: Child,
    /// Write half of the engine's stdin
    pub stdin: ChildStdin,
    /// Receive half of the merged output line channel
    pub lines: UnboundedReceiver<OutputLine>,
}

/// Spawn the engine binary with piped stdio and start the output drainers.
///
/// Exactly one engine process exists per session; callers own the
/// returned wiring for the session's lifetime.
pub fn spawn_engine_process(config: &EngineConfig) -> Result<SpawnedEngine> {
    let command_display = config.command.display().to_string();

    let mut cmd = Command::new(&config.command);
    cmd.args(&config.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = &config.working_directory {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|e| Error::SpawnFailed {
        command: command_display.clone(),
        reason: e.to_string(),
    })?;

    let stdin = child.stdin.take().ok_or_else(|| Error::PipeUnavailable {
        command: command_display.clone(),
        stream: "stdin".to_string(),
    })?;
    let stdout = child.stdout.take().ok_or_else(|| Error::PipeUnavailable {
        command: command_display.clone(),
        stream: "stdout".to_string(),
    })?;
    let stderr = child.stderr.take().ok_or_else(|| Error::PipeUnavailable {
        command: command_display.clone(),
        stream: "stderr".to_string(),
    })?;

    let pid = child.id();
    let mut process = EngineProcess::new(command_display, config.args.clone());
    process.mark_started(pid);
    debug!("Spawned engine {} (pid {})", process.command, pid);

    // Channel: drainer threads -> async consumer. Sequence numbers are
    // shared across both streams so arrival order is observable.
    let (tx, rx) = unbounded_channel();
    let seq = Arc::new(AtomicU64::new(0));
    drain_lines(stdout, tx.clone(), Arc::clone(&seq), "stdout");
    drain_lines(stderr, tx, seq, "stderr");

    Ok(SpawnedEngine {
        process,
        child,
        stdin,
        lines: rx,
    })
}

/// Reader thread: drain one pipe line-by-line into the shared channel.
///
/// Every line read is forwarded exactly once, in arrival order. The
/// thread exits cleanly on EOF or when the receiver is dropped; when
/// both drainers have exited the channel closes, which the session
/// treats as the engine having closed its output.
fn drain_lines<R>(
    stream: R,
    tx: UnboundedSender<OutputLine>,
    seq: Arc<AtomicU64>,
    stream_name: &'static str,
) where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    debug!("engine {} reached EOF", stream_name);
                    break;
                }
                Ok(_) => {
                    let n = seq.fetch_add(1, Ordering::SeqCst);
                    if tx.send(OutputLine::from_bytes(&buf, n)).is_err() {
                        debug!("engine {} drain: receiver dropped, stopping", stream_name);
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("engine {} read error: {}", stream_name, e);
                    break;
                }
            }
        }
    });
}
