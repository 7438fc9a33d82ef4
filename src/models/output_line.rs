//! Output Line Model
//!
//! Represents a single decoded line of engine output. Lines are produced
//! by the drainer threads from the raw pipe bytes: decoded lossily,
//! stripped of the trailing terminator, and stamped with a sequence
//! number so the waiter can rely on arrival order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line of engine output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputLine {
    /// The decoded text content, without the trailing line terminator
    pub text: String,

    /// Position in the output stream (0-based, across stdout and stderr)
    pub seq: u64,

    /// When this line was received
    pub timestamp: DateTime<Utc>,
}

impl OutputLine {
    /// Create an output line from already-decoded text
    pub fn new(text: String, seq: u64) -> Self {
        Self {
            text,
            seq,
            timestamp: Utc::now(),
        }
    }

    /// Decode a raw byte line read from the engine's pipe.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than
    /// failing; a trailing `\n` or `\r\n` is stripped.
    pub fn from_bytes(raw: &[u8], seq: u64) -> Self {
        let mut bytes = raw;
        if bytes.ends_with(b"\n") {
            bytes = &bytes[..bytes.len() - 1];
        }
        if bytes.ends_with(b"\r") {
            bytes = &bytes[..bytes.len() - 1];
        }
        Self::new(String::from_utf8_lossy(bytes).into_owned(), seq)
    }
}

impl std::fmt::Display for OutputLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
