//! AEI Driver - a session-based driver for Arimaa engines
//!
//! This library launches an external AEI-speaking engine as a
//! subprocess, feeds it a board setup over the line protocol, asks it
//! to compute a move, and relays every output line until the single
//! `bestmove`-prefixed result arrives.
//!
//! ## Module Organization
//!
//! - [`config`] - Engine invocation and wait-loop configuration, TOML loading
//! - [`engine`] - Process spawning, output draining, the session object
//! - [`models`] - Data structures (EngineProcess, OutputLine, Position)
//! - [`protocol`] - AEI command literals and the result-line prefix test
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Architecture
//!
//! Two threads of control per session:
//!
//! - **Main sequence:** launch, send commands, await the result, shut down
//! - **Drainer threads:** read the engine's stdout and stderr pipes
//!   (blocking I/O) and forward decoded lines into one unbounded channel
//!
//! The channel is the only shared resource; the main sequence consumes
//! it through bounded polls so the configured deadline stays enforceable.
//! An engine that closes its output without a result, or stays silent
//! past the deadline, surfaces as a distinct error instead of a hang.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod protocol;

// Re-exports for core functionality
pub use config::loader::ConfigLoader;
pub use config::{Config, EngineConfig, SessionConfig};
pub use engine::{EngineSession, SessionState};
pub use error::{Error, Result};
pub use models::{EngineProcess, OutputLine, Position};

// Version information
/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
