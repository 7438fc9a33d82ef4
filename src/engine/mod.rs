//! Engine Process Management
//!
//! This module owns the engine subprocess: spawning it with piped stdio,
//! draining its output into a line channel, and the session object that
//! coordinates one engine's lifecycle from launch to shutdown.

pub mod process;
pub mod session;
pub mod streams;

// Re-exports for convenience
pub use process::{spawn_engine_process, SpawnedEngine};
pub use session::{EngineSession, SessionState};
pub use streams::{EngineStreams, LinePoll};
