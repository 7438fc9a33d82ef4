//! Data Models
//!
//! Core data structures for the driver: the engine process lifecycle
//! record, decoded output lines, and the board position rendered into
//! the setup command stream.

pub mod engine_process;
pub mod output_line;
pub mod position;

// Re-exports for convenience
pub use engine_process::{EngineProcess, EngineState};
pub use output_line::OutputLine;
pub use position::{Position, BOARD_ROWS};
