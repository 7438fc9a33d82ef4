//! AEI Protocol Literals
//!
//! The driver speaks a minimal slice of the Arimaa Engine Interface:
//! newline-terminated commands on the engine's stdin, free-form log
//! lines on its stdout, and a single `bestmove`-prefixed line as the
//! result of a `go`. Nothing here parses engine output beyond the
//! prefix test; everything else is relayed verbatim.

/// Ask the engine to start computing a move
pub const GO: &str = "go";

/// Ask the engine to terminate
pub const QUIT: &str = "quit";

/// Open a board setup block
pub const SETUP: &str = "setup";

/// Close a board setup block
pub const SETUP_END: &str = "end";

/// Prefix of the line that carries the engine's chosen move
pub const BESTMOVE_PREFIX: &str = "bestmove";

/// Build the `position` command for the given side/move token (e.g. `1w`)
pub fn position_command(side_to_move: &str) -> String {
    format!("position {}", side_to_move)
}

/// Check whether a line is the engine's result line.
///
/// The match is a prefix test only; a line that merely contains the
/// token somewhere inside is ordinary log output.
pub fn is_bestmove(line: &str) -> bool {
    line.starts_with(BESTMOVE_PREFIX)
}
