//! Board Position Model
//!
//! The fixed 8x8 setup the driver feeds the engine before asking for a
//! move. A position is data for the command stream, not a validated
//! board: rows are literal cell tokens (piece letters, `.` for empty
//! squares) rendered verbatim into an AEI `setup` block. Rendering is
//! deterministic so two sessions given the same position produce
//! byte-identical command streams.

use serde::{Deserialize, Serialize};

use crate::protocol;

/// Number of rows in a setup block
pub const BOARD_ROWS: usize = 8;

/// A board setup expressed as literal AEI setup rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Side/move token sent with the `position` command (e.g. `1w`)
    pub side_to_move: String,

    /// Eight rows of space-separated cell tokens, top row first
    pub rows: [String; BOARD_ROWS],
}

impl Position {
    /// Create a position from a side token and eight literal rows
    pub fn new(side_to_move: &str, rows: [&str; BOARD_ROWS]) -> Self {
        Self {
            side_to_move: side_to_move.to_string(),
            rows: rows.map(|row| row.to_string()),
        }
    }

    /// The fixed opening setup the driver submits: silver pieces on the
    /// top two ranks, gold on the bottom two, gold to move first.
    pub fn opening() -> Self {
        Self::new(
            "1w",
            [
                "r r r r r r r r",
                "h c d m e d c h",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                "H C D M E D C H",
                "R R R R R R R R",
            ],
        )
    }

    /// Render the full command sequence that conveys this position:
    /// `position <side>`, `setup`, the eight rows (indented two spaces,
    /// as engines expect inside a setup block), and `end`.
    pub fn setup_commands(&self) -> Vec<String> {
        let mut commands = Vec::with_capacity(BOARD_ROWS + 3);
        commands.push(protocol::position_command(&self.side_to_move));
        commands.push(protocol::SETUP.to_string());
        for row in &self.rows {
            commands.push(format!("  {}", row));
        }
        commands.push(protocol::SETUP_END.to_string());
        commands
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::opening()
    }
}
