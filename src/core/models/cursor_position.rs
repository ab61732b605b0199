use std::fmt;

use crate::global_constants::MOUSE_POSITION_LINE_PREFIX;

/// A single pointer reading in screen pixels, relative to the primary
/// display's top-left corner. Values are passed through exactly as the host
/// reports them, negative coordinates included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub x_position: i32,
    pub y_position: i32,
}

impl CursorPosition {
    pub fn at_coordinates(x_position: i32, y_position: i32) -> Self {
        log::trace!(
            "[CURSOR_POSITION] creating position at ({}, {})",
            x_position,
            y_position
        );

        Self {
            x_position,
            y_position,
        }
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            MOUSE_POSITION_LINE_PREFIX, self.x_position, self.y_position
        )
    }
}
