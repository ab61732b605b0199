use anyhow::Result;

use crate::core::models::CursorPosition;

/// Read-only access to the host's current pointer location.
pub trait MousePositionProvider: Send + Sync {
    fn get_current_mouse_position(&self) -> Result<CursorPosition>;
}
