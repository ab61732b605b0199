use anyhow::{anyhow, Result};
use mouse_position::mouse_position::Mouse;

use crate::core::models::CursorPosition;
use crate::core::ports::MousePositionProvider;
use crate::global_constants::{
    LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED, MESSAGE_NO_DISPLAY_AVAILABLE,
};

pub struct SystemMousePositionProvider;

impl SystemMousePositionProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing mouse position provider", LOG_TAG_MOUSE);
        Self
    }

    fn query_system_mouse_position(&self) -> Mouse {
        if !is_display_available() {
            log::warn!("{} {}", LOG_TAG_MOUSE, MESSAGE_NO_DISPLAY_AVAILABLE);
            return Mouse::Error;
        }
        Mouse::get_mouse_position()
    }

    fn convert_mouse_result_to_position(&self, mouse_result: Mouse) -> Result<CursorPosition> {
        match mouse_result {
            Mouse::Position { x, y } => {
                log::debug!("{} current position: ({}, {})", LOG_TAG_MOUSE, x, y);
                Ok(CursorPosition::at_coordinates(x, y))
            }
            Mouse::Error => {
                log::warn!("{} {}", LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED);
                Err(anyhow!(MESSAGE_MOUSE_POSITION_FAILED))
            }
        }
    }
}

/// `Mouse::get_mouse_position` hands whatever `XOpenDisplay` returns straight
/// to Xlib, so a missing X server has to be caught before calling it.
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
fn is_display_available() -> bool {
    use x11_dl::xlib::Xlib;

    let Ok(xlib) = Xlib::open() else {
        return false;
    };

    unsafe {
        let display = (xlib.XOpenDisplay)(std::ptr::null());
        if display.is_null() {
            return false;
        }
        (xlib.XCloseDisplay)(display);
    }
    true
}

#[cfg(not(any(target_os = "linux", target_os = "freebsd")))]
fn is_display_available() -> bool {
    true
}

impl MousePositionProvider for SystemMousePositionProvider {
    fn get_current_mouse_position(&self) -> Result<CursorPosition> {
        let mouse_position_result = self.query_system_mouse_position();
        self.convert_mouse_result_to_position(mouse_position_result)
    }
}
