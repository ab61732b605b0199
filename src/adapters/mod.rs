mod shutdown_signal;
mod system_mouse_position_provider;

pub use shutdown_signal::wait_for_interrupt;
pub use system_mouse_position_provider::SystemMousePositionProvider;
