mod mouse_position_provider;

pub use mouse_position_provider::MousePositionProvider;
