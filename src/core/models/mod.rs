mod cursor_position;
mod reporter_settings;

pub use cursor_position::CursorPosition;
pub use reporter_settings::ReporterSettings;
