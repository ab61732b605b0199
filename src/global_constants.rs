pub const APPLICATION_NAME: &str = "mouse-position-reporter";

pub const POLL_INTERVAL_MILLISECONDS: u64 = 100;

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_MOUSE: &str = "[MOUSE]";
pub const LOG_TAG_REPORTER: &str = "[REPORTER]";
pub const LOG_TAG_SIGNAL: &str = "[SIGNAL]";

pub const MOUSE_POSITION_LINE_PREFIX: &str = "Mouse position:";
pub const MESSAGE_PROGRAM_TERMINATED: &str = "Program terminated.";
pub const MESSAGE_MOUSE_POSITION_FAILED: &str = "failed to get mouse position";
pub const MESSAGE_NO_DISPLAY_AVAILABLE: &str = "no X display available";
pub const MESSAGE_INTERRUPT_RECEIVED: &str = "interrupt received, stopping";
pub const MESSAGE_SIGNAL_REGISTRATION_FAILED: &str = "could not register signal handler";

pub const ERROR_CONTEXT_WRITE_OUTPUT: &str = "Unable to write to standard output";
