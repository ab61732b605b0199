use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq)]
pub struct ReporterSettings {
    pub poll_interval: Duration,
}

impl Default for ReporterSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(global_constants::POLL_INTERVAL_MILLISECONDS),
        }
    }
}
