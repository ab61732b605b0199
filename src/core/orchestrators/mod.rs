mod position_reporter;

pub use position_reporter::{PositionReporter, ReportSummary};
