mod adapters;
mod core;
mod global_constants;

use std::sync::Arc;

use crate::adapters::{wait_for_interrupt, SystemMousePositionProvider};
use crate::core::models::ReporterSettings;
use crate::core::orchestrators::{PositionReporter, ReportSummary};
use crate::global_constants::{APPLICATION_NAME, LOG_TAG_MAIN};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);

    let reporter = PositionReporter::build(
        Arc::new(SystemMousePositionProvider::initialize()),
        ReporterSettings::default(),
    );

    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    let summary: ReportSummary = reporter
        .run_until_interrupted(&mut output, wait_for_interrupt())
        .await?;

    log::info!(
        "{} Reported {} positions before shutdown",
        LOG_TAG_MAIN,
        summary.reported_positions
    );
    Ok(())
}
