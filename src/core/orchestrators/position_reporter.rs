use std::convert::Infallible;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::models::{CursorPosition, ReporterSettings};
use crate::core::ports::MousePositionProvider;
use crate::global_constants::{
    ERROR_CONTEXT_WRITE_OUTPUT, LOG_TAG_REPORTER, MESSAGE_INTERRUPT_RECEIVED,
    MESSAGE_PROGRAM_TERMINATED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub reported_positions: u64,
}

pub struct PositionReporter {
    mouse_provider: Arc<dyn MousePositionProvider>,
    settings: ReporterSettings,
}

impl PositionReporter {
    pub fn build(mouse_provider: Arc<dyn MousePositionProvider>, settings: ReporterSettings) -> Self {
        log::debug!(
            "{} building reporter with interval {:?}",
            LOG_TAG_REPORTER,
            settings.poll_interval
        );

        Self {
            mouse_provider,
            settings,
        }
    }

    /// Prints the cursor position every poll interval until `interrupt`
    /// resolves, then prints the termination line.
    ///
    /// A pending pause is abandoned as soon as the interrupt fires. A failed
    /// query or write ends the run with that error and the termination line
    /// is not printed.
    pub async fn run_until_interrupted<W, F>(
        &self,
        output: &mut W,
        interrupt: F,
    ) -> Result<ReportSummary>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        log::info!("{} reporting mouse position", LOG_TAG_REPORTER);

        let mut reported_positions: u64 = 0;

        tokio::select! {
            biased;
            _ = interrupt => {
                log::info!("{} {}", LOG_TAG_REPORTER, MESSAGE_INTERRUPT_RECEIVED);
            }
            Err(error) = self.report_positions_forever(output, &mut reported_positions) => {
                log::debug!("{} reporting stopped: {:#}", LOG_TAG_REPORTER, error);
                return Err(error);
            }
        }

        writeln!(output, "{}", MESSAGE_PROGRAM_TERMINATED).context(ERROR_CONTEXT_WRITE_OUTPUT)?;
        output.flush().context(ERROR_CONTEXT_WRITE_OUTPUT)?;

        Ok(ReportSummary { reported_positions })
    }

    pub fn report_current_position<W: Write>(&self, output: &mut W) -> Result<CursorPosition> {
        let position = self.mouse_provider.get_current_mouse_position()?;

        writeln!(output, "{}", position).context(ERROR_CONTEXT_WRITE_OUTPUT)?;
        output.flush().context(ERROR_CONTEXT_WRITE_OUTPUT)?;

        log::trace!(
            "{} reported ({}, {})",
            LOG_TAG_REPORTER,
            position.x_position,
            position.y_position
        );
        Ok(position)
    }

    async fn report_positions_forever<W: Write>(
        &self,
        output: &mut W,
        reported_positions: &mut u64,
    ) -> Result<Infallible> {
        loop {
            self.report_current_position(output)?;
            *reported_positions += 1;
            tokio::time::sleep(self.settings.poll_interval).await;
        }
    }
}
