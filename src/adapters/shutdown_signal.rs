use crate::global_constants::{LOG_TAG_SIGNAL, MESSAGE_SIGNAL_REGISTRATION_FAILED};

/// Resolves on the first SIGINT or SIGTERM. SIGQUIT keeps its default
/// disposition.
///
/// Handlers are installed on first poll. If installation fails the future
/// never resolves and the default signal disposition stays in effect.
#[cfg(unix)]
pub async fn wait_for_interrupt() {
    use tokio::signal::unix::{signal, SignalKind};

    let registered = signal(SignalKind::interrupt())
        .and_then(|interrupt| Ok((interrupt, signal(SignalKind::terminate())?)));

    let (mut interrupt, mut terminate) = match registered {
        Ok(signals) => signals,
        Err(e) => {
            log::error!("{} {}: {}", LOG_TAG_SIGNAL, MESSAGE_SIGNAL_REGISTRATION_FAILED, e);
            return std::future::pending().await;
        }
    };

    tokio::select! {
        _ = interrupt.recv() => log::debug!("{} received SIGINT", LOG_TAG_SIGNAL),
        _ = terminate.recv() => log::debug!("{} received SIGTERM", LOG_TAG_SIGNAL),
    }
}

/// Resolves on the first Ctrl-C.
#[cfg(not(unix))]
pub async fn wait_for_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("{} {}: {}", LOG_TAG_SIGNAL, MESSAGE_SIGNAL_REGISTRATION_FAILED, e);
        return std::future::pending().await;
    }
    log::debug!("{} received Ctrl-C", LOG_TAG_SIGNAL);
}
