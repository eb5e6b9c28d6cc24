//! Policy hot reload on SIGHUP.

use crate::app_state::AppState;

/// Spawn a task that reloads the policy from the config file on every SIGHUP.
#[cfg(unix)]
pub fn spawn_sighup_reload(app: AppState) -> std::io::Result<tokio::task::JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hup = signal(SignalKind::hangup())?;
    Ok(tokio::spawn(async move {
        while hup.recv().await.is_some() {
            // failures are logged inside; the old policy stays live
            let _ = app.reload_policy();
        }
    }))
}

#[cfg(not(unix))]
pub fn spawn_sighup_reload(_app: AppState) -> std::io::Result<tokio::task::JoinHandle<()>> {
    tracing::warn!("SIGHUP reload unsupported on this platform");
    Ok(tokio::spawn(async {}))
}
