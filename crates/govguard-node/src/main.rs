//! govguard node
//!
//! - Loads `govguard.yaml` (or the path given as the first argument)
//! - Serves admission checks and content linting over HTTP
//! - Reloads the restriction policy on SIGHUP

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use govguard_core::error::{GovGuardError, Result};
use govguard_node::{app_state, config, reload, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "govguard-node exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "govguard.yaml".to_string());

    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|e| GovGuardError::Config(format!("server.listen must be a valid SocketAddr: {e}")))?;

    let state = app_state::AppState::with_config_path(cfg, path)?;
    reload::spawn_sighup_reload(state.clone())
        .map_err(|e| GovGuardError::Internal(format!("install SIGHUP handler: {e}")))?;
    let app = router::build_router(state);

    tracing::info!(%listen, "govguard-node starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| GovGuardError::Internal(format!("failed to bind: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| GovGuardError::Internal(format!("server failed: {e}")))
}
