// server/src/main.rs

// Entry point for the dashboard core process. Resolves configuration,
// wires the backend client into the session and domain stores, logs a
// startup summary and then idles until a shutdown signal.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use tokio::signal::unix::{signal, SignalKind};

use app_state::{mock, AppState};
use backend_api::{AppointmentApi, BackendClient, BackendConfig};
use session_service::{route_access, RouteGuard, SessionService};

#[derive(Parser, Debug)]
#[command(name = "health-hub-server", about = "Hospital operations dashboard core")]
struct Args {
    /// Backend endpoint URL (falls back to HEALTH_HUB_BACKEND_URL).
    #[arg(long, env = "HEALTH_HUB_BACKEND_URL")]
    backend_url: Option<String>,

    /// Backend public API key (falls back to HEALTH_HUB_BACKEND_KEY).
    #[arg(long, env = "HEALTH_HUB_BACKEND_KEY")]
    backend_key: Option<String>,
}

async fn handle_signals() {
    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to set up SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to set up SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
    }
}

/// Fetch the durable appointment rows and log status counts the way the
/// dashboard's stat cards break them down. A failed fetch is logged and
/// skipped; startup carries on.
async fn appointment_summary(api: &dyn AppointmentApi) {
    let rows = match api.list().await {
        Ok(rows) => rows,
        Err(err) => {
            warn!("[Startup] could not fetch appointments: {}", err);
            return;
        }
    };
    let count = |status: &str| rows.iter().filter(|r| r.status == status).count();
    info!(
        "[Startup] appointments: {} total ({} scheduled, {} completed, {} cancelled, {} no-show)",
        rows.len(),
        count("confirmed"),
        count("completed"),
        count("cancelled"),
        count("no-show"),
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    // Missing configuration is fatal: running against no backend would
    // silently degrade every durable operation.
    let config = match (args.backend_url, args.backend_key) {
        (Some(url), Some(key)) => BackendConfig::new(url, key),
        _ => BackendConfig::from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!("[Startup] {}", err);
            return Err(err.into());
        }
    };
    info!("[Startup] backend endpoint {}", config.url());

    let backend = Arc::new(BackendClient::new(config));

    let session = Arc::new(SessionService::new(backend.clone()));
    let subscription = session.init().await;
    info!("[Startup] session resolved: {:?}", session.phase().await);

    let guard = RouteGuard::new(session.clone(), backend.clone());
    let dashboard = route_access("/").expect("dashboard route is registered");
    info!(
        "[Startup] dashboard access decision: {:?}",
        guard.check(dashboard).await
    );

    let state = Arc::new(AppState::seeded());
    state.set_resources(mock::hospital_resources()).await;
    let notifications = state.notifications().await;
    let unread = notifications.iter().filter(|n| !n.read).count();
    info!(
        "[Startup] state seeded: {} patients, {} doctors, {} resources, {} notifications ({} unread)",
        state.patients().await.len(),
        state.doctors().await.len(),
        state.resources().await.len(),
        notifications.len(),
        unread,
    );

    appointment_summary(backend.as_ref()).await;

    handle_signals().await;

    subscription.close();
    info!("[Shutdown] session subscription closed");
    Ok(())
}
