//! FEC Web server binary.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fec_web::adapters::{pages_router, FecApiClient, FecApiConfig, PagesAppState};
use fec_web::config::AppConfig;
use fec_web::domain::election::{ElectionCalendar, RedirectPlanner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let calendar = Arc::new(ElectionCalendar::starting_today(config.calendar.earliest_cycle));
    info!(
        current_cycle = %calendar.current_cycle(),
        earliest_cycle = %calendar.earliest_cycle(),
        "Election calendar ready"
    );
    let planner = Arc::new(RedirectPlanner::new(calendar, config.calendar.default_time_period));
    let data_client = Arc::new(FecApiClient::new(FecApiConfig::from(&config.api))?);

    let state = PagesAppState::new(planner, data_client, &config.api);
    let app = pages_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    info!(%address, environment = ?config.server.environment, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// JSON logs in production, human-readable elsewhere. `RUST_LOG` overrides
/// the configured directive.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = signal_or_pending("ctrl_c", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = signal_or_pending("terminate", async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Resolves when `signal` is delivered. A handler that failed to install
/// never resolves, so it cannot trigger a shutdown.
async fn signal_or_pending<E, F>(name: &str, signal: F)
where
    E: std::fmt::Display,
    F: Future<Output = Result<(), E>>,
{
    if let Err(error) = signal.await {
        tracing::error!(%error, signal = name, "Failed to install signal handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;

    #[tokio::test]
    async fn failed_signal_handler_does_not_shut_down() {
        let failed = async { Err::<(), _>(io::Error::new(io::ErrorKind::Other, "no handler")) };

        let waited = tokio::time::timeout(Duration::from_millis(50), signal_or_pending("test", failed)).await;

        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn delivered_signal_shuts_down() {
        let delivered = async { Ok::<(), io::Error>(()) };

        let waited = tokio::time::timeout(Duration::from_millis(50), signal_or_pending("test", delivered)).await;

        assert!(waited.is_ok());
    }
}
