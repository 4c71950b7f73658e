mod api;
mod middleware;
mod pages;
mod scheduler;
mod sessions;
mod submit;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use dwell_geo::{LocationResolver, NominatimClient};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
    sessions::SessionStore,
    submit::SimulatedSubmitter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = dwell_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.is_development())
        .init();

    let geocoder = NominatimClient::with_base_url(
        &config.geocoder_url,
        config.geocoder_timeout_secs,
        &config.geocoder_user_agent,
    )?;
    let sessions = SessionStore::new(
        config.max_sessions,
        Duration::from_secs(config.session_ttl_secs),
    );

    let rate_limit = RateLimitState::per_minute(config.rate_limit_per_minute);
    let _scheduler = scheduler::build_scheduler(sessions.clone(), rate_limit.clone()).await?;

    let state = AppState {
        sessions,
        resolver: LocationResolver::new(Arc::new(geocoder)),
        submitter: Arc::new(SimulatedSubmitter::new(Duration::from_millis(
            config.submit_delay_ms,
        ))),
    };
    let app = build_app(state, rate_limit);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        env = %config.env,
        geocoder = %config.geocoder_url,
        "listening"
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
