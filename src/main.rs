use anyhow::Result;
use axum::Router;
use hydrogen_dashboard::{api, config::Config, state::AppState, telemetry};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let cfg = Config::load()?;
    let state = AppState::new(cfg.clone())?;

    info!(
        flights = state.repos.flights.len(),
        equipment = state.repos.equipment.len(),
        horizon_start = state.cfg.projection.first_year(),
        horizon_end = state.cfg.projection.last_year(),
        "reference data loaded"
    );

    let app: Router = api::router(state, &cfg);
    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "Server binding to 0.0.0.0 - service will be accessible from the network. \
            Bind to 127.0.0.1 unless behind a reverse proxy."
        );
    }

    info!(%addr, "starting Hydrogen Dashboard API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
