use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tube_server::config::AppConfig;
use tube_server::tfl::{FixtureTflClient, TflClient, TflError, TransitBackend};
use tube_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let backend = match build_backend(&config) {
        Ok(backend) => backend,
        Err(e) => {
            error!(error = %e, "failed to create TfL client");
            return ExitCode::FAILURE;
        }
    };

    // Directory failures are logged and leave the planner running
    let state = AppState::initialize(backend, &config.cache).await;
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!("Tube Journey Planner listening on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn build_backend(config: &AppConfig) -> Result<TransitBackend, TflError> {
    match &config.fixtures_dir {
        Some(dir) => {
            let client = FixtureTflClient::new(dir)?;
            info!(
                dir = %dir.display(),
                journey_pairs = client.journey_pair_count(),
                "serving TfL responses from fixtures"
            );
            Ok(TransitBackend::Fixture(client))
        }
        None => {
            let client = TflClient::new(config.tfl.clone())?;
            info!(base_url = %config.tfl.base_url, mode = client.mode(), "using live TfL API");
            Ok(TransitBackend::Live(client))
        }
    }
}
