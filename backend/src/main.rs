mod config;
mod error;
mod extract;
mod routes;
mod state;

#[cfg(test)]
mod tests_routes;

use config::Config;
use state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::from_env()?;
    let shared_state = AppState::new(&config);

    let app = routes::router(shared_state, &config);

    info!("calc-core {}", calc_core::version());
    info!("serving static files from {}", config.static_dir.display());
    info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
