use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use pharmops_registry::constants::{ORGANISATION_NAME_ENV, REST_ADDR_ENV};
use pharmops_registry::RuntimeConfig;

/// Main entry point for the PharmOps registry service
///
/// Serves the read-only registry over REST with Swagger UI at `/swagger-ui`.
///
/// # Environment Variables
/// - `PHARMOPS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PHARMOPS_ORGANISATION`: organisation name shown in health checks
/// - `RUST_LOG`: tracing filter directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration values are invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pharmops_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("pharmops_registry=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Arc::new(RuntimeConfig::from_values(
        std::env::var(REST_ADDR_ENV).ok(),
        std::env::var(ORGANISATION_NAME_ENV).ok(),
    )?);

    tracing::info!(
        "++ Starting PharmOps registry for {} on {}",
        cfg.organisation_name(),
        cfg.rest_addr()
    );

    let app = api_rest::router(AppState::new(cfg.clone()));
    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
