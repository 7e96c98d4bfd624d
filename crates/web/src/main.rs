use anyhow::Context;
use web::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting FLS3N-SD registration service");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let provider = config.backend.provider();
    tracing::info!("Database provider: {}", provider);

    // A backend that fails to open leaves the server up so the status probe
    // can report it.
    let store = match storage::connect(&config.backend).await {
        Ok(store) => {
            tracing::info!("Database backend ready");
            Some(store)
        }
        Err(e) => {
            tracing::error!("Failed to initialize {} backend: {}", provider, e);
            None
        }
    };

    let state = AppState::new(store, &config.backend, &config.admin_password);
    let app = routes::router(state, config.static_dir.as_deref());

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Server running on http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
