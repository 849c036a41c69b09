use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use leadcapture::config::Config;
use leadcapture::db;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env().expect("Failed to load configuration");

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting lead capture");

    for setting in config.insecure_defaults() {
        tracing::warn!("{setting} is using its built-in development value; set it before exposing this server");
    }

    tokio::fs::create_dir_all(&config.instance_dir).await?;
    tracing::info!(path = %config.database_path.display(), "Using database file");

    let pool = db::connect(&config.database_path)
        .await
        .expect("Failed to open database");

    db::init(&pool).await.expect("Failed to initialize database");

    let addr = SocketAddr::new(config.host, config.port);
    let app = leadcapture::build_app(pool, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
