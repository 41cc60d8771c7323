use std::net::SocketAddr;
use std::sync::Arc;

use fleet_api::config::{LogFormat, ServerConfig};
use fleet_api::router::build_app_router;
use fleet_api::state::AppState;
use fleet_core::storage::{MemoryShipStorage, ShipStorage};
use fleet_db::PgShipStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    let json_logs = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "fleet_api=debug,fleet_core=debug,fleet_db=debug,tower_http=debug".into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    let storage = connect_storage(&config).await;

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST"),
        config.port,
    );

    let state = AppState::new(config.clone(), storage);
    let app = build_app_router(state, &config);

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise an in-memory store that
/// is lost on restart.
async fn connect_storage(config: &ServerConfig) -> Arc<dyn ShipStorage> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, ships are kept in memory only");
        return Arc::new(MemoryShipStorage::new());
    };

    let pool = fleet_db::create_pool(database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    fleet_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    fleet_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    Arc::new(PgShipStorage::new(pool))
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
