//! Server startup.
//!
//! Tracing setup, database connection with migrations, router assembly and the listener loop.

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Log filter used when `RUST_LOG` is unset or invalid.
///
/// Request spans from `TraceLayer` are emitted at debug level under the `tower_http` target.
pub const DEFAULT_LOG_FILTER: &str = "accounts=info,tower_http=debug";

/// Install the global tracing subscriber
///
/// Filtering follows `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the application router with state and request tracing applied
pub fn build_router(db: DatabaseConnection) -> Router {
    router::routes()
        .with_state(AppState { db })
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve requests until the process exits
pub async fn serve(config: &Config, router: Router) -> Result<(), Error> {
    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
