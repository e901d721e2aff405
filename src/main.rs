mod db;
mod error;
mod message;
mod routes;
mod state;
mod templates;

use db::create_pool;
use message::MessageRepository;
use routes::create_router;
use state::{AppState, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,message_board=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    // Create database connection pool
    tracing::info!("Connecting to database on {}...", config.mysql_host);
    let db = create_pool(&config.database_url())?;

    // Parse templates
    let tera = Arc::new(templates::load_templates()?);

    // Create repository
    let message_repository = MessageRepository::new(db);

    // Create application state
    let state = AppState {
        tera,
        message_repository,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
