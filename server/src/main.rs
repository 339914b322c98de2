//! Restaurant API server: reads settings, prepares the database, serves on port 3000.

use restaurant_api::{app, ensure_database_exists, ensure_tables, seed_customers, AppState, Settings, PORT};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("restaurant_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    ensure_tables(&pool).await?;
    if settings.seed_customers {
        seed_customers(&pool).await?;
    }

    let state = AppState { pool };
    let router: axum::Router = app(state);

    let listener = TcpListener::bind(("0.0.0.0", PORT)).await?;
    tracing::info!("Server is running on http://localhost:{}", listener.local_addr()?.port());
    axum::serve(listener, router).await?;
    Ok(())
}
