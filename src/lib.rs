//! Restaurant ordering REST backend: customers, restaurants, menu items and orders over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, PORT};
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes_with_ready};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, seed_customers};
