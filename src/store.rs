//! Database bootstrap: create the database and entity tables, seed demo customers.

use crate::error::{AppError, ConfigError};
use crate::models::NewCustomer;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Entity tables in dependency order. Every statement is idempotent.
const TABLES_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone_number TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        location TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS menu_items (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        is_available BOOLEAN NOT NULL DEFAULT TRUE,
        restaurant_id INTEGER NOT NULL REFERENCES restaurants (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id SERIAL PRIMARY KEY,
        customer_id INTEGER NOT NULL REFERENCES customers (id),
        restaurant_id INTEGER NOT NULL REFERENCES restaurants (id),
        total_price DOUBLE PRECISION NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_items (
        id SERIAL PRIMARY KEY,
        order_id INTEGER NOT NULL REFERENCES orders (id),
        menu_item_id INTEGER NOT NULL REFERENCES menu_items (id),
        quantity INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS orders_customer_id_idx ON orders (customer_id)",
    "CREATE INDEX IF NOT EXISTS orders_restaurant_id_idx ON orders (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS order_items_order_id_idx ON order_items (order_id)",
    "CREATE INDEX IF NOT EXISTS menu_items_restaurant_id_idx ON menu_items (restaurant_id)",
];

/// Create the entity tables and indexes if they do not exist yet.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLES_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!(statements = TABLES_DDL.len(), "entity tables ensured");
    Ok(())
}

/// Customers present on a fresh install.
pub fn seed_customer_rows() -> Vec<NewCustomer> {
    vec![
        NewCustomer {
            name: "Alice".into(),
            email: "alice@gmail.com".into(),
            phone_number: "1234567890".into(),
            address: "123 Main St, New York, NY 10001".into(),
        },
        NewCustomer {
            name: "Bob".into(),
            email: "bob@gmail.com".into(),
            phone_number: "1234567891".into(),
            address: "124 Main St, New York, NY 10001".into(),
        },
    ]
}

/// Insert each seed customer unless one with the same email already exists.
/// Safe to run on every boot. Returns how many rows were inserted.
pub async fn seed_customers(pool: &PgPool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;
    for c in seed_customer_rows() {
        let res = sqlx::query(
            r#"
            INSERT INTO customers (name, email, phone_number, address)
            SELECT $1, $2, $3, $4
            WHERE NOT EXISTS (SELECT 1 FROM customers WHERE email = $2)
            "#,
        )
        .bind(&c.name)
        .bind(&c.email)
        .bind(&c.phone_number)
        .bind(&c.address)
        .execute(&mut *tx)
        .await?;
        inserted += res.rows_affected();
    }
    tx.commit().await?;
    tracing::info!(inserted, "seed customers checked");
    Ok(inserted)
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| ConfigError::InvalidDatabaseUrl("no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_is_split_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/restaurant").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "restaurant");
    }

    #[test]
    fn query_string_moves_to_admin_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/food?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "food");
    }

    #[test]
    fn url_without_path_is_a_config_error() {
        let err = parse_db_name_from_url("localhost").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidDatabaseUrl(_))));
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("my\"db"), "\"my\"\"db\"");
    }

    #[test]
    fn seed_rows_have_distinct_emails() {
        let rows = seed_customer_rows();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].email, rows[1].email);
    }
}
