use super::TOP_CUSTOMERS_LIMIT;
use crate::error::AppError;
use crate::models::{Customer, NewCustomer};
use sqlx::PgPool;

const CUSTOMER_COLUMNS: &str = "id, name, email, phone_number, address";

pub struct CustomerService;

impl CustomerService {
    pub async fn create(pool: &PgPool, body: &NewCustomer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO customers (name, email, phone_number, address) VALUES ($1, $2, $3, $4) RETURNING {}",
            CUSTOMER_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&body.name)
            .bind(&body.email)
            .bind(&body.phone_number)
            .bind(&body.address)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {} FROM customers WHERE id = $1", CUSTOMER_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Customers by descending order count; ties broken by id so the result is stable.
    pub async fn top(pool: &PgPool) -> Result<Vec<Customer>, AppError> {
        let sql = r#"
            SELECT c.id, c.name, c.email, c.phone_number, c.address
            FROM customers c
            LEFT JOIN orders o ON o.customer_id = c.id
            GROUP BY c.id
            ORDER BY COUNT(o.id) DESC, c.id ASC
            LIMIT $1
        "#;
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(sql)
            .bind(TOP_CUSTOMERS_LIMIT)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
