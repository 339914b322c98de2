use crate::error::AppError;
use crate::models::{NewRestaurant, Restaurant};
use sqlx::PgPool;

pub struct RestaurantService;

impl RestaurantService {
    pub async fn create(pool: &PgPool, body: &NewRestaurant) -> Result<Restaurant, AppError> {
        let sql = "INSERT INTO restaurants (name, location) VALUES ($1, $2) RETURNING id, name, location";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Restaurant>(sql)
            .bind(&body.name)
            .bind(&body.location)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Sum of order totals for the restaurant; `None` when it has no orders.
    pub async fn revenue(pool: &PgPool, restaurant_id: i32) -> Result<Option<f64>, AppError> {
        let sql = "SELECT SUM(total_price) FROM orders WHERE restaurant_id = $1";
        tracing::debug!(sql = %sql, restaurant_id, "query");
        let (sum,): (Option<f64>,) = sqlx::query_as(sql)
            .bind(restaurant_id)
            .fetch_one(pool)
            .await?;
        Ok(sum)
    }
}
