use crate::error::AppError;
use crate::models::{MenuItem, MenuItemPatch, NewMenuItem, QuantitySum, TopItem};
use sqlx::PgPool;

const MENU_COLUMNS: &str = "id, name, price, is_available, restaurant_id";

pub struct MenuService;

impl MenuService {
    /// Available items of one restaurant.
    pub async fn list_available(pool: &PgPool, restaurant_id: i32) -> Result<Vec<MenuItem>, AppError> {
        let sql = format!(
            "SELECT {} FROM menu_items WHERE restaurant_id = $1 AND is_available = TRUE ORDER BY id",
            MENU_COLUMNS
        );
        tracing::debug!(sql = %sql, restaurant_id, "query");
        let rows = sqlx::query_as::<_, MenuItem>(&sql)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(pool: &PgPool, restaurant_id: i32, body: &NewMenuItem) -> Result<MenuItem, AppError> {
        let sql = format!(
            "INSERT INTO menu_items (name, price, restaurant_id) VALUES ($1, $2, $3) RETURNING {}",
            MENU_COLUMNS
        );
        tracing::debug!(sql = %sql, restaurant_id, "query");
        let row = sqlx::query_as::<_, MenuItem>(&sql)
            .bind(&body.name)
            .bind(body.price)
            .bind(restaurant_id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Fields left out of the patch keep their stored value. `None` when the id is unknown.
    pub async fn update(pool: &PgPool, id: i32, patch: &MenuItemPatch) -> Result<Option<MenuItem>, AppError> {
        let sql = format!(
            "UPDATE menu_items SET is_available = COALESCE($2, is_available), price = COALESCE($3, price) WHERE id = $1 RETURNING {}",
            MENU_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, MenuItem>(&sql)
            .bind(id)
            .bind(patch.is_available)
            .bind(patch.price)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// The single best-selling menu item by summed quantity, as a 0- or 1-element list.
    pub async fn top_items(pool: &PgPool) -> Result<Vec<TopItem>, AppError> {
        let sql = r#"
            SELECT menu_item_id, SUM(quantity) AS quantity
            FROM order_items
            GROUP BY menu_item_id
            ORDER BY SUM(quantity) DESC, MIN(id) ASC
            LIMIT 1
        "#;
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<(i32, i64)> = sqlx::query_as(sql).fetch_all(pool).await?;
        Ok(rows
            .into_iter()
            .map(|(menu_item_id, quantity)| TopItem {
                menu_item_id,
                sum: QuantitySum { quantity },
            })
            .collect())
    }
}
