use crate::error::AppError;
use crate::models::{order_total, NewOrder, Order, OrderItem, OrderWithItems};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

const ORDER_COLUMNS: &str = "id, customer_id, restaurant_id, total_price, status";

/// Order columns plus its items aggregated into one JSON array, so a read is a single query.
const ORDER_WITH_ITEMS_SELECT: &str = r#"
    SELECT o.id, o.customer_id, o.restaurant_id, o.total_price, o.status,
        COALESCE(
            (SELECT json_agg(
                json_build_object(
                    'id', oi.id,
                    'orderId', oi.order_id,
                    'menuItemId', oi.menu_item_id,
                    'quantity', oi.quantity
                ) ORDER BY oi.id)
             FROM order_items oi
             WHERE oi.order_id = o.id),
            '[]'::json
        ) AS order_items
    FROM orders o
"#;

#[derive(FromRow)]
struct OrderWithItemsRow {
    id: i32,
    customer_id: i32,
    restaurant_id: i32,
    total_price: f64,
    status: String,
    order_items: Json<Vec<OrderItem>>,
}

impl From<OrderWithItemsRow> for OrderWithItems {
    fn from(r: OrderWithItemsRow) -> Self {
        OrderWithItems {
            order: Order {
                id: r.id,
                customer_id: r.customer_id,
                restaurant_id: r.restaurant_id,
                total_price: r.total_price,
                status: r.status,
            },
            order_items: r.order_items.0,
        }
    }
}

pub struct OrderService;

impl OrderService {
    /// Insert the order and its items in one transaction. The total is computed from the
    /// request items; item rows do not keep a price.
    pub async fn create(pool: &PgPool, body: &NewOrder) -> Result<Order, AppError> {
        let total_price = order_total(&body.items);
        let mut tx = pool.begin().await?;

        let sql = format!(
            "INSERT INTO orders (customer_id, restaurant_id, total_price) VALUES ($1, $2, $3) RETURNING {}",
            ORDER_COLUMNS
        );
        tracing::debug!(sql = %sql, total_price, "query (tx)");
        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(body.customer_id)
            .bind(body.restaurant_id)
            .bind(total_price)
            .fetch_one(&mut *tx)
            .await?;

        for item in &body.items {
            sqlx::query("INSERT INTO order_items (order_id, menu_item_id, quantity) VALUES ($1, $2, $3)")
                .bind(order.id)
                .bind(item.menu_item_id)
                .bind(item.quantity)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::info!(order_id = order.id, items = body.items.len(), total_price, "order created");
        Ok(order)
    }

    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<OrderWithItems>, AppError> {
        let sql = format!("{} WHERE o.id = $1", ORDER_WITH_ITEMS_SELECT);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, OrderWithItemsRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(OrderWithItems::from))
    }

    pub async fn list_for_customer(pool: &PgPool, customer_id: i32) -> Result<Vec<OrderWithItems>, AppError> {
        let sql = format!("{} WHERE o.customer_id = $1 ORDER BY o.id", ORDER_WITH_ITEMS_SELECT);
        tracing::debug!(sql = %sql, customer_id, "query");
        let rows = sqlx::query_as::<_, OrderWithItemsRow>(&sql)
            .bind(customer_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(OrderWithItems::from).collect())
    }

    /// A missing status leaves the stored one. `None` when the id is unknown.
    pub async fn update_status(pool: &PgPool, id: i32, status: Option<&str>) -> Result<Option<Order>, AppError> {
        let sql = format!(
            "UPDATE orders SET status = COALESCE($2, status) WHERE id = $1 RETURNING {}",
            ORDER_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
