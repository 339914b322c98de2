//! Row types and request bodies. JSON uses camelCase, columns use snake_case.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
    pub restaurant_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub price: f64,
}

/// Partial update: a missing field keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    pub is_available: Option<bool>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub total_price: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
}

/// An order together with its items, as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub order_items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub items: Vec<NewOrderItem>,
}

/// `price` is the unit price the client ordered at; it feeds the order total only.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPatch {
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantitySum {
    pub quantity: i64,
}

/// One bucket of the best-seller query: `{"menuItemId": 3, "_sum": {"quantity": 9}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopItem {
    pub menu_item_id: i32,
    #[serde(rename = "_sum")]
    pub sum: QuantitySum,
}

/// Order total at creation time.
pub fn order_total(items: &[NewOrderItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(menu_item_id: i32, quantity: i32, price: f64) -> NewOrderItem {
        NewOrderItem {
            menu_item_id,
            quantity,
            price,
        }
    }

    #[test]
    fn total_is_price_times_quantity() {
        assert_eq!(order_total(&[item(1, 2, 10.0)]), 20.0);
        assert_eq!(order_total(&[item(1, 2, 10.0), item(2, 3, 2.5)]), 27.5);
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(order_total(&[]), 0.0);
    }

    #[test]
    fn customer_serializes_camel_case() {
        let c = Customer {
            id: 1,
            name: "Alice".into(),
            email: "alice@gmail.com".into(),
            phone_number: "1234567890".into(),
            address: "123 Main St".into(),
        };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["phoneNumber"], "1234567890");
        assert!(v.get("phone_number").is_none());
    }

    #[test]
    fn order_with_items_is_flat() {
        let o = OrderWithItems {
            order: Order {
                id: 4,
                customer_id: 1,
                restaurant_id: 2,
                total_price: 20.0,
                status: "pending".into(),
            },
            order_items: vec![OrderItem {
                id: 9,
                order_id: 4,
                menu_item_id: 3,
                quantity: 2,
            }],
        };
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["totalPrice"], 20.0);
        assert_eq!(v["orderItems"][0]["menuItemId"], 3);
    }

    #[test]
    fn top_item_uses_sum_key() {
        let t = TopItem {
            menu_item_id: 3,
            sum: QuantitySum { quantity: 9 },
        };
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({"menuItemId": 3, "_sum": {"quantity": 9}})
        );
    }

    #[test]
    fn menu_patch_accepts_price_only() {
        let p: MenuItemPatch = serde_json::from_value(json!({"price": 12.5})).unwrap();
        assert_eq!(p.price, Some(12.5));
        assert_eq!(p.is_available, None);
    }

    #[test]
    fn new_order_reads_camel_case_items() {
        let o: NewOrder = serde_json::from_value(json!({
            "customerId": 1,
            "restaurantId": 2,
            "items": [{"menuItemId": 3, "quantity": 2, "price": 10}]
        }))
        .unwrap();
        assert_eq!(o.items[0].menu_item_id, 3);
        assert_eq!(order_total(&o.items), 20.0);
    }
}
