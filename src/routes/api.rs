//! Customer, restaurant, menu and order routes.
//! Static segments (`/customers/top`, `/menu/top-items`) win over `:id` captures.

use crate::handlers::{customers, menu, orders, restaurants};
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", post(customers::create))
        .route("/customers/top", get(customers::top))
        .route("/customers/:id", get(customers::read))
        .route("/customers/:id/orders", get(customers::orders))
        .route("/restaurants", post(restaurants::create))
        .route(
            "/restaurants/:id/menu",
            get(restaurants::menu).post(restaurants::add_menu_item),
        )
        .route("/restaurants/:id/revenue", get(restaurants::revenue))
        .route("/menu/top-items", get(menu::top_items))
        .route("/menu/:id", patch(menu::update))
        .route("/orders", post(orders::create))
        .route("/orders/:id", get(orders::read))
        .route("/orders/:id/status", patch(orders::update_status))
        .with_state(state)
}
