//! Data access: one service per aggregate, each method one statement or transaction.

mod customers;
mod menu;
mod orders;
mod restaurants;

pub use customers::CustomerService;
pub use menu::MenuService;
pub use orders::OrderService;
pub use restaurants::RestaurantService;

/// How many customers the leaderboard returns.
pub const TOP_CUSTOMERS_LIMIT: i64 = 5;
