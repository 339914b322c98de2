//! Customer handlers.

use super::parse_id;
use crate::error::AppError;
use crate::models::NewCustomer;
use crate::service::{CustomerService, OrderService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCustomer>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Unknown ids answer `null` with 200.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let customer = CustomerService::read(&state.pool, id).await?;
    Ok(Json(customer))
}

pub async fn orders(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let orders = OrderService::list_for_customer(&state.pool, id).await?;
    Ok(Json(orders))
}

pub async fn top(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = CustomerService::top(&state.pool).await?;
    Ok(Json(customers))
}
