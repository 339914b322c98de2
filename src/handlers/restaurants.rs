//! Restaurant handlers, including the per-restaurant menu.

use super::parse_id;
use crate::error::AppError;
use crate::models::{NewMenuItem, NewRestaurant};
use crate::service::{MenuService, RestaurantService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewRestaurant>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

pub async fn menu(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let items = MenuService::list_available(&state.pool, id).await?;
    Ok(Json(items))
}

pub async fn add_menu_item(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<NewMenuItem>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let item = MenuService::create(&state.pool, id, &body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// A bare number, or `null` when the restaurant has no orders.
pub async fn revenue(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let revenue = RestaurantService::revenue(&state.pool, id).await?;
    Ok(Json(revenue))
}
