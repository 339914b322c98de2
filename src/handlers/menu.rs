//! Menu item handlers not scoped to a restaurant.

use super::parse_id;
use crate::error::AppError;
use crate::models::MenuItemPatch;
use crate::service::MenuService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(patch): Json<MenuItemPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let item = MenuService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("menu item {}", id)))?;
    Ok(Json(item))
}

pub async fn top_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = MenuService::top_items(&state.pool).await?;
    Ok(Json(items))
}
