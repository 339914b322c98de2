//! Order handlers.

use super::parse_id;
use crate::error::AppError;
use crate::models::{NewOrder, StatusPatch};
use crate::service::OrderService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewOrder>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let order = OrderService::read(&state.pool, id).await?;
    Ok(Json(order))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<StatusPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let order = OrderService::update_status(&state.pool, id, body.status.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    Ok(Json(order))
}
