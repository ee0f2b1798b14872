//! Service HTTP handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::model::Service;
use crate::core::error::ApiResult;
use crate::core::validation::{
    parse_id, require_fields, required_f64, required_i64, required_str,
};
use crate::server::AppState;

const REQUIRED_ON_CREATE: &[&str] = &["name", "duration", "price"];

pub async fn list_services(State(state): State<AppState>) -> ApiResult<Json<Vec<Service>>> {
    let services = state.store.services.list().await?;
    Ok(Json(services))
}

pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    require_fields(&payload, REQUIRED_ON_CREATE)?;
    let name = required_str(&payload, "name")?;
    let duration = required_i64(&payload, "duration")?;
    let price = required_f64(&payload, "price")?;

    let service = Service::new(name, Some(duration), Some(price));
    state.store.services.insert(&service).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Service>> {
    let id = parse_id(&id)?;
    let mut service = state.store.services.fetch(id).await?;

    // Update fields if provided
    if let Some(name) = payload["name"].as_str() {
        service.name = name.to_string();
    }
    if let Some(duration) = payload["duration"].as_i64() {
        service.duration = Some(duration);
    }
    if let Some(price) = payload["price"].as_f64() {
        service.price = Some(price);
    }

    state.store.services.update(&service).await?;
    Ok(Json(service))
}

pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.store.services.delete(id).await?;
    Ok(Json(json!({ "message": "Service deleted successfully" })))
}
