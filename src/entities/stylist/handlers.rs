//! Stylist HTTP handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::types::Json as SqlJson;

use super::model::Stylist;
use crate::core::error::ApiResult;
use crate::core::validation::{
    parse_id, require_fields, required_str, string_list, validate_email, validate_phone,
};
use crate::server::AppState;

const REQUIRED_ON_CREATE: &[&str] = &["name", "specialty", "email", "phone"];

pub async fn list_stylists(State(state): State<AppState>) -> ApiResult<Json<Vec<Stylist>>> {
    let stylists = state.store.stylists.list().await?;
    Ok(Json(stylists))
}

pub async fn create_stylist(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Stylist>)> {
    require_fields(&payload, REQUIRED_ON_CREATE)?;
    let name = required_str(&payload, "name")?;
    let specialty = required_str(&payload, "specialty")?;
    let email = required_str(&payload, "email")?;
    let phone = required_str(&payload, "phone")?;
    validate_email(&email)?;
    validate_phone(&phone)?;

    let portfolio_images = string_list(&payload, "portfolio_images");
    let stylist = Stylist::new(
        name,
        Some(specialty),
        Some(email),
        Some(phone),
        portfolio_images,
    );
    state.store.stylists.insert(&stylist).await?;
    Ok((StatusCode::CREATED, Json(stylist)))
}

pub async fn update_stylist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Stylist>> {
    let id = parse_id(&id)?;
    let mut stylist = state.store.stylists.fetch(id).await?;

    // Update fields if provided
    if let Some(name) = payload["name"].as_str() {
        stylist.name = name.to_string();
    }
    if let Some(specialty) = payload["specialty"].as_str() {
        stylist.specialty = Some(specialty.to_string());
    }
    if let Some(email) = payload["email"].as_str() {
        validate_email(email)?;
        stylist.email = Some(email.to_string());
    }
    if let Some(phone) = payload["phone"].as_str() {
        validate_phone(phone)?;
        stylist.phone = Some(phone.to_string());
    }
    if payload["portfolio_images"].is_array() {
        stylist.portfolio_images = SqlJson(string_list(&payload, "portfolio_images"));
    }

    state.store.stylists.update(&stylist).await?;
    Ok(Json(stylist))
}

pub async fn delete_stylist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.store.stylists.delete(id).await?;
    Ok(Json(json!({ "message": "Stylist deleted successfully" })))
}
