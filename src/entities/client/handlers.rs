//! Client HTTP handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::model::Client;
use crate::core::error::ApiResult;
use crate::core::validation::{
    parse_id, require_fields, required_str, validate_email, validate_phone,
};
use crate::server::AppState;

const REQUIRED_ON_CREATE: &[&str] = &["name", "phone", "email"];

pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<Client>>> {
    let clients = state.store.clients.list().await?;
    Ok(Json(clients))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Client>)> {
    require_fields(&payload, REQUIRED_ON_CREATE)?;
    let name = required_str(&payload, "name")?;
    let phone = required_str(&payload, "phone")?;
    let email = required_str(&payload, "email")?;
    validate_phone(&phone)?;
    validate_email(&email)?;

    let client = Client::new(name, Some(phone), Some(email));
    state.store.clients.insert(&client).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Client>> {
    let id = parse_id(&id)?;
    let mut client = state.store.clients.fetch(id).await?;

    // Update fields if provided
    if let Some(name) = payload["name"].as_str() {
        client.name = name.to_string();
    }
    if let Some(phone) = payload["phone"].as_str() {
        validate_phone(phone)?;
        client.phone = Some(phone.to_string());
    }
    if let Some(email) = payload["email"].as_str() {
        validate_email(email)?;
        client.email = Some(email.to_string());
    }

    state.store.clients.update(&client).await?;
    Ok(Json(client))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.store.clients.delete(id).await?;
    Ok(Json(json!({ "message": "Client deleted successfully" })))
}
