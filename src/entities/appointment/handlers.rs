//! Appointment HTTP handlers
//!
//! Create requires the three references plus date and time; `status` is
//! optional and defaults to `"booked"`. Update is limited to date, time,
//! status and service_id; the client and stylist are fixed at booking.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::model::Appointment;
use crate::core::error::ApiResult;
use crate::core::validation::{
    parse_date, parse_id, parse_time, require_fields, required_uuid,
};
use crate::server::AppState;

const REQUIRED_ON_CREATE: &[&str] = &["client_id", "stylist_id", "service_id", "date", "time"];

pub async fn list_appointments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Appointment>>> {
    let appointments = state.store.appointments.list().await?;
    Ok(Json(appointments))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Appointment>)> {
    require_fields(&payload, REQUIRED_ON_CREATE)?;
    let client_id = required_uuid(&payload, "client_id")?;
    let stylist_id = required_uuid(&payload, "stylist_id")?;
    let service_id = required_uuid(&payload, "service_id")?;
    let date = parse_date(payload["date"].as_str().unwrap_or_default())?;
    let time = parse_time(payload["time"].as_str().unwrap_or_default())?;
    let status = payload["status"].as_str().unwrap_or("booked").to_string();

    let appointment = Appointment::new(client_id, stylist_id, service_id, date, time, status);
    state.store.appointments.insert(&appointment).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Appointment>> {
    let id = parse_id(&id)?;
    let mut appointment = state.store.appointments.fetch(id).await?;

    // A present date, time or service_id must parse; status follows the
    // usual update-if-provided rule.
    if !payload["date"].is_null() {
        appointment.date = parse_date(payload["date"].as_str().unwrap_or_default())?;
    }
    if !payload["time"].is_null() {
        appointment.time = parse_time(payload["time"].as_str().unwrap_or_default())?;
    }
    if let Some(status) = payload["status"].as_str() {
        appointment.status = status.to_string();
    }
    if !payload["service_id"].is_null() {
        appointment.service_id = required_uuid(&payload, "service_id")?;
    }

    state.store.appointments.update(&appointment).await?;
    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.store.appointments.delete(id).await?;
    Ok(Json(json!({ "message": "Appointment deleted successfully" })))
}
