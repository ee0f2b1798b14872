//! Invoice HTTP handlers
//!
//! `paid_at` is server-assigned at creation; client input for it is
//! ignored. Update is limited to the amount and payment method.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::model::Invoice;
use crate::core::error::ApiResult;
use crate::core::validation::{
    parse_id, require_fields, required_f64, required_str, required_uuid,
};
use crate::server::AppState;

const REQUIRED_ON_CREATE: &[&str] = &["appointment_id", "total_amount", "payment_method"];

pub async fn list_invoices(State(state): State<AppState>) -> ApiResult<Json<Vec<Invoice>>> {
    let invoices = state.store.invoices.list().await?;
    Ok(Json(invoices))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Invoice>)> {
    require_fields(&payload, REQUIRED_ON_CREATE)?;
    let appointment_id = required_uuid(&payload, "appointment_id")?;
    let total_amount = required_f64(&payload, "total_amount")?;
    let payment_method = required_str(&payload, "payment_method")?;

    let invoice = Invoice::new(appointment_id, total_amount, Some(payment_method));
    state.store.invoices.insert(&invoice).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Invoice>> {
    let id = parse_id(&id)?;
    let mut invoice = state.store.invoices.fetch(id).await?;

    // Update fields if provided
    if let Some(total_amount) = payload["total_amount"].as_f64() {
        invoice.total_amount = total_amount;
    }
    if let Some(payment_method) = payload["payment_method"].as_str() {
        invoice.payment_method = Some(payment_method.to_string());
    }

    state.store.invoices.update(&invoice).await?;
    Ok(Json(invoice))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.store.invoices.delete(id).await?;
    Ok(Json(json!({ "message": "Invoice deleted successfully" })))
}
