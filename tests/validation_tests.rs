//! Validation tests for the salon REST API
//!
//! Pins down the request-level contract: required fields, format checks,
//! referential errors and identifier parsing, including the exact error
//! messages clients are allowed to rely on.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use salon::server::{AppState, build_router};
use salon::storage::SalonStore;

// =============================================================================
// Helpers
// =============================================================================

async fn create_test_server() -> TestServer {
    let store = SalonStore::in_memory()
        .await
        .expect("in-memory store should bootstrap");
    TestServer::new(build_router(AppState { store })).expect("test server should start")
}

async fn assert_bad_request(server: &TestServer, path: &str, payload: Value, message: &str) {
    let response = server.post(path).json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], message);
}

async fn seed_booking(server: &TestServer) -> Value {
    let client: Value = server
        .post("/clients")
        .json(&json!({"name": "Ann", "phone": "555-1111", "email": "ann@x.com"}))
        .await
        .json();
    let stylist: Value = server
        .post("/stylists")
        .json(&json!({"name": "Bo", "specialty": "Color", "email": "bo@x.com", "phone": "555-2222"}))
        .await
        .json();
    let service: Value = server
        .post("/services")
        .json(&json!({"name": "Cut", "duration": 30, "price": 40.0}))
        .await
        .json();

    server
        .post("/appointments")
        .json(&json!({
            "client_id": client["id"],
            "stylist_id": stylist["id"],
            "service_id": service["id"],
            "date": "2024-06-01",
            "time": "10:00:00"
        }))
        .await
        .json()
}

// =============================================================================
// Required fields
// =============================================================================

mod required_field_tests {
    use super::*;

    #[tokio::test]
    async fn test_client_requires_name() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/clients",
            json!({"phone": "555-1111", "email": "ann@x.com"}),
            "Missing required field: name",
        )
        .await;
    }

    #[tokio::test]
    async fn test_empty_string_counts_as_missing() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/clients",
            json!({"name": "", "phone": "555-1111", "email": "ann@x.com"}),
            "Missing required field: name",
        )
        .await;
    }

    #[tokio::test]
    async fn test_null_counts_as_missing() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/clients",
            json!({"name": "Ann", "phone": "555-1111", "email": null}),
            "Missing required field: email",
        )
        .await;
    }

    #[tokio::test]
    async fn test_stylist_requires_specialty() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/stylists",
            json!({"name": "Bo", "email": "bo@x.com", "phone": "555-2222"}),
            "Missing required field: specialty",
        )
        .await;
    }

    #[tokio::test]
    async fn test_service_requires_duration() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/services",
            json!({"name": "Cut", "price": 40.0}),
            "Missing required field: duration",
        )
        .await;
    }

    #[tokio::test]
    async fn test_zero_duration_counts_as_missing() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/services",
            json!({"name": "Cut", "duration": 0, "price": 40.0}),
            "Missing required field: duration",
        )
        .await;
    }

    #[tokio::test]
    async fn test_zero_amount_counts_as_missing() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/invoices",
            json!({
                "appointment_id": uuid::Uuid::new_v4(),
                "total_amount": 0.0,
                "payment_method": "card"
            }),
            "Missing required field: total_amount",
        )
        .await;
    }

    #[tokio::test]
    async fn test_appointment_requires_client_id() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/appointments",
            json!({
                "stylist_id": uuid::Uuid::new_v4(),
                "service_id": uuid::Uuid::new_v4(),
                "date": "2024-06-01",
                "time": "10:00:00"
            }),
            "Missing required field: client_id",
        )
        .await;
    }

    #[tokio::test]
    async fn test_appointment_requires_time() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/appointments",
            json!({
                "client_id": uuid::Uuid::new_v4(),
                "stylist_id": uuid::Uuid::new_v4(),
                "service_id": uuid::Uuid::new_v4(),
                "date": "2024-06-01"
            }),
            "Missing required field: time",
        )
        .await;
    }

    #[tokio::test]
    async fn test_invoice_requires_payment_method() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/invoices",
            json!({"appointment_id": uuid::Uuid::new_v4(), "total_amount": 40.0}),
            "Missing required field: payment_method",
        )
        .await;
    }

    #[tokio::test]
    async fn test_first_missing_field_wins() {
        let server = create_test_server().await;
        // name, phone and email are all absent; the first in declaration
        // order is reported
        assert_bad_request(
            &server,
            "/clients",
            json!({}),
            "Missing required field: name",
        )
        .await;
    }
}

// =============================================================================
// Format checks
// =============================================================================

mod format_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/clients",
            json!({"name": "Ann", "phone": "555-1111", "email": "not-an-email"}),
            "Invalid email format",
        )
        .await;
    }

    #[tokio::test]
    async fn test_minimal_email_accepted() {
        let server = create_test_server().await;

        let response = server
            .post("/clients")
            .json(&json!({"name": "Ann", "phone": "555-1111", "email": "a@b.co"}))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_invalid_phone_rejected() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/clients",
            json!({"name": "Ann", "phone": "555-CALL-NOW", "email": "ann@x.com"}),
            "Invalid phone format",
        )
        .await;
    }

    #[tokio::test]
    async fn test_punctuated_phone_accepted() {
        let server = create_test_server().await;

        let response = server
            .post("/clients")
            .json(&json!({"name": "Ann", "phone": "(555) 123-4567", "email": "ann@x.com"}))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_stylist_email_validated_too() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/stylists",
            json!({"name": "Bo", "specialty": "Color", "email": "bo@", "phone": "555-2222"}),
            "Invalid email format",
        )
        .await;
    }

    #[tokio::test]
    async fn test_invalid_date_rejected() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/appointments",
            json!({
                "client_id": uuid::Uuid::new_v4(),
                "stylist_id": uuid::Uuid::new_v4(),
                "service_id": uuid::Uuid::new_v4(),
                "date": "15-03-2024",
                "time": "10:00:00"
            }),
            "Invalid date format. Use YYYY-MM-DD",
        )
        .await;
    }

    #[tokio::test]
    async fn test_invalid_time_rejected() {
        let server = create_test_server().await;
        assert_bad_request(
            &server,
            "/appointments",
            json!({
                "client_id": uuid::Uuid::new_v4(),
                "stylist_id": uuid::Uuid::new_v4(),
                "service_id": uuid::Uuid::new_v4(),
                "date": "2024-06-01",
                "time": "2:30 PM"
            }),
            "Invalid time format. Use HH:MM:SS",
        )
        .await;
    }

    #[tokio::test]
    async fn test_update_revalidates_email() {
        let server = create_test_server().await;
        let client: Value = server
            .post("/clients")
            .json(&json!({"name": "Ann", "phone": "555-1111", "email": "ann@x.com"}))
            .await
            .json();
        let id = client["id"].as_str().unwrap();

        let response = server
            .put(&format!("/clients/{id}"))
            .json(&json!({"email": "broken"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_update_revalidates_date() {
        let server = create_test_server().await;
        let appointment = seed_booking(&server).await;
        let id = appointment["id"].as_str().unwrap();

        let response = server
            .put(&format!("/appointments/{id}"))
            .json(&json!({"date": "June 1st"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid date format. Use YYYY-MM-DD");
    }

    #[tokio::test]
    async fn test_wrong_type_for_name_rejected() {
        let server = create_test_server().await;
        // 5 is truthy, so it survives the presence check and fails typing
        assert_bad_request(
            &server,
            "/clients",
            json!({"name": 5, "phone": "555-1111", "email": "ann@x.com"}),
            "Invalid name format",
        )
        .await;
    }

    #[tokio::test]
    async fn test_non_numeric_amount_rejected() {
        let server = create_test_server().await;
        let appointment = seed_booking(&server).await;

        assert_bad_request(
            &server,
            "/invoices",
            json!({
                "appointment_id": appointment["id"],
                "total_amount": "forty",
                "payment_method": "card"
            }),
            "Invalid total_amount format",
        )
        .await;
    }
}

// =============================================================================
// Referential errors
// =============================================================================

mod reference_tests {
    use super::*;

    #[tokio::test]
    async fn test_appointment_with_unknown_client_rejected() {
        let server = create_test_server().await;

        assert_bad_request(
            &server,
            "/appointments",
            json!({
                "client_id": uuid::Uuid::new_v4(),
                "stylist_id": uuid::Uuid::new_v4(),
                "service_id": uuid::Uuid::new_v4(),
                "date": "2024-06-01",
                "time": "10:00:00"
            }),
            "Appointment references a missing record",
        )
        .await;
    }

    #[tokio::test]
    async fn test_appointment_with_malformed_client_id_rejected() {
        let server = create_test_server().await;

        assert_bad_request(
            &server,
            "/appointments",
            json!({
                "client_id": "not-a-uuid",
                "stylist_id": uuid::Uuid::new_v4(),
                "service_id": uuid::Uuid::new_v4(),
                "date": "2024-06-01",
                "time": "10:00:00"
            }),
            "Invalid client_id format",
        )
        .await;
    }

    #[tokio::test]
    async fn test_invoice_with_unknown_appointment_rejected() {
        let server = create_test_server().await;

        assert_bad_request(
            &server,
            "/invoices",
            json!({
                "appointment_id": uuid::Uuid::new_v4(),
                "total_amount": 40.0,
                "payment_method": "card"
            }),
            "Invoice references a missing record",
        )
        .await;
    }

    #[tokio::test]
    async fn test_update_appointment_to_unknown_service_rejected() {
        let server = create_test_server().await;
        let appointment = seed_booking(&server).await;
        let id = appointment["id"].as_str().unwrap();

        let response = server
            .put(&format!("/appointments/{id}"))
            .json(&json!({"service_id": uuid::Uuid::new_v4()}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Appointment references a missing record");
    }
}

// =============================================================================
// Path identifiers
// =============================================================================

mod path_id_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_with_malformed_id_rejected() {
        let server = create_test_server().await;

        let response = server
            .put("/clients/not-a-uuid")
            .json(&json!({"name": "Ann"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid entity ID format");
    }

    #[tokio::test]
    async fn test_delete_with_malformed_id_rejected() {
        let server = create_test_server().await;

        let response = server.delete("/services/123").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid entity ID format");
    }

    #[tokio::test]
    async fn test_not_found_message_names_entity_and_id() {
        let server = create_test_server().await;
        let id = uuid::Uuid::new_v4();

        let response = server.delete(&format!("/stylists/{id}")).await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(
            body["error"],
            format!("Stylist with id '{id}' not found")
        );
    }
}
