use std::str::FromStr;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use cleanbook_web::config::AppConfig;
use cleanbook_web::{app, AppState};

fn test_app() -> Router {
    let config = AppConfig::from_lookup(|_| None).expect("default config");
    app(AppState::new(config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal encoded as string")).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_services() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"], "SEK");

    let services = body["services"].as_array().unwrap();
    assert_eq!(services.len(), 7);
    let staircase = services
        .iter()
        .find(|s| s["slug"] == "trappstadning")
        .unwrap();
    assert_eq!(staircase["category"], "staircase");
    assert_eq!(staircase["tag"], "staircase");
    assert_eq!(decimal(&staircase["price_per_unit"]), dec!(300));
}

#[tokio::test]
async fn test_factors() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/pricing/factors?worker_count=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["inefficiency_factor"]), dec!(1.4));
    assert_eq!(decimal(&body["price_surcharge_factor"]), dec!(1.10));
}

#[tokio::test]
async fn test_general_estimate() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing/general",
        Some(json!({
            "service_category": "general-area",
            "quantity": "100",
            "worker_count": 2,
            "capacity_per_worker_hour": "50",
            "price_per_unit": "25"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let estimate = &body["estimate"];
    assert_eq!(decimal(&estimate["hours"]), dec!(1.1));
    assert_eq!(decimal(&estimate["price_before_surcharge"]["amount"]), dec!(2500));
    assert_eq!(decimal(&estimate["price_with_surcharge"]["amount"]), dec!(2625));
    assert_eq!(decimal(&estimate["surcharge"]["amount"]), dec!(125));
    assert_eq!(estimate["price_with_surcharge"]["currency"], "SEK");
    assert!(estimate.get("total_area").is_none());
}

#[tokio::test]
async fn test_general_estimate_unavailable_is_null() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing/general",
        Some(json!({
            "quantity": "100",
            "worker_count": 1,
            "capacity_per_worker_hour": "0",
            "price_per_unit": "25"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["estimate"].is_null());
}

#[tokio::test]
async fn test_staircase_estimate() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing/staircase",
        Some(json!({
            "stairwell_count": 1,
            "floors_per_stairwell": 4,
            "worker_count": 1,
            "has_elevator": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["estimate"]["hours"]), dec!(3.6));
    assert_eq!(decimal(&body["estimate"]["price_before_surcharge"]["amount"]), dec!(1080));
    assert_eq!(decimal(&body["estimate"]["total_area"]), dec!(200));
}

#[tokio::test]
async fn test_laundry_weight() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing/laundry-weight",
        Some(json!({ "employee_count": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["weight_kg"]), dec!(100));
}

#[tokio::test]
async fn test_service_estimate() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing/services/fonsterputs/estimate",
        Some(json!({ "quantity": "80", "worker_count": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "fonsterputs");
    assert_eq!(body["unit"], "m2");
    // 80 / 40 / 2 * 1.1 = 1.1h, 80 * 30 = 2400, * 1.05 = 2520
    assert_eq!(decimal(&body["estimate"]["hours"]), dec!(1.1));
    assert_eq!(decimal(&body["estimate"]["price_with_surcharge"]["amount"]), dec!(2520));
}

#[tokio::test]
async fn test_service_estimate_errors() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing/services/poolstadning/estimate",
        Some(json!({ "quantity": "10" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "unknown_service");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing/services/trappstadning/estimate",
        Some(json!({ "stairwell_count": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "missing_input");
}

#[tokio::test]
async fn test_booking_wizard_flow() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/bookings", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["flow"], "booking");
    assert_eq!(body["step"], "service");
    assert_eq!(body["can_advance"], false);
    let id = body["id"].as_str().unwrap().to_string();

    // Nothing chosen yet
    let (status, body) = send(&app, Method::POST, &format!("/api/bookings/{id}/next"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "invalid_step");
    assert_eq!(body["details"][0]["field"], "service");

    let draft = json!({
        "service": "trappstadning",
        "configuration": { "stairwell_count": 1, "floors_per_stairwell": 4 },
        "preferred_date": "2030-03-14",
        "time_slot": "morning",
        "contact": {
            "name": "Anna Berg",
            "email": "anna@example.se",
            "phone": "070-123 45 67"
        },
        "address": "Storgatan 1, Uppsala"
    });
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/bookings/{id}/draft"),
        Some(draft),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["can_advance"], true);
    assert_eq!(decimal(&body["preview"]["estimate"]["hours"]), dec!(4.0));
    assert_eq!(decimal(&body["preview"]["estimate"]["price_with_surcharge"]), dec!(1200));

    for expected in ["configure", "schedule", "contact"] {
        let (status, body) =
            send(&app, Method::POST, &format!("/api/bookings/{id}/next"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], expected);
    }

    let (status, body) = send(&app, Method::POST, &format!("/api/bookings/{id}/back"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "schedule");

    let (status, body) =
        send(&app, Method::POST, &format!("/api/bookings/{id}/steps/3"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "contact");
    assert_eq!(body["can_submit"], true);

    let (status, body) =
        send(&app, Method::POST, &format!("/api/bookings/{id}/submit"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submitted"], true);
    assert!(body["step"].is_null());
    assert!(body["receipt"]["reference"].is_string());

    let (status, body) =
        send(&app, Method::POST, &format!("/api/bookings/{id}/submit"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "already_submitted");

    let (status, body) = send(&app, Method::GET, &format!("/api/bookings/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submitted"], true);
}

#[tokio::test]
async fn test_wizard_unknown_session() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/bookings/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_cancel_wizard_session() {
    let app = test_app();
    let (_, body) = send(&app, Method::POST, "/api/bookings", None).await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/bookings/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(&app, Method::GET, &format!("/api/bookings/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/bookings/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_partner_application_rejects_bad_org_number() {
    let app = test_app();
    let (_, body) = send(&app, Method::POST, "/api/partner-applications", None).await;
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["step"], "company");

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/partner-applications/{id}/draft"),
        Some(json!({ "company_name": "Glans & Co AB", "org_number": "12-34" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/partner-applications/{id}/next"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "org_number");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/partner-applications/{id}/steps/2"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "step_not_reached");
}
