mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use rental_pricing::api::handlers::calendar_handler;

async fn server() -> TestServer {
    let state = common::create_test_state().await;
    let app = Router::new()
        .route("/api/vehicles/{id}/calendar", get(calendar_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_calendar_marks_booked_days() {
    let server = server().await;

    let response = server
        .get("/api/vehicles/v-rent/calendar")
        .add_query_param("year", 2025)
        .add_query_param("month", 1)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["year"], 2025);
    assert_eq!(json["month"], 1);

    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(json["occupied_days"], 8);

    assert_eq!(days[8]["date"], "2025-01-09");
    assert_eq!(days[8]["occupied"], false);
    assert_eq!(days[9]["date"], "2025-01-10");
    assert_eq!(days[9]["occupied"], true);
    assert_eq!(days[14]["occupied"], true);
    assert_eq!(days[15]["occupied"], false);
}

#[tokio::test]
async fn test_calendar_defaults_to_current_month() {
    let server = server().await;

    let response = server.get("/api/vehicles/v-daily/calendar").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["year"], 2025);
    assert_eq!(json["month"], 1);
    assert_eq!(json["occupied_days"], 0);
}

#[tokio::test]
async fn test_calendar_leap_february() {
    let server = server().await;

    let response = server
        .get("/api/vehicles/v-daily/calendar")
        .add_query_param("year", 2024)
        .add_query_param("month", 2)
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["days"].as_array().unwrap().len(), 29);
}

#[tokio::test]
async fn test_calendar_invalid_month() {
    let server = server().await;

    let response = server
        .get("/api/vehicles/v-rent/calendar")
        .add_query_param("year", 2025)
        .add_query_param("month", 13)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["reason"], "invalid_month");
}

#[tokio::test]
async fn test_calendar_unknown_vehicle() {
    let server = server().await;

    let response = server.get("/api/vehicles/missing/calendar").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_calendar_non_numeric_month_uses_error_envelope() {
    let server = server().await;

    let response = server
        .get("/api/vehicles/v-rent/calendar")
        .add_query_param("month", "abc")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["reason"], "malformed_query");
}

#[tokio::test]
async fn test_calendar_non_numeric_year_uses_error_envelope() {
    let server = server().await;

    let response = server
        .get("/api/vehicles/v-rent/calendar")
        .add_query_param("year", "20x5")
        .add_query_param("month", 1)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}
