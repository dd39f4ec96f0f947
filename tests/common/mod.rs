#![allow(dead_code)]

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use rental_pricing::domain::clock::FixedClock;
use rental_pricing::infrastructure::cache::NullCache;
use rental_pricing::infrastructure::remote::{RemoteVehicleRepository, RestClient};
use rental_pricing::state::AppState;

/// "Today" for every test state.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn vehicle_fixture(id: &str) -> Option<Value> {
    match id {
        // Rates as strings, features as a JSON-encoded array, images comma-separated
        "v-rent" => Some(json!({
            "_id": "v-rent",
            "name": "Toyota Corolla",
            "listingType": "rent",
            "dailyRate": "50",
            "weeklyRate": 300,
            "images": "front.jpg, back.jpg",
            "features": "[\"AC\",\"GPS\"]"
        })),
        "v-daily" => Some(json!({
            "id": "v-daily",
            "name": "Fiat Panda",
            "listingType": "rent",
            "dailyRate": 40,
            "images": ["panda.jpg"],
            "features": []
        })),
        "v-unpriced" => Some(json!({
            "_id": "v-unpriced",
            "name": "Draft listing",
            "listingType": "rent"
        })),
        "v-sale" => Some(json!({
            "_id": "v-sale",
            "name": "Ford Ranger",
            "listingType": "sale",
            "price": 18500,
            "images": [],
            "features": "4x4,Towbar"
        })),
        "v-broken" => Some(json!({
            "_id": "v-broken",
            "listingType": "rent",
            "dailyRate": -10
        })),
        _ => None,
    }
}

fn bookings_fixture(id: &str) -> Option<Value> {
    match id {
        "v-rent" => Some(json!([
            { "_id": "b1", "startDate": "2025-01-10T00:00:00.000Z", "endDate": "2025-01-15T00:00:00.000Z" },
            { "_id": "b2", "startDate": "2025-01-20", "endDate": "2025-01-21" }
        ])),
        "v-daily" | "v-unpriced" | "v-sale" | "v-broken" => Some(json!([])),
        _ => None,
    }
}

async fn stub_vehicle(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id == "v-down" {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    vehicle_fixture(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn stub_bookings(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    bookings_fixture(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Starts an in-process marketplace backend and returns its base URL
/// (`http://127.0.0.1:<port>/api/v1`).
pub async fn spawn_backend() -> Url {
    let app = Router::new()
        .route("/api/v1", get(|| async { "ok" }))
        .route("/api/v1/vehicles/{id}", get(stub_vehicle))
        .route("/api/v1/vehicles/{id}/bookings", get(stub_bookings));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}/api/v1", addr)).unwrap()
}

pub fn create_repository(base_url: Url) -> Arc<RemoteVehicleRepository> {
    let client = RestClient::new(base_url, Duration::from_secs(2)).unwrap();
    Arc::new(RemoteVehicleRepository::new(client))
}

pub async fn create_test_state() -> AppState {
    let base_url = spawn_backend().await;
    state_for(base_url)
}

/// State pointing at a port nothing listens on.
pub fn create_unreachable_state() -> AppState {
    state_for(Url::parse("http://127.0.0.1:9/api/v1").unwrap())
}

fn state_for(base_url: Url) -> AppState {
    AppState::new(
        create_repository(base_url),
        Arc::new(NullCache::new()),
        Arc::new(FixedClock::new(today())),
        None,
        "$",
    )
}
