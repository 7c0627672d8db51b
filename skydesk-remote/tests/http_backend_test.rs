use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use skydesk_core::{BookingBackend, ConsoleError};
use skydesk_remote::HttpBookingBackend;
use skydesk_shared::PaymentStatus;
use std::sync::{Arc, Mutex};

const TOKEN: &str = "good-token";

#[derive(Clone)]
struct MockApi {
    bookings: Arc<Mutex<Vec<Value>>>,
}

type Reply = (StatusCode, Json<Value>);

fn authorized(headers: &HeaderMap) -> Result<(), Reply> {
    match headers.get("authtoken").and_then(|h| h.to_str().ok()) {
        Some(TOKEN) => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "unauthorized"})),
        )),
    }
}

async fn list(State(api): State<MockApi>, headers: HeaderMap) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    let bookings = api.bookings.lock().unwrap().clone();
    Ok(Json(json!({"success": true, "data": bookings})))
}

async fn detail(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    let bookings = api.bookings.lock().unwrap();
    match bookings.iter().find(|b| b["_id"] == id) {
        Some(booking) => {
            let mut booking = booking.clone();
            booking["passengerNames"] = json!(["Asha Rao"]);
            Ok(Json(json!({"success": true, "data": booking})))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Booking not found"})),
        )),
    }
}

async fn delete(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    let mut bookings = api.bookings.lock().unwrap();
    let before = bookings.len();
    bookings.retain(|b| b["_id"] != id);
    if bookings.len() == before {
        // The real backend answers 200 with a failure envelope here
        return Ok(Json(json!({"success": false, "message": "Nothing to delete"})));
    }
    Ok(Json(json!({"success": true, "message": "Booking deleted"})))
}

async fn spawn_mock() -> (String, MockApi) {
    let api = MockApi {
        bookings: Arc::new(Mutex::new(vec![
            json!({"_id": "b1", "fullName": "Asha Rao", "from": "DEL", "to": "BOM", "paymentStatus": "Confirmed", "price": 120.0}),
            json!({"_id": "b2", "fullName": "Liam Chen", "from": "SFO", "to": "JFK", "paymentStatus": "waiting"}),
        ])),
    };

    let app = Router::new()
        .route("/api/user/getBookings", get(list))
        .route("/api/user/getBookingById/{id}", get(detail))
        .route("/api/user/deleteBookingById/{id}", post(delete))
        .route(
            "/ragged/user/getBookings",
            get(|| async {
                Json(json!({"success": true, "data": [
                    {"_id": "r1", "paymentStatus": "Confirmed", "createdAt": "2024-01-05 15:07:00"},
                    {"_id": "r2", "paymentStatus": "pending", "price": "n/a", "adults": -2},
                    {"paymentStatus": "cancelled"}
                ]}))
            }),
        )
        .route(
            "/broken/user/getBookings",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), api)
}

#[tokio::test]
async fn test_list_bookings_sends_auth_header() {
    let (base, _api) = spawn_mock().await;
    let backend = HttpBookingBackend::new(format!("{}/api", base));

    let bookings = backend.list_bookings(TOKEN).await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, "b1");
    assert_eq!(bookings[1].payment_status, PaymentStatus::Waiting);
}

#[tokio::test]
async fn test_odd_records_do_not_blank_the_list() {
    let (base, _api) = spawn_mock().await;
    let backend = HttpBookingBackend::new(format!("{}/ragged", base));

    let bookings = backend.list_bookings(TOKEN).await.unwrap();
    let ids: Vec<_> = bookings.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["r1", "r2"]);
    assert!(bookings[0].created_at.is_some());
    assert_eq!(bookings[0].payment_status.to_string(), "Confirmed");
    assert_eq!(bookings[1].price, None);
    assert_eq!(bookings[1].adults, None);
}

#[tokio::test]
async fn test_rejected_token_surfaces_server_message() {
    let (base, _api) = spawn_mock().await;
    let backend = HttpBookingBackend::new(format!("{}/api", base));

    let err = backend.list_bookings("stale-token").await.unwrap_err();
    assert_eq!(err, ConsoleError::Application("unauthorized".to_string()));
}

#[tokio::test]
async fn test_get_booking_keeps_detail_only_fields() {
    let (base, _api) = spawn_mock().await;
    let backend = HttpBookingBackend::new(format!("{}/api", base));

    let detail = backend.get_booking(TOKEN, "b1").await.unwrap();
    assert_eq!(detail.full_name.as_deref(), Some("Asha Rao"));
    assert_eq!(detail.extra.get("passengerNames"), Some(&json!(["Asha Rao"])));

    let err = backend.get_booking(TOKEN, "missing").await.unwrap_err();
    assert_eq!(err, ConsoleError::Application("Booking not found".to_string()));
}

#[tokio::test]
async fn test_delete_booking_and_failure_envelope() {
    let (base, api) = spawn_mock().await;
    let backend = HttpBookingBackend::new(format!("{}/api", base));

    backend.delete_booking(TOKEN, "b2").await.unwrap();
    assert_eq!(api.bookings.lock().unwrap().len(), 1);

    let err = backend.delete_booking(TOKEN, "b2").await.unwrap_err();
    assert_eq!(err, ConsoleError::Application("Nothing to delete".to_string()));
}

#[tokio::test]
async fn test_plain_server_error_maps_to_transport() {
    let (base, _api) = spawn_mock().await;
    let backend = HttpBookingBackend::new(format!("{}/broken", base));

    let err = backend.list_bookings(TOKEN).await.unwrap_err();
    assert_eq!(
        err,
        ConsoleError::Transport("Request failed with status code 500".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBookingBackend::new(format!("http://{}/api", addr));
    let err = backend.list_bookings(TOKEN).await.unwrap_err();
    assert!(matches!(err, ConsoleError::Transport(_)));
    assert!(err.is_remote());
}
