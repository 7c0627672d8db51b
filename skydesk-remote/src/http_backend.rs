use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use skydesk_core::{BookingBackend, ConsoleError, ConsoleResult};
use skydesk_shared::{Booking, BookingDetail, Envelope};
use std::time::Duration;
use tracing::{debug, warn};

use crate::app_config::ApiConfig;

/// Header the backend reads the session token from.
pub const AUTH_HEADER: &str = "authToken";

/// Bookings API over HTTP.
#[derive(Clone)]
pub struct HttpBookingBackend {
    client: Client,
    base_url: String,
}

impl HttpBookingBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(api: &ApiConfig) -> ConsoleResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()
            .map_err(transport)?;
        Ok(Self::with_client(client, api.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends an authenticated request and unwraps the response envelope.
    ///
    /// Non-2xx answers and `success: false` envelopes both become errors,
    /// carrying the server's `message` when there is one.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: &str,
    ) -> ConsoleResult<Envelope<T>> {
        let response = request
            .header(AUTH_HEADER, token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .filter(|m| !m.trim().is_empty());
            warn!("Bookings API answered {}", status);
            return Err(match message {
                Some(message) => ConsoleError::Application(message),
                None => ConsoleError::Transport(format!(
                    "Request failed with status code {}",
                    status.as_u16()
                )),
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            ConsoleError::Transport(format!("Invalid response from server: {}", e))
        })?;

        if !envelope.success {
            return Err(ConsoleError::Application(envelope.rejection_message()));
        }

        Ok(envelope)
    }
}

#[async_trait]
impl BookingBackend for HttpBookingBackend {
    async fn list_bookings(&self, token: &str) -> ConsoleResult<Vec<Booking>> {
        let url = self.url("/user/getBookings");
        debug!("GET {}", url);

        let envelope: Envelope<Vec<Value>> = self.send(self.client.get(&url), token).await?;
        let records = envelope
            .data
            .ok_or_else(|| ConsoleError::Application("Response did not include any bookings".to_string()))?;
        Ok(decode_bookings(records))
    }

    async fn get_booking(&self, token: &str, id: &str) -> ConsoleResult<BookingDetail> {
        let url = self.url(&format!("/user/getBookingById/{}", id));
        debug!("GET {}", url);

        let envelope: Envelope<BookingDetail> = self.send(self.client.get(&url), token).await?;
        envelope
            .data
            .ok_or_else(|| ConsoleError::Application(format!("Booking {} not found", id)))
    }

    async fn delete_booking(&self, token: &str, id: &str) -> ConsoleResult<()> {
        let url = self.url(&format!("/user/deleteBookingById/{}", id));
        debug!("POST {}", url);

        let request = self.client.post(&url).body("{}");
        let _: Envelope<Value> = self.send(request, token).await?;
        Ok(())
    }
}

/// Records that cannot be decoded at all are skipped, the rest still show.
fn decode_bookings(records: Vec<Value>) -> Vec<Booking> {
    let total = records.len();
    let bookings: Vec<Booking> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(booking) => Some(booking),
            Err(e) => {
                warn!("Skipping booking record {}: {}", index, e);
                None
            }
        })
        .collect();
    if bookings.len() < total {
        warn!("Decoded {} of {} booking records", bookings.len(), total);
    }
    bookings
}

fn transport(err: reqwest::Error) -> ConsoleError {
    ConsoleError::Transport(err.to_string())
}
