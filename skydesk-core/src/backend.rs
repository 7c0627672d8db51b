use async_trait::async_trait;
use skydesk_shared::{Booking, BookingDetail};
use std::sync::Arc;

use crate::ConsoleResult;

/// Remote access to the bookings API.
///
/// Implementations receive the session token explicitly; checking that one
/// exists is the caller's job.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// GET /user/getBookings
    async fn list_bookings(&self, token: &str) -> ConsoleResult<Vec<Booking>>;

    /// GET /user/getBookingById/{id}
    async fn get_booking(&self, token: &str, id: &str) -> ConsoleResult<BookingDetail>;

    /// POST /user/deleteBookingById/{id}
    async fn delete_booking(&self, token: &str, id: &str) -> ConsoleResult<()>;
}

pub type SharedBackend = Arc<dyn BookingBackend>;
