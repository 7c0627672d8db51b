use async_trait::async_trait;
use skydesk_core::{BookingBackend, ConsoleError, ConsoleResult};
use skydesk_shared::{Booking, BookingDetail, PaymentStatus};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory bookings API. Ids are `1..=n` in load order.
#[derive(Default)]
pub struct MockBackend {
    bookings: Mutex<Vec<Booking>>,
    list_error: Mutex<Option<ConsoleError>>,
    delete_error: Mutex<Option<ConsoleError>>,
    gate: Mutex<Option<Arc<Notify>>>,
    list_gate: Mutex<Option<Arc<Notify>>>,
    list_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockBackend {
    pub fn with_statuses(statuses: &[&str]) -> Self {
        let bookings = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut booking = Booking::new((i + 1).to_string(), PaymentStatus::parse(status));
                booking.full_name = Some(format!("Passenger {}", (b'A' + i as u8) as char));
                booking
            })
            .collect();
        Self {
            bookings: Mutex::new(bookings),
            ..Self::default()
        }
    }

    pub fn fail_list(&self, err: ConsoleError) {
        *self.list_error.lock().unwrap() = Some(err);
    }

    pub fn fail_delete(&self, err: ConsoleError) {
        *self.delete_error.lock().unwrap() = Some(err);
    }

    /// Detail and delete calls wait for one `notify_one` each once gated.
    pub fn gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    /// List calls wait for one `notify_one` each once gated.
    pub fn gate_list(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.list_gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    async fn wait_for_gate(&self) {
        let gate = self.gate.lock().unwrap().clone();
        wait_on(gate).await;
    }
}

async fn wait_on(gate: Option<Arc<Notify>>) {
    if let Some(gate) = gate {
        gate.notified().await;
    }
}

#[async_trait]
impl BookingBackend for MockBackend {
    async fn list_bookings(&self, _token: &str) -> ConsoleResult<Vec<Booking>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.list_gate.lock().unwrap().clone();
        wait_on(gate).await;
        if let Some(err) = self.list_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn get_booking(&self, _token: &str, id: &str) -> ConsoleResult<BookingDetail> {
        self.wait_for_gate().await;
        let found = self.bookings.lock().unwrap().iter().find(|b| b.id == id).cloned();
        found.ok_or_else(|| ConsoleError::Application("Booking not found".to_string()))
    }

    async fn delete_booking(&self, _token: &str, id: &str) -> ConsoleResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        if let Some(err) = self.delete_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.bookings.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}
