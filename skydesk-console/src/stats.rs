use serde::Serialize;
use skydesk_shared::{Booking, PaymentStatus, StatusBucket};

/// Booking counts per payment-status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

impl BookingStats {
    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        bookings.into_iter().fold(Self::default(), |mut acc, booking| {
            acc.record(booking.payment_status.status());
            acc
        })
    }

    /// Count one more booking with this status.
    pub fn record(&mut self, status: &PaymentStatus) {
        self.total += 1;
        if let Some(bucket) = self.bucket_mut(status.bucket()) {
            *bucket += 1;
        }
    }

    /// Undo exactly what `record` did for this status.
    pub fn retract(&mut self, status: &PaymentStatus) {
        self.total = self.total.saturating_sub(1);
        if let Some(bucket) = self.bucket_mut(status.bucket()) {
            *bucket = bucket.saturating_sub(1);
        }
    }

    /// Bookings whose status fell outside the known buckets.
    pub fn uncounted(&self) -> usize {
        self.total
            .saturating_sub(self.pending + self.confirmed + self.cancelled)
    }

    fn bucket_mut(&mut self, bucket: StatusBucket) -> Option<&mut usize> {
        match bucket {
            StatusBucket::Pending => Some(&mut self.pending),
            StatusBucket::Confirmed => Some(&mut self.confirmed),
            StatusBucket::Cancelled => Some(&mut self.cancelled),
            StatusBucket::Uncounted => None,
        }
    }
}
