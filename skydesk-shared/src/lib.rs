pub mod models;
pub mod pii;

pub use models::booking::{Booking, BookingDetail};
pub use models::envelope::Envelope;
pub use models::status::{PaymentStatus, StatusBucket, StatusLabel, StatusTone};
pub use pii::Masked;
