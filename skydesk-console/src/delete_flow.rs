use skydesk_core::{ConsoleError, ConsoleResult};
use skydesk_shared::Booking;

pub const DELETE_PROMPT_TITLE: &str = "Confirm Delete";
pub const DELETE_PROMPT_BODY: &str =
    "Are you sure you want to delete this booking? This action cannot be undone.";

/// Confirmation-gated delete.
///
/// `Idle → Staged → Confirming → Idle`, with `Staged → Idle` on cancel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Staged(Booking),
    Confirming(Booking),
}

impl DeleteFlow {
    pub fn is_prompt_open(&self) -> bool {
        !matches!(self, DeleteFlow::Idle)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, DeleteFlow::Confirming(_))
    }

    pub fn target(&self) -> Option<&Booking> {
        match self {
            DeleteFlow::Idle => None,
            DeleteFlow::Staged(b) | DeleteFlow::Confirming(b) => Some(b),
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.is_busy() {
            "Deleting..."
        } else {
            "Delete"
        }
    }

    /// Idle/Staged → Staged. A newer request replaces an earlier staged one.
    pub fn stage(&mut self, booking: Booking) -> ConsoleResult<()> {
        if self.is_busy() {
            return Err(ConsoleError::DeleteInProgress);
        }
        *self = DeleteFlow::Staged(booking);
        Ok(())
    }

    /// Staged → Idle. Cancel is disabled while the request is in flight.
    pub fn cancel(&mut self) -> ConsoleResult<()> {
        if self.is_busy() {
            return Err(ConsoleError::DeleteInProgress);
        }
        *self = DeleteFlow::Idle;
        Ok(())
    }

    /// Staged → Confirming, handing back the record to delete.
    pub fn begin(&mut self) -> ConsoleResult<Booking> {
        match std::mem::take(self) {
            DeleteFlow::Staged(booking) => {
                *self = DeleteFlow::Confirming(booking.clone());
                Ok(booking)
            }
            DeleteFlow::Confirming(booking) => {
                *self = DeleteFlow::Confirming(booking);
                Err(ConsoleError::DeleteInProgress)
            }
            DeleteFlow::Idle => Err(ConsoleError::NothingStaged),
        }
    }

    /// Confirming → Idle, whatever the outcome was.
    pub fn finish(&mut self) {
        *self = DeleteFlow::Idle;
    }
}
