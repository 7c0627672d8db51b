pub mod backend;
pub mod session;

pub use backend::{BookingBackend, SharedBackend};
pub use session::{SessionStore, SharedSession, StaticSession};

/// Shown when the backend could not be reached or answered garbage.
pub const GENERIC_TRANSPORT_ERROR: &str = "An error occurred while contacting the server";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("No authentication token found")]
    MissingCredential,
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Application(String),
    #[error("A delete request is already in flight")]
    DeleteInProgress,
    #[error("No booking is staged for deletion")]
    NothingStaged,
    #[error("Booking not found in the loaded collection: {0}")]
    UnknownBooking(String),
    #[error("Page size must be greater than zero")]
    InvalidPageSize,
    #[error("The console has been torn down")]
    Inactive,
}

impl ConsoleError {
    /// Text shown to the operator. Blank transport descriptions fall back to a
    /// generic one.
    pub fn display_message(&self) -> String {
        match self {
            ConsoleError::Transport(msg) if msg.trim().is_empty() => {
                GENERIC_TRANSPORT_ERROR.to_string()
            }
            other => other.to_string(),
        }
    }

    /// True for the three failure kinds that come from talking to the backend.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ConsoleError::MissingCredential
                | ConsoleError::Transport(_)
                | ConsoleError::Application(_)
        )
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
