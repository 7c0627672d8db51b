use skydesk_core::ConsoleResult;
use skydesk_shared::BookingDetail;

pub const DETAIL_FAILED_TEXT: &str = "Failed to load booking details";

/// Transient storage behind an open booking-detail dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSlot {
    pub booking_id: String,
    pub record: Option<BookingDetail>,
    pub loading: bool,
    pub error: Option<String>,
    /// Identifies which open this slot belongs to, so a late answer for an
    /// earlier open is not applied to a newer one.
    pub(crate) ticket: u64,
}

/// What the detail dialog shows.
#[derive(Debug, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    Loaded(&'a BookingDetail),
    Failed(&'a str),
}

impl DetailSlot {
    pub(crate) fn opening(booking_id: &str, ticket: u64) -> Self {
        Self {
            booking_id: booking_id.to_string(),
            record: None,
            loading: true,
            error: None,
            ticket,
        }
    }

    pub(crate) fn settle(&mut self, result: &ConsoleResult<BookingDetail>) {
        self.loading = false;
        match result {
            Ok(detail) => {
                self.record = Some(detail.clone());
                self.error = None;
            }
            Err(err) => {
                self.record = None;
                self.error = Some(err.display_message());
            }
        }
    }

    pub fn view(&self) -> DetailView<'_> {
        if self.loading {
            return DetailView::Loading;
        }
        match &self.record {
            Some(record) => DetailView::Loaded(record),
            None => DetailView::Failed(DETAIL_FAILED_TEXT),
        }
    }
}
