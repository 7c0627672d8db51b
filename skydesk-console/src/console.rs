use skydesk_core::{ConsoleError, ConsoleResult, SharedBackend, SharedSession};
use skydesk_shared::{Booking, BookingDetail, Masked};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

use crate::delete_flow::DeleteFlow;
use crate::detail::DetailSlot;
use crate::present::TableBody;
use crate::stats::BookingStats;
use crate::view_state::ViewState;

/// Everything the booking-management view renders from.
#[derive(Debug, Default)]
pub struct ConsoleState {
    pub view: ViewState,
    pub stats: BookingStats,
    pub loading: bool,
    pub mounted: bool,
    pub load_error: Option<ConsoleError>,
    pub detail: Option<DetailSlot>,
    pub delete: DeleteFlow,
    pub delete_error: Option<String>,
    detail_seq: u64,
}

impl ConsoleState {
    pub fn table_body(&self) -> TableBody<'_> {
        if self.loading {
            return TableBody::Loading;
        }
        if let Some(err) = &self.load_error {
            return TableBody::Failed(err.display_message());
        }
        let rows = self.view.visible_page();
        if self.view.match_count() == 0 {
            TableBody::Empty
        } else {
            TableBody::Rows(rows)
        }
    }
}

/// The booking-management view: fetch, derive, detail, delete.
///
/// Cloning yields another handle to the same view. The state lock is never
/// held across a backend call, so search and paging stay responsive while a
/// request is in flight.
#[derive(Clone)]
pub struct BookingConsole {
    backend: SharedBackend,
    session: SharedSession,
    state: Arc<RwLock<ConsoleState>>,
    active: Arc<AtomicBool>,
    mounting: Arc<Mutex<()>>,
}

impl BookingConsole {
    pub fn new(backend: SharedBackend, session: SharedSession) -> Self {
        Self::with_view(backend, session, ViewState::default())
    }

    pub fn with_view(backend: SharedBackend, session: SharedSession, view: ViewState) -> Self {
        Self {
            backend,
            session,
            state: Arc::new(RwLock::new(ConsoleState {
                view,
                ..ConsoleState::default()
            })),
            active: Arc::new(AtomicBool::new(true)),
            mounting: Arc::new(Mutex::new(())),
        }
    }

    pub async fn state(&self) -> RwLockReadGuard<'_, ConsoleState> {
        self.state.read().await
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Marks the view as gone. Requests still in flight run to completion but
    /// their results are dropped.
    pub fn teardown(&self) {
        self.active.store(false, Ordering::SeqCst);
        info!("Booking console torn down");
    }

    fn token(&self) -> ConsoleResult<Masked<String>> {
        self.session.token().ok_or(ConsoleError::MissingCredential)
    }

    fn ensure_active(&self) -> ConsoleResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(ConsoleError::Inactive)
        }
    }

    // ------------------------------------------------------------------
    // Fetch
    // ------------------------------------------------------------------

    /// Loads the booking collection. Only the first call talks to the
    /// backend. A call made while that load is in flight waits for it, so
    /// every caller sees the settled outcome.
    pub async fn mount(&self) -> ConsoleResult<usize> {
        self.ensure_active()?;
        let _mounting = self.mounting.lock().await;
        self.ensure_active()?;
        {
            let mut state = self.state.write().await;
            if state.mounted {
                debug!("Booking console already mounted");
                return match &state.load_error {
                    Some(err) => Err(err.clone()),
                    None => Ok(state.view.collection().len()),
                };
            }
            state.mounted = true;
            state.loading = true;
        }

        let result = match self.token() {
            Ok(token) => self.backend.list_bookings(token.expose()).await,
            Err(err) => Err(err),
        };

        if !self.is_active() {
            debug!("Dropping booking list that arrived after teardown");
            return Err(ConsoleError::Inactive);
        }

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(bookings) => {
                state.stats = BookingStats::from_bookings(&bookings);
                let count = bookings.len();
                state.view.replace_collection(bookings);
                info!("Loaded {} bookings ({:?})", count, state.stats);
                Ok(count)
            }
            Err(err) => {
                warn!("Failed to load bookings: {}", err);
                state.load_error = Some(err.clone());
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // View state
    // ------------------------------------------------------------------

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.view.set_search_term(term);
    }

    pub async fn set_page(&self, index: usize) {
        self.state.write().await.view.set_page(index);
    }

    pub async fn set_page_size(&self, size: usize) -> ConsoleResult<()> {
        self.state.write().await.view.set_page_size(size)
    }

    pub async fn stats(&self) -> BookingStats {
        self.state.read().await.stats
    }

    pub async fn visible_page(&self) -> Vec<Booking> {
        let state = self.state.read().await;
        state.view.visible_page().into_iter().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Detail
    // ------------------------------------------------------------------

    /// Opens the detail dialog in its loading state, then fetches the record.
    /// A failure stays in the dialog; the table is never touched.
    pub async fn open_detail(&self, id: &str) -> ConsoleResult<BookingDetail> {
        self.ensure_active()?;
        let ticket = {
            let mut state = self.state.write().await;
            state.detail_seq += 1;
            let ticket = state.detail_seq;
            state.detail = Some(DetailSlot::opening(id, ticket));
            ticket
        };

        let result = match self.token() {
            Ok(token) => self.backend.get_booking(token.expose(), id).await,
            Err(err) => Err(err),
        };

        if !self.is_active() {
            debug!("Dropping booking detail {} that arrived after teardown", id);
            return Err(ConsoleError::Inactive);
        }

        let mut state = self.state.write().await;
        match state.detail.as_mut().filter(|slot| slot.ticket == ticket) {
            Some(slot) => slot.settle(&result),
            None => debug!("Booking detail {} arrived for a closed dialog", id),
        }
        if let Err(err) = &result {
            warn!("Failed to load booking {}: {}", id, err);
        }
        result
    }

    pub async fn close_detail(&self) {
        self.state.write().await.detail = None;
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Stages a loaded booking and opens the confirmation prompt.
    pub async fn request_delete(&self, id: &str) -> ConsoleResult<()> {
        let mut state = self.state.write().await;
        let booking = state
            .view
            .find(id)
            .cloned()
            .ok_or_else(|| ConsoleError::UnknownBooking(id.to_string()))?;
        state.delete.stage(booking)?;
        state.delete_error = None;
        Ok(())
    }

    pub async fn cancel_delete(&self) -> ConsoleResult<()> {
        self.state.write().await.delete.cancel()
    }

    /// Deletes the staged booking. On success the record leaves the collection
    /// and its status bucket is decremented; on failure nothing changes except
    /// `delete_error`. The prompt closes either way.
    pub async fn confirm_delete(&self) -> ConsoleResult<Booking> {
        self.ensure_active()?;
        let target = self.state.write().await.delete.begin()?;

        let result = match self.token() {
            Ok(token) => self.backend.delete_booking(token.expose(), &target.id).await,
            Err(err) => Err(err),
        };

        if !self.is_active() {
            debug!("Dropping delete result for {} after teardown", target.id);
            return Err(ConsoleError::Inactive);
        }

        let mut state = self.state.write().await;
        state.delete.finish();
        match result {
            Ok(()) => {
                if let Some(removed) = state.view.remove(&target.id) {
                    state.stats.retract(removed.payment_status.status());
                }
                info!("Deleted booking {}", target.id);
                Ok(target)
            }
            Err(err) => {
                // TODO: keep the prompt open on failure once the retry UX is agreed
                warn!("Failed to delete booking {}: {}", target.id, err);
                state.delete_error = Some(err.display_message());
                Err(err)
            }
        }
    }
}
