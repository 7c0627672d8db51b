use skydesk_core::{ConsoleError, ConsoleResult};
use skydesk_shared::Booking;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Working copy of the booking collection plus search and pagination input.
///
/// Nothing derived is stored: the filtered set and the visible page are
/// recomputed from scratch on every call.
#[derive(Debug, Clone)]
pub struct ViewState {
    collection: Vec<Booking>,
    search_term: String,
    page_index: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            search_term: String::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn with_page_size(page_size: usize) -> ConsoleResult<Self> {
        let mut view = Self::default();
        view.set_page_size(page_size)?;
        Ok(view)
    }

    pub fn collection(&self) -> &[Booking] {
        &self.collection
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn find(&self, id: &str) -> Option<&Booking> {
        self.collection.iter().find(|b| b.id == id)
    }

    pub(crate) fn replace_collection(&mut self, bookings: Vec<Booking>) {
        self.collection = bookings;
    }

    /// Removes the first record with this id.
    pub(crate) fn remove(&mut self, id: &str) -> Option<Booking> {
        let position = self.collection.iter().position(|b| b.id == id)?;
        Some(self.collection.remove(position))
    }

    /// Leaves the page index alone, even if it now points past the matches.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    pub fn set_page_size(&mut self, size: usize) -> ConsoleResult<()> {
        if size == 0 {
            return Err(ConsoleError::InvalidPageSize);
        }
        self.page_size = size;
        self.page_index = 0;
        Ok(())
    }

    pub fn filtered(&self) -> Vec<&Booking> {
        self.collection
            .iter()
            .filter(|b| b.matches(&self.search_term))
            .collect()
    }

    pub fn match_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn visible_page(&self) -> Vec<&Booking> {
        let start = self.page_index.saturating_mul(self.page_size);
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.match_count().div_ceil(self.page_size)
    }

    /// Pagination footer text, e.g. `11–20 of 23`.
    pub fn range_label(&self) -> String {
        let count = self.match_count();
        let start = self.page_index.saturating_mul(self.page_size);
        // A page past the end reads "N–N of N".
        let from = start.saturating_add(1).min(count);
        let to = start.saturating_add(self.page_size).min(count);
        format!("{}–{} of {}", from, to, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydesk_shared::PaymentStatus;

    fn view_with(n: usize) -> ViewState {
        let mut view = ViewState::default();
        view.replace_collection(
            (1..=n)
                .map(|i| {
                    let mut b = Booking::new(format!("bk-{:02}", i), PaymentStatus::Confirmed);
                    b.full_name = Some(if i % 2 == 0 { "Even Traveller" } else { "Odd Traveller" }.to_string());
                    b
                })
                .collect(),
        );
        view
    }

    #[test]
    fn test_pagination_bound() {
        let mut view = view_with(23);
        view.set_page_size(10).unwrap();
        for page in 0..5 {
            view.set_page(page);
            let expected = 10usize.min(23usize.saturating_sub(page * 10));
            assert_eq!(view.visible_page().len(), expected, "page {}", page);
        }
        assert_eq!(view.page_count(), 3);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut view = view_with(30);
        view.set_page(2);
        view.set_page_size(5).unwrap();
        assert_eq!(view.page_index(), 0);
        assert_eq!(view.visible_page().len(), 5);
        assert_eq!(view.set_page_size(0), Err(ConsoleError::InvalidPageSize));
        assert_eq!(view.page_size(), 5);
    }

    #[test]
    fn test_search_keeps_page_index() {
        let mut view = view_with(23);
        view.set_page(2);
        view.set_search_term("even");
        assert_eq!(view.page_index(), 2);
        // 11 matches, page 2 starts at 20
        assert!(view.visible_page().is_empty());
        view.set_page(1);
        assert_eq!(view.visible_page().len(), 1);
    }

    #[test]
    fn test_filter_matches_any_field_case_insensitively() {
        let mut view = view_with(12);
        view.set_search_term("ODD");
        assert_eq!(view.match_count(), 6);
        view.set_search_term("bk-1");
        assert_eq!(view.match_count(), 3);
        view.set_search_term("");
        assert_eq!(view.match_count(), 12);
    }

    #[test]
    fn test_range_label() {
        let mut view = view_with(23);
        assert_eq!(view.range_label(), "1–10 of 23");
        view.set_page(2);
        assert_eq!(view.range_label(), "21–23 of 23");
        view.set_search_term("nobody");
        assert_eq!(view.range_label(), "0–0 of 0");
    }

    #[test]
    fn test_range_label_past_the_end() {
        let mut view = view_with(23);
        view.set_page(usize::MAX / 2);
        assert_eq!(view.range_label(), "23–23 of 23");
        assert!(view.visible_page().is_empty());

        view.set_page(usize::MAX);
        assert_eq!(view.range_label(), "23–23 of 23");

        view.set_page(3);
        assert_eq!(view.range_label(), "23–23 of 23");

        view.set_search_term("nobody");
        assert_eq!(view.range_label(), "0–0 of 0");
    }

    #[test]
    fn test_remove_takes_exactly_one_record() {
        let mut view = view_with(3);
        let removed = view.remove("bk-02").unwrap();
        assert_eq!(removed.id, "bk-02");
        let ids: Vec<_> = view.collection().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["bk-01", "bk-03"]);
        assert!(view.remove("bk-02").is_none());
    }
}
