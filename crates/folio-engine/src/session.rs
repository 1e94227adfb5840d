//! Catalog session state.
//!
//! A `CatalogSession` is the single owner of everything the browser mutates:
//! the loaded store, the active criteria and sort, the current view and the
//! detail cursor. Nothing here is global, so each test builds its own.

use folio_core::{Record, RecordId, RecordStore, SortKey, SortSpec};

use crate::display::count_label;
use crate::filter::FilterCriteria;
use crate::navigation::{Affordances, NavigationCursor};
use crate::options::FilterOptions;
use crate::view::View;

/// Browser state for one loaded catalog.
#[derive(Debug)]
pub struct CatalogSession {
    store: RecordStore,
    criteria: FilterCriteria,
    sort: SortSpec,

    /// Store indices of the current view, in view order.
    view: Vec<usize>,

    /// Record shown in the detail display, if open.
    current: Option<RecordId>,
    cursor: NavigationCursor,
}

impl CatalogSession {
    /// Create a session showing the whole catalog under `sort`.
    pub fn new(store: RecordStore, sort: SortSpec) -> Self {
        let mut session = Self {
            store,
            criteria: FilterCriteria::default(),
            sort,
            view: Vec::new(),
            current: None,
            cursor: NavigationCursor::unset(),
        };
        session.recompute();
        session
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    /// The current view.
    pub fn view(&self) -> View<'_> {
        let records = self.store.records();
        View::from_ordered(self.view.iter().map(|&index| &records[index]).collect())
    }

    /// Number of records in the current view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// "N cards shown" for the current view.
    pub fn count_label(&self) -> String {
        count_label(self.len())
    }

    /// Menu values derived from the whole catalog.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(self.store.records())
    }

    // =========================================================================
    // Criteria and sort
    // =========================================================================

    /// Replace the filter criteria and rebuild the view.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    /// Replace the sort specification and rebuild the view.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.recompute();
    }

    /// Header click: flip direction on the active key, or sort ascending by
    /// a new key. Returns the resulting specification.
    pub fn toggle_sort(&mut self, key: SortKey) -> SortSpec {
        self.set_sort(self.sort.toggled(key));
        self.sort
    }

    /// Rebuild the view and re-resolve the cursor against it.
    fn recompute(&mut self) {
        let view = View::compute(self.store.records(), &self.criteria, self.sort);
        let cursor = match &self.current {
            Some(id) => NavigationCursor::open_at(&view, id),
            None => NavigationCursor::unset(),
        };
        let indices: Vec<usize> = view.iter().map(Record::original_position).collect();

        tracing::debug!(
            "View recomputed: {} of {} records, sort {} {:?}",
            indices.len(),
            self.store.len(),
            self.sort.key,
            self.sort.direction
        );

        if self.current.is_some() && !cursor.is_set() {
            tracing::debug!("Detail record left the view, cursor cleared");
            self.current = None;
        }

        self.view = indices;
        self.cursor = cursor;
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Open the detail display on `id`.
    ///
    /// Returns the record, or None (cursor unset) if it is not in the view.
    pub fn open(&mut self, id: &RecordId) -> Option<&Record> {
        let cursor = NavigationCursor::open_at(&self.view(), id);
        self.cursor = cursor;
        self.current = cursor.is_set().then(|| id.clone());
        self.current()
    }

    /// Close the detail display.
    pub fn close(&mut self) {
        self.cursor.clear();
        self.current = None;
    }

    /// Step to the next record. No-op on the last one.
    pub fn next(&mut self) -> Option<&Record> {
        self.step(1)
    }

    /// Step to the previous record. No-op on the first one.
    pub fn previous(&mut self) -> Option<&Record> {
        self.step(-1)
    }

    /// Take up to `steps` single steps, forward for positive values and
    /// backward for negative ones. Stops at the first step that does not
    /// move, so the cost is bounded by the view length.
    pub fn step_by(&mut self, steps: isize) -> Option<&Record> {
        let delta = steps.signum();
        for _ in 0..steps.unsigned_abs() {
            if !self.advance(delta) {
                break;
            }
        }
        self.current()
    }

    fn step(&mut self, delta: isize) -> Option<&Record> {
        self.advance(delta);
        self.current()
    }

    fn advance(&mut self, delta: isize) -> bool {
        let moved = self.cursor.advance(delta, self.view.len());
        if moved {
            self.current = self.record_at_cursor().map(Record::record_id);
        }
        moved
    }

    /// The record under the cursor.
    pub fn current(&self) -> Option<&Record> {
        self.record_at_cursor()
    }

    fn record_at_cursor(&self) -> Option<&Record> {
        let position = self.cursor.position()?;
        let index = *self.view.get(position)?;
        self.store.records().get(index)
    }

    pub fn cursor(&self) -> NavigationCursor {
        self.cursor
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.cursor.has_next(self.view.len())
    }

    pub fn affordances(&self) -> Affordances {
        self.cursor.affordances(self.view.len())
    }
}
