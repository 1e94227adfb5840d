//! Navigation cursor over the current view.

use folio_core::RecordId;

use crate::view::View;

/// Position of the record shown in the detail display, or unset.
///
/// Moves are clamped: stepping before the first record or past the last is
/// a no-op, never a wraparound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    position: Option<usize>,
}

impl NavigationCursor {
    /// A cursor that points at nothing.
    pub fn unset() -> Self {
        Self { position: None }
    }

    /// Resolve `id` in `view`. Unset if the record is not in the view.
    pub fn open_at(view: &View<'_>, id: &RecordId) -> Self {
        Self {
            position: view.position_of(id),
        }
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_set(&self) -> bool {
        self.position.is_some()
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Move by `delta` within a view of `len` records.
    ///
    /// Returns true if the cursor moved. An unset cursor, or a target
    /// outside `0..len`, leaves the cursor where it is.
    pub fn advance(&mut self, delta: isize, len: usize) -> bool {
        let Some(current) = self.position else {
            return false;
        };

        match current.checked_add_signed(delta) {
            Some(target) if target < len && target != current => {
                self.position = Some(target);
                true
            }
            _ => false,
        }
    }

    /// Whether a "previous" affordance should be enabled.
    pub fn has_previous(&self) -> bool {
        matches!(self.position, Some(position) if position > 0)
    }

    /// Whether a "next" affordance should be enabled.
    pub fn has_next(&self, len: usize) -> bool {
        matches!(self.position, Some(position) if position + 1 < len)
    }

    /// Both affordance flags at once.
    pub fn affordances(&self, len: usize) -> Affordances {
        Affordances {
            previous: self.has_previous(),
            next: self.has_next(len),
        }
    }
}

/// Which of the detail display's paging controls are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affordances {
    pub previous: bool,
    pub next: bool,
}
