//! Selected index / selected item pair
//!
//! Two views of one selection. Every mutation goes through a method that
//! sets one side and re-derives the other from the current entries, so the
//! pair never disagrees: when both are set, `item == entries[index]`.

use tabview_host::TabEntry;

/// Which sides of the selection were assigned before the host list existed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingSelection {
    pub index: bool,
    pub item: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<T> {
    index: Option<usize>,
    item: Option<T>,
    pending: PendingSelection,
}

impl<T: TabEntry> SelectionState<T> {
    pub fn new() -> Self {
        Self {
            index: None,
            item: None,
            pending: PendingSelection::default(),
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_none() && self.item.is_none()
    }

    /// Select by position
    pub fn assign_index(&mut self, index: Option<usize>, entries: &[T]) {
        self.index = index;
        self.item = index.and_then(|i| entries.get(i).cloned());
        self.pending.index = true;
    }

    /// Select by item; an item not among `entries` leaves the index unset
    pub fn assign_item(&mut self, item: Option<T>, entries: &[T]) {
        self.index = item
            .as_ref()
            .and_then(|item| entries.iter().position(|e| e == item));
        self.item = item;
        self.pending.item = true;
    }

    /// Adopt the host list's selection as-is
    pub fn mirror(&mut self, index: Option<usize>, item: Option<T>) {
        self.index = index;
        self.item = item;
    }

    /// Re-derive the pair after the entries changed underneath it. The item
    /// wins: it follows its entry to a new position, or the selection
    /// clears when the entry is gone.
    pub fn reconcile(&mut self, entries: &[T]) {
        match self.item.as_ref() {
            Some(item) => match entries.iter().position(|e| e == item) {
                Some(position) => self.index = Some(position),
                None => {
                    self.index = None;
                    self.item = None;
                }
            },
            None => {
                self.item = self.index.and_then(|i| entries.get(i).cloned());
            }
        }
    }

    /// Whether the pair agrees with `entries`
    pub fn is_consistent(&self, entries: &[T]) -> bool {
        match (self.index, self.item.as_ref()) {
            (Some(index), Some(item)) => entries.get(index) == Some(item),
            _ => true,
        }
    }

    pub fn take_pending(&mut self) -> PendingSelection {
        std::mem::take(&mut self.pending)
    }
}

impl<T: TabEntry> Default for SelectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// First index, scanning forward from `start` and wrapping to 0, for which
/// `is_selectable` holds. A `start` past the end begins at the last entry.
pub fn nearest_selectable<F>(start: usize, count: usize, mut is_selectable: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    if count == 0 {
        return None;
    }

    let start = start.min(count - 1);
    (0..count)
        .map(|offset| (start + offset) % count)
        .find(|index| is_selectable(*index))
}
