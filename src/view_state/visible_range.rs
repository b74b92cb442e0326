//! Visible range calculation result

use super::types::{ItemIndex, LayoutOffset};

/// Range of items materialized for the current viewport.
///
/// Computed with O(1) index arithmetic from the scroll offset, since every
/// row has the same height. Indices are into the list's item sequence.
///
/// # Invariants
/// - `start_index <= end_index`
/// - `end_index <= items.len()`
/// - `translate_offset == start_index * row_height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// Index of first materialized item (inclusive).
    pub start_index: ItemIndex,
    /// Index of last materialized item (exclusive).
    pub end_index: ItemIndex,
    /// Vertical offset applied to the whole block of materialized rows.
    pub translate_offset: LayoutOffset,
}

impl VisibleRange {
    /// Create new visible range.
    ///
    /// # Panics
    /// In debug builds, panics if start_index > end_index.
    pub fn new(start_index: ItemIndex, end_index: ItemIndex, translate_offset: LayoutOffset) -> Self {
        debug_assert!(
            start_index <= end_index,
            "visible range start {start_index:?} exceeds end {end_index:?}"
        );
        Self {
            start_index,
            end_index,
            translate_offset,
        }
    }

    /// Number of materialized items.
    pub fn len(&self) -> usize {
        self.end_index.get() - self.start_index.get()
    }

    /// Check if range is empty.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Iterate over materialized item indices.
    pub fn indices(&self) -> impl Iterator<Item = ItemIndex> {
        (self.start_index.get()..self.end_index.get()).map(ItemIndex::new)
    }

    /// Check if a specific item index is materialized.
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.start_index <= index && index < self.end_index
    }

    /// The range as a plain `usize` range, for slicing.
    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start_index.get()..self.end_index.get()
    }
}

impl Default for VisibleRange {
    fn default() -> Self {
        Self {
            start_index: ItemIndex::default(),
            end_index: ItemIndex::default(),
            translate_offset: LayoutOffset::default(),
        }
    }
}
