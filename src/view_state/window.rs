//! Windowed list renderer.
//!
//! Holds an ordered item sequence together with the viewport state needed
//! to decide which rows must be materialized. All rows share one height,
//! so the visible range is plain index arithmetic:
//!
//! ```text
//! raw_start = floor(scroll_offset / row_height)
//! raw_end   = raw_start + ceil(viewport_height / row_height) + overscan
//! start     = max(0, raw_start - overscan)
//! end       = min(len, raw_end)
//! ```
//!
//! The list never clamps the scroll offset. The host container owns the
//! scroll bounds and is expected to clamp with [`VirtualList::max_scroll_offset`]
//! before calling [`VirtualList::on_scroll`].

use super::types::{ItemIndex, LayoutOffset};
use super::visible_range::VisibleRange;
use thiserror::Error;
use tracing::trace;

/// Rejected list geometry: both heights must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "invalid list configuration: row height ({row_height}) and viewport height \
     ({viewport_height}) must both be positive"
)]
pub struct InvalidConfiguration {
    /// Requested row height.
    pub row_height: usize,
    /// Requested viewport height.
    pub viewport_height: usize,
}

/// Validated viewport geometry.
///
/// # Invariants
/// - `row_height >= 1`
/// - `viewport_height >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    row_height: usize,
    viewport_height: usize,
    overscan: usize,
}

impl WindowConfig {
    /// Rows rendered beyond each edge of the viewport unless overridden.
    pub const DEFAULT_OVERSCAN: usize = 5;

    /// Smart constructor. Uses [`Self::DEFAULT_OVERSCAN`].
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration`] if either height is zero.
    pub fn new(row_height: usize, viewport_height: usize) -> Result<Self, InvalidConfiguration> {
        if row_height == 0 || viewport_height == 0 {
            return Err(InvalidConfiguration {
                row_height,
                viewport_height,
            });
        }
        Ok(Self {
            row_height,
            viewport_height,
            overscan: Self::DEFAULT_OVERSCAN,
        })
    }

    /// Replace the overscan row count.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Height of every row in layout units.
    pub fn row_height(&self) -> usize {
        self.row_height
    }

    /// Height of the scrollable viewport in layout units.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Extra rows materialized on each side of the viewport.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Number of rows needed to cover the viewport, rounded up.
    pub fn rows_per_viewport(&self) -> usize {
        self.viewport_height.div_ceil(self.row_height)
    }
}

/// Compute the materialized range for `item_count` items.
///
/// Pure: the same inputs always yield the same range.
pub fn compute_visible_range(
    config: &WindowConfig,
    scroll_offset: LayoutOffset,
    item_count: usize,
) -> VisibleRange {
    let raw_start = scroll_offset.get() / config.row_height;
    let raw_end = raw_start
        .saturating_add(config.rows_per_viewport())
        .saturating_add(config.overscan);

    let end = raw_end.min(item_count);
    // An unclamped offset past the end would otherwise put start after end.
    let start = raw_start.saturating_sub(config.overscan).min(end);

    VisibleRange::new(
        ItemIndex::new(start),
        ItemIndex::new(end),
        LayoutOffset::new(start.saturating_mul(config.row_height)),
    )
}

/// A windowed view over an ordered item sequence.
///
/// Items are only ever read. Replacing or appending the sequence is a full
/// recomputation against the new length on the next query; nothing about
/// the previous range is cached.
#[derive(Debug, Clone)]
pub struct VirtualList<T> {
    items: Vec<T>,
    config: WindowConfig,
    scroll_offset: LayoutOffset,
}

impl<T> VirtualList<T> {
    /// Create a list scrolled to the top.
    pub fn new(items: Vec<T>, config: WindowConfig) -> Self {
        Self {
            items,
            config,
            scroll_offset: LayoutOffset::ZERO,
        }
    }

    /// The item sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: ItemIndex) -> Option<&T> {
        self.items.get(index.get())
    }

    /// Current geometry.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> LayoutOffset {
        self.scroll_offset
    }

    /// Record a scroll event from the host container.
    ///
    /// The offset is stored as given.
    pub fn on_scroll(&mut self, new_offset: LayoutOffset) {
        trace!(from = self.scroll_offset.get(), to = new_offset.get(), "scroll");
        self.scroll_offset = new_offset;
    }

    /// Scroll so that the row at `index` starts at the top of the viewport.
    ///
    /// Silently ignored when the list is empty or `index` is out of bounds.
    pub fn scroll_to_index(&mut self, index: ItemIndex) {
        if index.get() >= self.items.len() {
            trace!(
                index = index.get(),
                len = self.items.len(),
                "scroll_to_index out of bounds, ignored"
            );
            return;
        }
        self.on_scroll(LayoutOffset::new(
            index.get().saturating_mul(self.config.row_height),
        ));
    }

    /// Scroll back to offset 0.
    pub fn scroll_to_top(&mut self) {
        self.on_scroll(LayoutOffset::ZERO);
    }

    /// Change the viewport height, keeping the scroll offset.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration`] for a zero height; the previous
    /// geometry is kept in that case.
    pub fn resize(&mut self, viewport_height: usize) -> Result<(), InvalidConfiguration> {
        let config = WindowConfig::new(self.config.row_height, viewport_height)?
            .with_overscan(self.config.overscan);
        self.config = config;
        Ok(())
    }

    /// Replace the whole geometry (row height, viewport, overscan).
    pub fn set_config(&mut self, config: WindowConfig) {
        self.config = config;
    }

    /// Replace the item sequence.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Append items to the end of the sequence.
    pub fn extend_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Range of items that must be materialized right now.
    pub fn visible_range(&self) -> VisibleRange {
        compute_visible_range(&self.config, self.scroll_offset, self.items.len())
    }

    /// Height of the whole content, materialized or not.
    pub fn total_height(&self) -> usize {
        self.items.len().saturating_mul(self.config.row_height)
    }

    /// Vertical offset of the first materialized row.
    pub fn translate_offset(&self) -> LayoutOffset {
        self.visible_range().translate_offset
    }

    /// Largest offset a host container should allow.
    pub fn max_scroll_offset(&self) -> LayoutOffset {
        LayoutOffset::new(
            self.total_height()
                .saturating_sub(self.config.viewport_height),
        )
    }

    /// Scroll position as a fraction in `[0, 1]`.
    ///
    /// Content that fits in the viewport reports 0.
    pub fn scroll_fraction(&self) -> f64 {
        let scrollable = self.max_scroll_offset().get();
        if scrollable == 0 {
            return 0.0;
        }
        (self.scroll_offset.get() as f64 / scrollable as f64).clamp(0.0, 1.0)
    }

    /// Materialized items with their indices.
    pub fn visible_items(&self) -> impl Iterator<Item = (ItemIndex, &T)> {
        let range = self.visible_range();
        self.items[range.as_range()]
            .iter()
            .enumerate()
            .map(move |(i, item)| (ItemIndex::new(range.start_index.get() + i), item))
    }

    /// Render every materialized row, in index order.
    pub fn render_visible<R, F>(&self, render_item: F) -> Vec<R>
    where
        F: Fn(&T, ItemIndex) -> R,
    {
        self.visible_items()
            .map(|(index, item)| render_item(item, index))
            .collect()
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
