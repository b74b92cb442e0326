//! Host-side scroll positions and the scroll indicator.
//!
//! [`super::window::VirtualList`] stores whatever offset it is given. The
//! host container is the authority on scroll bounds, so every host scroll
//! request is expressed as a [`ScrollPosition`] and resolved against the
//! current content extent before it reaches the list.

use super::types::{ItemIndex, LayoutOffset};
use super::window::VirtualList;

/// Scroll offset (in layout units) above which the "back to top" hint shows.
pub const DEFAULT_SCROLL_TOP_THRESHOLD: usize = 100;

/// Semantic scroll position requested by the host.
///
/// # Clamping Behavior
/// Every variant resolves into `[0, max(0, total_height - viewport_height)]`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollPosition {
    /// View from the very top.
    Top,

    /// View the last rows.
    Bottom,

    /// Specific offset from the top.
    AtOffset(LayoutOffset),

    /// Row at this index starts at the top of the viewport.
    AtItem(ItemIndex),
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Top
    }
}

impl ScrollPosition {
    /// Resolve to an absolute, clamped offset.
    ///
    /// # Arguments
    /// - `total_height`: content height in layout units
    /// - `viewport_height`: viewport height in layout units
    /// - `row_height`: height of one row, used by `AtItem`
    pub fn resolve(&self, total_height: usize, viewport_height: usize, row_height: usize) -> LayoutOffset {
        let max_offset = total_height.saturating_sub(viewport_height);
        let raw = match self {
            ScrollPosition::Top => 0,
            ScrollPosition::Bottom => max_offset,
            ScrollPosition::AtOffset(offset) => offset.get(),
            ScrollPosition::AtItem(index) => index.get().saturating_mul(row_height),
        };
        LayoutOffset::new(raw.min(max_offset))
    }

    /// Resolve against a list's current geometry and scroll it there.
    pub fn apply<T>(&self, list: &mut VirtualList<T>) {
        let offset = self.resolve(
            list.total_height(),
            list.config().viewport_height(),
            list.config().row_height(),
        );
        list.on_scroll(offset);
    }
}

/// Scroll percentage and "back to top" hint shown under the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIndicator {
    /// Rounded scroll percentage, 0..=100.
    pub percent: u8,
    /// Whether the list is scrolled far enough to offer a jump to the top.
    pub show_scroll_to_top: bool,
}

impl ScrollIndicator {
    /// Derive the indicator from the list state.
    pub fn from_list<T>(list: &VirtualList<T>, scroll_top_threshold: usize) -> Self {
        let percent = (list.scroll_fraction() * 100.0).round() as u8;
        Self {
            percent,
            show_scroll_to_top: list.scroll_offset().get() > scroll_top_threshold,
        }
    }

    /// Percentage label, e.g. `"42%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}
