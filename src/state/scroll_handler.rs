//! Vertical scrolling action handler.
//!
//! The terminal host plays the scroll container: every action is turned
//! into a [`ScrollPosition`], clamped to the content bounds, and only then
//! handed to the list via `on_scroll`.

use crate::model::KeyAction;
use crate::view_state::scroll::ScrollPosition;
use crate::view_state::types::ItemIndex;
use crate::view_state::window::VirtualList;
use tracing::debug;

/// Lines moved per mouse wheel notch.
pub const WHEEL_STEP: usize = 3;

/// Handle a scroll action.
///
/// Returns `false` for actions that do not scroll (nothing is changed).
pub fn handle_scroll_action<T>(list: &mut VirtualList<T>, action: KeyAction) -> bool {
    let offset = list.scroll_offset();
    let row_height = list.config().row_height();
    let viewport_height = list.config().viewport_height();

    let position = match action {
        KeyAction::ScrollUp => ScrollPosition::AtOffset(offset.saturating_sub(1)),
        KeyAction::ScrollDown => ScrollPosition::AtOffset(offset.saturating_add(1)),
        KeyAction::NextRow => ScrollPosition::AtItem(ItemIndex::new(offset.get() / row_height).next()),
        KeyAction::PrevRow => {
            // Mid-row offsets snap back to the top of the current row first.
            ScrollPosition::AtItem(ItemIndex::new(offset.get().div_ceil(row_height)).prev())
        }
        KeyAction::PageUp => ScrollPosition::AtOffset(offset.saturating_sub(viewport_height)),
        KeyAction::PageDown => ScrollPosition::AtOffset(offset.saturating_add(viewport_height)),
        KeyAction::ScrollToTop => {
            list.scroll_to_top();
            return true;
        }
        KeyAction::ScrollToBottom => ScrollPosition::Bottom,
        _ => return false,
    };

    debug!(?action, ?position, "scroll action");
    position.apply(list);
    true
}

/// Scroll by `notches` wheel steps; negative scrolls up.
pub fn handle_wheel<T>(list: &mut VirtualList<T>, notches: isize) {
    let delta = notches.unsigned_abs().saturating_mul(WHEEL_STEP);
    let offset = list.scroll_offset();
    let target = if notches < 0 {
        offset.saturating_sub(delta)
    } else {
        offset.saturating_add(delta)
    };
    ScrollPosition::AtOffset(target).apply(list);
}

/// Jump so that the row with 1-based number `row_number` is at the top.
///
/// Delegates to `scroll_to_index`, which ignores out-of-range rows, then
/// clamps the result to the container bounds. Returns whether the row exists.
pub fn jump_to_row<T>(list: &mut VirtualList<T>, row_number: usize) -> bool {
    let Some(index) = ItemIndex::from_display(row_number) else {
        return false;
    };
    let exists = index.get() < list.len();
    list.scroll_to_index(index);
    clamp_to_container(list);
    exists
}

/// Pull the offset back inside `[0, max_scroll_offset]` if it has drifted
/// out (after a resize, a jump near the end, or a shrinking sequence).
pub fn clamp_to_container<T>(list: &mut VirtualList<T>) {
    let max = list.max_scroll_offset();
    if list.scroll_offset() > max {
        list.on_scroll(max);
    }
}

/// Whether the viewport currently shows the last row.
pub fn is_at_bottom<T>(list: &VirtualList<T>) -> bool {
    list.scroll_offset() >= list.max_scroll_offset()
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
