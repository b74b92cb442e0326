//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll back by one layout unit. Default: k/↑
    ScrollUp,
    /// Scroll forward by one layout unit. Default: j/↓
    ScrollDown,
    /// Scroll back by one row height. Default: N
    PrevRow,
    /// Scroll forward by one row height. Default: n
    NextRow,
    /// Scroll back by one viewport. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll forward by one viewport. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row. Default: g/Home
    ScrollToTop,
    /// Jump to the last rows. Default: G/End
    ScrollToBottom,

    // Jump prompt
    /// Open the "jump to row" prompt. Default: :
    StartJump,

    // Panels
    /// Toggle the performance panel. Default: p
    TogglePerformance,
    /// Toggle the help overlay. Default: ?
    ToggleHelp,

    // Application
    /// Quit. Default: q
    Quit,
}

impl KeyAction {
    /// Whether this action moves the scroll position.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PrevRow
                | KeyAction::NextRow
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
