//! View-state layer - windowing and scrolling (pure core)
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (LayoutOffset, ItemIndex)
//! - `visible_range`: VisibleRange - result of visible range calculation
//! - `window`: VirtualList - windowed list renderer over uniform-height rows
//! - `scroll`: ScrollPosition - host-side clamped scroll requests, scroll indicator

pub mod scroll;
pub mod types;
pub mod visible_range;
pub mod window;

pub use scroll::{ScrollIndicator, ScrollPosition, DEFAULT_SCROLL_TOP_THRESHOLD};
pub use types::{ItemIndex, LayoutOffset};
pub use visible_range::VisibleRange;
pub use window::{compute_visible_range, InvalidConfiguration, VirtualList, WindowConfig};
