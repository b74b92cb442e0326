//! vlist
//!
//! Windowed terminal viewer for large line-oriented inputs. Only the rows
//! inside the viewport (plus a small overscan margin) are ever rendered.
//!
//! The core lives in [`view_state`]: [`view_state::VirtualList`] computes the
//! visible range from the scroll offset and delegates row rendering to a
//! caller-supplied closure. The remaining modules form the terminal host
//! around it following the Pure Core / Impure Shell split.

pub mod config;
pub mod logging;
pub mod model;
pub mod perf;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
