//! TabView Width Layout
//!
//! Computes how wide each tab is and how the tab strip column and its
//! scroll bar behave, given the control's width and the space reserved
//! for custom content and the add button.
//!
//! Widths are recomputed in full on every size, collection or mode change.

mod engine;
mod mode;

pub use engine::{
    layout_strip, LayoutMetrics, ReservedWidths, StripRequest, TabWidthBounds,
    DEFAULT_MAX_TAB_WIDTH, DEFAULT_MIN_TAB_WIDTH,
};
pub use mode::WidthMode;
