//! Headless collaborators
//!
//! In-memory host list, visual tree and template parts. They keep enough
//! state to drive the tab control without a windowing system, and are what
//! the control's own tests run against.

mod list;
mod parts;
mod tree;

pub use list::MemoryHostList;
pub use parts::{MemoryContentPresenter, MemoryScrollViewer, MemoryTemplate};
pub use tree::MemoryVisualTree;
