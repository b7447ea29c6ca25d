//! TabView Core
//!
//! The tabbed container control. `TabView` keeps an ordered set of tabs,
//! one of them selected, presents the selected tab's content, lays the tab
//! strip out and relays keyboard, focus and drag input.
//!
//! The control owns its state and never blocks. Everything it draws on
//! comes in through the `tabview_host` interfaces.

mod config;
mod content;
mod drag;
mod error;
mod events;
mod navigation;
mod parts;
mod view;
mod widths;

#[cfg(test)]
mod fixture;

pub use config::Config;
pub use drag::DragContext;
pub use error::CoreError;
pub use events::{
    AddTabButtonClickEventArgs, TabCloseRequestedEventArgs, TabDragCompletedEventArgs,
    TabDragStartingEventArgs, TabDroppedOutsideEventArgs, TabViewEvents,
};
pub use view::{DeferredAction, TabView};

// Re-export the component crates
pub use tabview_input::{
    KeyChord, KeyRoutedEventArgs, KeyboardAccelerator, Modifiers, PlatformCapabilities,
    TabCommand, VirtualKey,
};
pub use tabview_layout::{LayoutMetrics, TabWidthBounds, WidthMode};
pub use tabview_tabs::{TabEntry, TabError, TabItem};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
