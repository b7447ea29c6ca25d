//! TabView Host Interfaces
//!
//! Everything the tab control calls into but does not own:
//! - the selectable host list (item storage, selection, containers)
//! - named template parts (presenters, grid columns, buttons)
//! - the visual tree and focus routing
//! - string and number resources
//!
//! The `memory` module provides headless implementations of each.

mod element;
mod events;
mod focus;
mod list;
pub mod memory;
mod parts;

use parking_lot::RwLock;
use std::sync::Arc;

pub use element::{
    ElementId, GridColumn, GridLength, Point, Rect, ScrollBarVisibility, TabWidth, Thickness,
};
pub use events::{EventSource, RoutedEventSource, Subscription};
pub use focus::{
    FocusInputDevice, FocusNavigationDirection, FocusState, GettingFocusEventArgs, VisualTree,
};
pub use list::{
    CollectionChange, DataPackageOperation, DragEventArgs, DragItemsCompletedEventArgs,
    DragItemsStartingEventArgs, HostList, PresentedContent, SelectionChangedEventArgs, TabContainer,
    TabEntry, VectorChange,
};
pub use parts::{
    part_names, resource_keys, Button, ContentPresenter, LosingFocusEventArgs, ResourceProvider,
    ResourceTable, ScrollViewer, TemplateChildren,
};

/// Handle to a part shared between the control and the platform glue.
pub type Shared<T> = Arc<RwLock<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}
