//! Selectable host list
//!
//! The list widget the tab control delegates item storage, selection,
//! container realization and drag mechanics to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::{ElementId, Point, Rect, ScrollBarVisibility, TabWidth};
use crate::parts::ScrollViewer;
use crate::Shared;

/// An application-supplied tab item.
///
/// Identity is `PartialEq`. Applications that hand the control ready-made
/// containers (or raw visual elements) report them so the control can
/// skip the item-to-container lookup.
pub trait TabEntry: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The container this entry is, when entries are supplied as containers
    fn as_container(&self) -> Option<ElementId> {
        None
    }

    /// The visual element this entry is, when entries are supplied as elements
    fn as_element(&self) -> Option<ElementId> {
        None
    }
}

/// Content a container hands to the tab content presenter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresentedContent {
    /// Root element of the content
    pub content: Option<ElementId>,
    pub template: Option<String>,
    pub template_selector: Option<String>,
}

impl PresentedContent {
    pub fn element(content: ElementId) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.template.is_none() && self.template_selector.is_none()
    }
}

/// The visual element representing one tab entry
#[derive(Debug, Clone, PartialEq)]
pub struct TabContainer {
    pub id: ElementId,
    pub is_enabled: bool,
    pub is_visible: bool,
    pub is_closable: bool,
    pub is_selected: bool,
    pub width: TabWidth,
    pub content: PresentedContent,
}

impl TabContainer {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            is_enabled: true,
            is_visible: true,
            is_closable: true,
            is_selected: false,
            width: TabWidth::Auto,
            content: PresentedContent::default(),
        }
    }

    /// Enabled and visible
    pub fn is_selectable(&self) -> bool {
        self.is_enabled && self.is_visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionChange {
    Reset,
    ItemInserted,
    ItemRemoved,
    ItemChanged,
}

/// Change notification of an observable vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorChange {
    pub kind: CollectionChange,
    pub index: usize,
}

impl VectorChange {
    pub fn inserted(index: usize) -> Self {
        Self {
            kind: CollectionChange::ItemInserted,
            index,
        }
    }

    pub fn removed(index: usize) -> Self {
        Self {
            kind: CollectionChange::ItemRemoved,
            index,
        }
    }

    pub fn reset() -> Self {
        Self {
            kind: CollectionChange::Reset,
            index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChangedEventArgs<T> {
    pub removed_items: Vec<T>,
    pub added_items: Vec<T>,
}

impl<T> SelectionChangedEventArgs<T> {
    pub fn new(removed: Option<T>, added: Option<T>) -> Self {
        Self {
            removed_items: removed.into_iter().collect(),
            added_items: added.into_iter().collect(),
        }
    }
}

/// Result of a drag-and-drop operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataPackageOperation {
    /// No target accepted the drop
    #[default]
    None,
    Copy,
    Move,
    Link,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragItemsStartingEventArgs<T> {
    pub items: Vec<T>,
    pub cancel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragItemsCompletedEventArgs<T> {
    pub items: Vec<T>,
    pub drop_result: DataPackageOperation,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragEventArgs {
    pub position: Point,
    pub accepted_operation: DataPackageOperation,
    pub handled: bool,
}

/// The selectable list widget backing the tab strip.
///
/// Item indices passed to mutating methods are in range; callers check.
pub trait HostList<T: TabEntry>: Send + Sync {
    fn element_id(&self) -> ElementId;

    // Items

    fn item_count(&self) -> usize;

    fn item_at(&self, index: usize) -> Option<T>;

    fn items(&self) -> Vec<T>;

    fn index_of(&self, item: &T) -> Option<usize> {
        self.items().iter().position(|candidate| candidate == item)
    }

    fn insert_item(&mut self, index: usize, item: T);

    fn remove_item(&mut self, index: usize) -> Option<T>;

    fn set_items_source(&mut self, source: Option<Vec<T>>);

    // Selection

    fn selected_index(&self) -> Option<usize>;

    fn selected_item(&self) -> Option<T>;

    fn set_selected_index(&mut self, index: Option<usize>);

    fn select_container(&mut self, container: ElementId);

    /// Set a container's own selected flag
    fn set_is_selected(&mut self, container: ElementId, selected: bool);

    // Containers

    fn container_from_item(&self, item: &T) -> Option<ElementId>;

    fn container_from_index(&self, index: usize) -> Option<ElementId>;

    fn item_from_container(&self, container: ElementId) -> Option<T>;

    fn index_from_container(&self, container: ElementId) -> Option<usize>;

    fn container(&self, container: ElementId) -> Option<TabContainer>;

    fn set_container_width(&mut self, container: ElementId, width: TabWidth);

    /// Raise the container's own close request, after the control has
    /// raised its tab-close request for the same tab
    fn raise_container_close_requested(&mut self, container: ElementId);

    // Layout

    fn set_max_width(&mut self, width: f64);

    fn set_horizontal_scroll_bar_visibility(&mut self, visibility: ScrollBarVisibility);

    /// Bounds of the list in screen space
    fn screen_bounds(&self) -> Rect;

    fn scroll_viewer(&self) -> Option<Shared<dyn ScrollViewer>>;
}
