//! Events the control raises

use tabview_host::{
    DataPackageOperation, DragEventArgs, DragItemsCompletedEventArgs, DragItemsStartingEventArgs,
    ElementId, EventSource, RoutedEventSource, SelectionChangedEventArgs, TabEntry,
};

/// A tab asked to be closed. The control never removes the tab itself.
#[derive(Debug, Clone, PartialEq)]
pub struct TabCloseRequestedEventArgs<T> {
    pub item: T,
    pub tab: ElementId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabDragStartingEventArgs<T> {
    /// The host list's own notification. Setting `drag.cancel` cancels
    /// the drag in the host list.
    pub drag: DragItemsStartingEventArgs<T>,
    pub item: T,
    /// Container of the dragged item, if it could be resolved
    pub tab: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabDragCompletedEventArgs<T> {
    /// The host list's own notification, passed through
    pub drag: DragItemsCompletedEventArgs<T>,
    pub drop_result: DataPackageOperation,
    pub item: T,
    pub tab: Option<ElementId>,
}

/// A drag ended with no target accepting the drop
#[derive(Debug, Clone, PartialEq)]
pub struct TabDroppedOutsideEventArgs<T> {
    pub item: T,
    pub tab: Option<ElementId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddTabButtonClickEventArgs {
    pub button: ElementId,
}

pub struct TabViewEvents<T: TabEntry> {
    pub tab_close_requested: EventSource<TabCloseRequestedEventArgs<T>>,
    pub selection_changed: EventSource<SelectionChangedEventArgs<T>>,
    pub add_tab_button_click: EventSource<AddTabButtonClickEventArgs>,
    pub tab_drag_starting: RoutedEventSource<TabDragStartingEventArgs<T>>,
    pub tab_drag_completed: EventSource<TabDragCompletedEventArgs<T>>,
    pub tab_dropped_outside: EventSource<TabDroppedOutsideEventArgs<T>>,
    /// Handlers answer through `accepted_operation` and `handled`
    pub tab_strip_drag_over: RoutedEventSource<DragEventArgs>,
    pub tab_strip_drop: RoutedEventSource<DragEventArgs>,
}

impl<T: TabEntry> TabViewEvents<T> {
    pub fn new() -> Self {
        Self {
            tab_close_requested: EventSource::new(),
            selection_changed: EventSource::new(),
            add_tab_button_click: EventSource::new(),
            tab_drag_starting: RoutedEventSource::new(),
            tab_drag_completed: EventSource::new(),
            tab_dropped_outside: EventSource::new(),
            tab_strip_drag_over: RoutedEventSource::new(),
            tab_strip_drop: RoutedEventSource::new(),
        }
    }
}

impl<T: TabEntry> Default for TabViewEvents<T> {
    fn default() -> Self {
        Self::new()
    }
}
