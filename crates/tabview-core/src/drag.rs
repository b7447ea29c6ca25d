//! Drag relay
//!
//! Re-raises the host list's drag notifications as tab-scoped events. No
//! state survives between notifications; each one resolves its tab afresh.
//! Answers that subscribers write into the tab-scoped payload (cancelling a
//! drag, accepting a drop) are written back into the host list's arguments.

use tabview_host::{
    DataPackageOperation, DragEventArgs, DragItemsCompletedEventArgs, DragItemsStartingEventArgs,
    ElementId, HostList, TabEntry,
};

use crate::events::{
    TabDragCompletedEventArgs, TabDragStartingEventArgs, TabDroppedOutsideEventArgs,
};
use crate::view::TabView;

/// The dragged item and the tab it resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext<T> {
    pub item: T,
    pub tab: Option<ElementId>,
}

impl<T: TabEntry> TabView<T> {
    pub fn on_list_view_drag_items_starting(
        &mut self,
        sender: ElementId,
        args: &mut DragItemsStartingEventArgs<T>,
    ) {
        if !self.is_current_list(sender) {
            return;
        }
        let Some(context) = self.drag_context(&args.items) else {
            return;
        };

        tracing::debug!(tab = ?context.tab, "Tab drag starting");
        let mut starting = TabDragStartingEventArgs {
            drag: args.clone(),
            item: context.item,
            tab: context.tab,
        };
        self.events.tab_drag_starting.raise(&mut starting);

        if starting.drag.cancel && !args.cancel {
            tracing::debug!(tab = ?context.tab, "Tab drag cancelled by a subscriber");
        }
        args.cancel = starting.drag.cancel;
    }

    pub fn on_list_view_drag_over(&mut self, sender: ElementId, args: &mut DragEventArgs) {
        if self.is_current_list(sender) {
            self.events.tab_strip_drag_over.raise(args);
        }
    }

    pub fn on_list_view_drop(&mut self, sender: ElementId, args: &mut DragEventArgs) {
        if self.is_current_list(sender) {
            self.events.tab_strip_drop.raise(args);
        }
    }

    pub fn on_list_view_drag_items_completed(
        &mut self,
        sender: ElementId,
        args: &DragItemsCompletedEventArgs<T>,
    ) {
        if !self.is_current_list(sender) {
            return;
        }
        let Some(context) = self.drag_context(&args.items) else {
            return;
        };

        tracing::debug!(tab = ?context.tab, drop_result = ?args.drop_result, "Tab drag completed");
        self.events
            .tab_drag_completed
            .raise(&TabDragCompletedEventArgs {
                drag: args.clone(),
                drop_result: args.drop_result,
                item: context.item.clone(),
                tab: context.tab,
            });

        if args.drop_result == DataPackageOperation::None {
            tracing::info!(tab = ?context.tab, "Tab dropped outside");
            self.events
                .tab_dropped_outside
                .raise(&TabDroppedOutsideEventArgs {
                    item: context.item,
                    tab: context.tab,
                });
        }
    }

    /// Context for the first dragged item
    fn drag_context(&self, items: &[T]) -> Option<DragContext<T>> {
        let item = items.first()?.clone();
        let tab = self.tab_from_drag_item(&item);
        Some(DragContext { item, tab })
    }

    fn tab_from_drag_item(&self, item: &T) -> Option<ElementId> {
        let list = self.list_view()?;
        let host = list.read();

        if let Some(container) = Self::resolve_container(&*host, item) {
            return Some(container);
        }

        let element = item.as_element()?;
        if let Some(parent) = self.tree.read().parent(element) {
            if host.index_from_container(parent).is_some() {
                return Some(parent);
            }
        }

        Self::container_presenting(&*host, element)
    }

    /// Last resort: the container whose content is `element`
    fn container_presenting(host: &dyn HostList<T>, element: ElementId) -> Option<ElementId> {
        (0..host.item_count())
            .filter_map(|index| host.container_from_index(index))
            .find(|container| {
                host.container(*container)
                    .map(|c| c.content.content == Some(element))
                    .unwrap_or(false)
            })
    }
}
