//! The tab control
//!
//! `TabView` owns the tab collection and selection and reacts to what its
//! template parts report. Platform glue forwards each part notification to
//! the matching `on_*` handler together with the sending part's id, and
//! notifications from parts that are no longer current are dropped.
//!
//! Handlers never fail. A part that is missing turns the feature that needs
//! it into a no-op.

use std::collections::VecDeque;
use std::sync::Arc;

use tabview_host::{
    CollectionChange, ElementId, FocusState, HostList, ResourceProvider, ScrollViewer,
    SelectionChangedEventArgs, Shared, TabContainer, TabEntry, TemplateChildren, Thickness,
    VectorChange, VisualTree,
};
use tabview_input::{CommandRouter, KeyboardAccelerator};
use tabview_layout::{LayoutMetrics, WidthMode};
use tabview_tabs::{nearest_selectable, SelectionState, TabCollection, TabError};

use crate::config::Config;
use crate::events::{AddTabButtonClickEventArgs, TabCloseRequestedEventArgs, TabViewEvents};
use crate::parts::TemplateParts;
use crate::Result;

/// Work that has to wait until the current input event finishes dispatching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    SetFocus(ElementId),
}

pub struct TabView<T: TabEntry> {
    pub(crate) config: Config,
    pub(crate) router: CommandRouter,
    pub(crate) resources: Arc<dyn ResourceProvider>,
    pub(crate) tree: Shared<dyn VisualTree>,
    pub(crate) parts: TemplateParts<T>,
    pub(crate) scroll_viewer: Option<Shared<dyn ScrollViewer>>,
    pub(crate) items: TabCollection<T>,
    pub(crate) items_source: Option<Vec<T>>,
    pub(crate) selection: SelectionState<T>,
    pub(crate) width_mode: WidthMode,
    pub(crate) padding: Thickness,
    pub(crate) actual_width: f64,
    pub(crate) metrics: Option<LayoutMetrics>,
    pub(crate) deferred: VecDeque<DeferredAction>,
    pub(crate) events: TabViewEvents<T>,
}

impl<T: TabEntry> TabView<T> {
    pub fn new(config: Config, tree: Shared<dyn VisualTree>) -> Self {
        let resources: Arc<dyn ResourceProvider> = Arc::new(config.resources.clone());
        Self::with_resources(config, tree, resources)
    }

    /// Look resources up through `resources` instead of the configured table
    pub fn with_resources(
        config: Config,
        tree: Shared<dyn VisualTree>,
        resources: Arc<dyn ResourceProvider>,
    ) -> Self {
        let router = CommandRouter::new(config.capabilities);
        tracing::info!(mode = %config.tab_width_mode, "Creating tab view");

        Self {
            width_mode: config.tab_width_mode,
            config,
            router,
            resources,
            tree,
            parts: TemplateParts::empty(),
            scroll_viewer: None,
            items: TabCollection::new(),
            items_source: None,
            selection: SelectionState::new(),
            padding: Thickness::default(),
            actual_width: 0.0,
            metrics: None,
            deferred: VecDeque::new(),
            events: TabViewEvents::new(),
        }
    }

    pub fn events(&self) -> &TabViewEvents<T> {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Accelerators the platform should register for this control
    pub fn accelerators(&self) -> &[KeyboardAccelerator] {
        self.router.accelerators()
    }

    /// Resolve the named parts of a newly applied template. Parts of a
    /// previous template are released and their notifications ignored.
    pub fn apply_template(&mut self, template: &dyn TemplateChildren<T>) {
        self.parts = TemplateParts::resolve(template);
        self.parts.localize_add_button(self.resources.as_ref());
        self.scroll_viewer = None;
    }

    pub fn on_loaded(&mut self) {
        self.update_tab_content();
    }

    /// The host list is live: move the entries into it and apply any
    /// selection assigned before it existed.
    pub fn on_list_view_loaded(&mut self, sender: ElementId) {
        let Some(list) = self.parts.list_view.clone() else {
            return;
        };
        if list.read().element_id() != sender {
            tracing::debug!(sender = %sender, "Ignoring loaded from a replaced list view");
            return;
        }

        let count = self.items.len();
        let attached = !self.items.is_delegated() && self.items.attach_to_host(Arc::clone(&list));
        if !self.is_current_list(sender) {
            tracing::warn!(sender = %sender, "List view loaded after tabs moved to another host");
            return;
        }

        if attached {
            tracing::info!(tab_count = count, "Moved tabs into the host list");
            if let Some(source) = self.items_source.clone() {
                list.write().set_items_source(Some(source));
            }
        }

        let pending = self.selection.take_pending();
        if pending.index {
            let previous = list.read().selected_item();
            self.update_selected_index(previous);
        }
        if pending.item {
            let previous = list.read().selected_item();
            self.update_selected_item(previous);
        }
        self.mirror_host_selection();

        self.scroll_viewer = list.read().scroll_viewer();
        self.update_tab_widths();
    }

    pub fn on_scroll_viewer_loaded(&mut self, sender: ElementId) {
        let current = self
            .scroll_viewer
            .as_ref()
            .map(|viewer| viewer.read().element_id());
        if current == Some(sender) {
            self.update_tab_widths();
        }
    }

    pub fn on_scroll_decrease_click(&mut self) {
        if let Some(viewer) = &self.scroll_viewer {
            let mut viewer = viewer.write();
            let offset = (viewer.horizontal_offset() - self.config.scroll_amount).max(0.0);
            viewer.change_view(offset);
        }
    }

    pub fn on_scroll_increase_click(&mut self) {
        if let Some(viewer) = &self.scroll_viewer {
            let mut viewer = viewer.write();
            let offset = (viewer.horizontal_offset() + self.config.scroll_amount)
                .min(viewer.scrollable_width());
            viewer.change_view(offset);
        }
    }

    pub fn on_add_button_click(&mut self, sender: ElementId) {
        let is_current = self
            .parts
            .add_button
            .as_ref()
            .map(|button| button.read().id == sender)
            .unwrap_or(false);

        if is_current {
            self.events
                .add_tab_button_click
                .raise(&AddTabButtonClickEventArgs { button: sender });
        }
    }

    pub fn on_size_changed(&mut self, width: f64) {
        self.actual_width = width;
        self.update_tab_widths();
    }

    pub fn actual_width(&self) -> f64 {
        self.actual_width
    }

    pub fn padding(&self) -> Thickness {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Thickness) {
        self.padding = padding;
        self.update_tab_widths();
    }

    pub fn tab_width_mode(&self) -> WidthMode {
        self.width_mode
    }

    pub fn set_tab_width_mode(&mut self, mode: WidthMode) {
        if self.width_mode != mode {
            tracing::debug!(mode = %mode, "Tab width mode changed");
            self.width_mode = mode;
            self.update_tab_widths();
        }
    }

    /// Outcome of the last width pass that reached the tab column
    pub fn layout_metrics(&self) -> Option<LayoutMetrics> {
        self.metrics
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selected_item(&self) -> Option<T> {
        self.selection.item().cloned()
    }

    pub fn set_selected_index(&mut self, index: Option<usize>) {
        let previous = self.selection.item().cloned();
        let entries = self.items.to_vec();
        self.selection.assign_index(index, &entries);
        self.update_selected_index(previous);
    }

    /// Select `item`. Once the host list is attached an item that has no
    /// container there leaves the selection as it was.
    pub fn set_selected_item(&mut self, item: Option<T>) {
        let previous = self.selection.item().cloned();
        let entries = self.items.to_vec();
        self.selection.assign_item(item, &entries);
        self.update_selected_item(previous);
    }

    pub fn on_list_view_selection_changed(
        &mut self,
        sender: ElementId,
        args: &SelectionChangedEventArgs<T>,
    ) {
        if self.is_current_list(sender) {
            self.handle_selection_changed(args);
        }
    }

    fn update_selected_index(&mut self, previous: Option<T>) {
        let Some(list) = self.list_view() else {
            return;
        };

        let index = self.selection.index();
        self.push_selection(&list, previous, |host| host.set_selected_index(index));
    }

    fn update_selected_item(&mut self, previous: Option<T>) {
        let Some(list) = self.list_view() else {
            return;
        };

        let container = self
            .selection
            .item()
            .and_then(|item| Self::resolve_container(&*list.read(), item));

        match container {
            Some(container) => self.push_selection(&list, previous, |host| {
                host.select_container(container);
                // The host list does not always flag the container from
                // the selection alone
                host.set_is_selected(container, true);
            }),
            None => {
                tracing::debug!("Selected item has no container");
                self.mirror_host_selection();
            }
        }
    }

    /// Apply `change` to the host list and report the result as one
    /// selection change, if the selected item moved.
    fn push_selection<F>(&mut self, list: &Shared<dyn HostList<T>>, previous: Option<T>, change: F)
    where
        F: FnOnce(&mut dyn HostList<T>),
    {
        let selected = {
            let mut host = list.write();
            change(&mut *host);
            host.selected_item()
        };

        if selected != previous {
            self.handle_selection_changed(&SelectionChangedEventArgs::new(previous, selected));
        } else {
            self.mirror_host_selection();
        }
    }

    fn handle_selection_changed(&mut self, args: &SelectionChangedEventArgs<T>) {
        self.mirror_host_selection();
        tracing::debug!(index = ?self.selection.index(), "Tab selection changed");

        self.events.selection_changed.raise(args);
        self.update_tab_content();
    }

    fn mirror_host_selection(&mut self) {
        if let Some(list) = self.list_view() {
            let (index, item) = {
                let host = list.read();
                (host.selected_index(), host.selected_item())
            };
            self.selection.mirror(index, item);
        }
    }

    /// Bring the selection pair back in line after the entries changed
    fn reconcile_selection(&mut self) {
        let Some(list) = self.list_view() else {
            let entries = self.items.to_vec();
            self.selection.reconcile(&entries);
            return;
        };

        let selected = list.read().selected_item();
        let previous = self.selection.item().cloned();
        if selected != previous {
            self.handle_selection_changed(&SelectionChangedEventArgs::new(previous, selected));
        } else {
            self.mirror_host_selection();
        }
    }

    pub fn tab_items(&self) -> Vec<T> {
        self.items.to_vec()
    }

    pub fn tab_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the entries live in the host list yet
    pub fn is_attached(&self) -> bool {
        self.items.is_delegated()
    }

    pub fn push_tab(&mut self, item: T) {
        let change = self.items.push(item);
        self.on_items_changed(change);
    }

    pub fn insert_tab(&mut self, index: usize, item: T) -> Result<()> {
        let change = self.items.insert(index, item)?;
        self.on_items_changed(change);
        Ok(())
    }

    pub fn remove_tab(&mut self, index: usize) -> Result<T> {
        let (item, change) = self.items.remove(index)?;
        tracing::debug!(index, "Removed tab");
        self.on_items_changed(change);
        Ok(item)
    }

    /// Move the tab at `from` to `to`. A selected tab stays selected.
    pub fn move_tab(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.items.len();
        if from >= len || to >= len {
            return Err(TabError::IndexOutOfRange {
                index: from.max(to),
                len,
            }
            .into());
        }
        if from == to {
            return Ok(());
        }

        let was_selected = self.selection.index() == Some(from);
        let (item, _) = self.items.remove(from)?;
        self.items.insert(to, item.clone())?;
        tracing::debug!(from, to, "Moved tab");

        if was_selected {
            self.set_selected_item(Some(item));
        } else {
            self.reconcile_selection();
        }
        self.update_tab_widths();
        Ok(())
    }

    /// The tab sequence changed. Called for every mutation made through
    /// the control, and by the glue for changes the host list makes itself.
    pub fn on_items_changed(&mut self, change: VectorChange) {
        let count = self.items.len();

        if change.kind == CollectionChange::ItemRemoved && count > 0 {
            let selected = self.selection.index();
            if selected.is_none() || selected == Some(change.index) {
                self.select_nearest(change.index, count);
            }
        }

        self.reconcile_selection();
        self.update_tab_widths();
    }

    /// Bind an external items source, replacing the host list's entries
    pub fn set_tab_items_source(&mut self, source: Option<Vec<T>>) {
        self.items_source = source.clone();

        if let Some(list) = self.list_view() {
            list.write().set_items_source(source);
            self.reconcile_selection();
            self.update_tab_widths();
        }
    }

    pub fn tab_items_source(&self) -> Option<&[T]> {
        self.items_source.as_deref()
    }

    fn select_nearest(&mut self, start: usize, count: usize) {
        let candidate = match self.list_view() {
            Some(list) => {
                let host = list.read();
                nearest_selectable(start, count, |index| {
                    host.container_from_index(index)
                        .and_then(|container| host.container(container))
                        .map(|container| container.is_selectable())
                        .unwrap_or(false)
                })
            }
            // Nothing can be disabled or hidden before containers exist
            None => nearest_selectable(start, count, |_| true),
        };

        match candidate.and_then(|index| self.items.get(index).map(|item| (index, item))) {
            Some((index, item)) => {
                tracing::info!(index, "Reselecting after tab removal");
                self.set_selected_item(Some(item));
            }
            None => tracing::debug!("No enabled and visible tab left to select"),
        }
    }

    pub fn container_from_item(&self, item: &T) -> Option<ElementId> {
        let list = self.list_view()?;
        let host = list.read();
        Self::resolve_container(&*host, item)
    }

    pub fn container_from_index(&self, index: usize) -> Option<ElementId> {
        self.list_view()?.read().container_from_index(index)
    }

    pub fn item_from_container(&self, container: ElementId) -> Option<T> {
        self.list_view()?.read().item_from_container(container)
    }

    /// Ask for the tab behind `container` to be closed. Subscribers of the
    /// control hear first, then the container raises its own request.
    pub fn request_close_tab(&mut self, container: ElementId) {
        let Some(list) = self.list_view() else {
            return;
        };
        let Some(item) = list.read().item_from_container(container) else {
            tracing::debug!(tab = %container, "Close requested for an unknown tab");
            return;
        };

        tracing::info!(tab = %container, "Tab close requested");
        self.events
            .tab_close_requested
            .raise(&TabCloseRequestedEventArgs {
                item,
                tab: container,
            });
        list.write().raise_container_close_requested(container);
    }

    /// Snapshot of the selected tab's container
    pub(crate) fn selected_container(&self) -> Option<TabContainer> {
        let item = self.selection.item()?;
        let list = self.list_view()?;
        let host = list.read();
        Self::resolve_container(&*host, item).and_then(|container| host.container(container))
    }

    /// Direct cast first, then the host list's mapping
    pub(crate) fn resolve_container(host: &dyn HostList<T>, item: &T) -> Option<ElementId> {
        item.as_container()
            .or_else(|| host.container_from_item(item))
    }

    /// Run queued work; the glue calls this once the current input event
    /// has finished. Returns how many actions ran.
    pub fn run_deferred(&mut self) -> usize {
        let mut ran = 0;
        while let Some(action) = self.deferred.pop_front() {
            match action {
                DeferredAction::SetFocus(element) => {
                    let moved = self.tree.write().set_focus(element, FocusState::Programmatic);
                    tracing::debug!(element = %element, moved, "Ran deferred focus move");
                }
            }
            ran += 1;
        }
        ran
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Host list the entries live in
    pub(crate) fn list_view(&self) -> Option<Shared<dyn HostList<T>>> {
        self.items.host().cloned()
    }

    /// `sender` is the applied list view and holds the entries
    pub(crate) fn is_current_list(&self, sender: ElementId) -> bool {
        let host = self.items.host().map(|list| list.read().element_id());
        self.parts.list_view_id() == Some(sender) && host == Some(sender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{record, Fixture};
    use tabview_host::memory::{MemoryHostList, MemoryTemplate};
    use tabview_host::{
        part_names, shared, Button, FocusInputDevice, FocusNavigationDirection,
        GettingFocusEventArgs,
    };
    use tabview_tabs::TabItem;

    /// A replacement template holding only a list view and an add button
    fn rebuilt(
        list: &Shared<MemoryHostList<TabItem>>,
        button: &Shared<Button>,
    ) -> MemoryTemplate<TabItem> {
        MemoryTemplate::new()
            .with_list_view(part_names::TAB_LIST_VIEW, Arc::clone(list))
            .with_button(part_names::ADD_BUTTON, Arc::clone(button))
    }

    fn new_button() -> Shared<Button> {
        shared(Button {
            id: ElementId::new(),
            ..Button::default()
        })
    }

    #[test]
    fn test_tabs_move_into_host_on_load() {
        let mut fx = Fixture::new(&["Home", "Docs", "Mail"]);
        assert!(!fx.view.is_attached());
        assert_eq!(fx.list.read().item_count(), 0);

        fx.load();
        assert!(fx.view.is_attached());
        assert_eq!(fx.list.read().items(), fx.items);

        fx.view.push_tab(TabItem::new("News"));
        assert_eq!(fx.list.read().item_count(), 4);
        assert_eq!(fx.view.tab_count(), 4);
    }

    #[test]
    fn test_second_load_does_not_migrate_again() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        let list_id = fx.list_id();
        fx.view.on_list_view_loaded(list_id);
        assert_eq!(fx.list.read().item_count(), 2);
    }

    #[test]
    fn test_pending_index_applied_after_load() {
        let mut fx = Fixture::new(&["Home", "Docs", "Mail"]);
        let (changes, _sub) = record(&fx.view.events().selection_changed);

        fx.view.set_selected_index(Some(1));
        assert_eq!(fx.view.selected_item(), Some(fx.items[1].clone()));
        assert!(changes.lock().is_empty());

        fx.load();
        assert_eq!(fx.list.read().selected_index(), Some(1));
        assert_eq!(changes.lock().len(), 1);
        assert_eq!(changes.lock()[0].added_items, vec![fx.items[1].clone()]);
    }

    #[test]
    fn test_pending_item_applied_after_load() {
        let mut fx = Fixture::new(&["Home", "Docs", "Mail"]);
        fx.view.set_selected_item(Some(fx.items[2].clone()));
        assert_eq!(fx.view.selected_index(), Some(2));

        fx.load();
        assert_eq!(fx.list.read().selected_index(), Some(2));
        assert!(fx.list.read().containers()[2].is_selected);
    }

    #[test]
    fn test_set_selected_item_sets_container_flag() {
        let mut fx = Fixture::loaded(&["Home", "Docs", "Mail"]);
        fx.view.set_selected_item(Some(fx.items[1].clone()));

        let list = fx.list.read();
        assert_eq!(list.selected_index(), Some(1));
        assert!(list.containers()[1].is_selected);
        assert_eq!(fx.view.selected_index(), Some(1));
    }

    #[test]
    fn test_unknown_item_leaves_host_selection() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        fx.view.set_selected_index(Some(0));
        let (changes, _sub) = record(&fx.view.events().selection_changed);

        fx.view.set_selected_item(Some(TabItem::new("Elsewhere")));

        assert_eq!(fx.list.read().selected_index(), Some(0));
        assert_eq!(fx.view.selected_item(), Some(fx.items[0].clone()));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_host_selection_mirrored_once() {
        let mut fx = Fixture::loaded(&["Home", "Docs", "Mail"]);
        let (changes, _sub) = record(&fx.view.events().selection_changed);

        let args = fx.list.write().user_select(2);
        fx.view.on_list_view_selection_changed(fx.list_id(), &args);

        assert_eq!(fx.view.selected_index(), Some(2));
        assert_eq!(fx.view.selected_item(), Some(fx.items[2].clone()));
        assert_eq!(changes.lock().len(), 1);
    }

    #[test]
    fn test_replaced_list_view_is_ignored() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        let stale = ElementId::new();
        let args = fx.list.write().user_select(1);

        fx.view.on_list_view_selection_changed(stale, &args);
        assert_eq!(fx.view.selected_index(), None);
    }

    #[test]
    fn test_reapplied_template_with_same_list_keeps_working() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        let old_button = fx.add_button.read().id;
        let button = new_button();
        let (clicks, _sub) = record(&fx.view.events().add_tab_button_click);

        fx.view.apply_template(&rebuilt(&fx.list, &button));
        fx.view.on_list_view_loaded(fx.list_id());
        assert_eq!(fx.list.read().items(), fx.items);
        assert_eq!(button.read().automation_name, "Add Tab");

        fx.view.on_add_button_click(old_button);
        assert!(clicks.lock().is_empty());
        let button_id = button.read().id;
        fx.view.on_add_button_click(button_id);
        assert_eq!(clicks.lock().len(), 1);

        let args = fx.list.write().user_select(1);
        fx.view.on_list_view_selection_changed(fx.list_id(), &args);
        assert_eq!(fx.view.selected_index(), Some(1));
    }

    #[test]
    fn test_reapplied_template_with_new_list_is_degraded() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        let old_list = fx.list_id();
        let old_button = fx.add_button.read().id;
        let list = shared(MemoryHostList::<TabItem>::new());
        let list_id = list.read().element_id();
        let (selections, _a) = record(&fx.view.events().selection_changed);
        let (clicks, _b) = record(&fx.view.events().add_tab_button_click);

        fx.view.apply_template(&rebuilt(&list, &new_button()));
        fx.view.on_list_view_loaded(list_id);

        // The tabs stay in the host they first moved into
        assert!(list.read().items().is_empty());
        assert_eq!(fx.list.read().items(), fx.items);
        assert_eq!(fx.view.tab_count(), 2);

        let args = fx.list.write().user_select(1);
        fx.view.on_list_view_selection_changed(old_list, &args);
        fx.view.on_list_view_selection_changed(list_id, &args);
        assert!(selections.lock().is_empty());
        assert_eq!(fx.view.selected_index(), None);

        let mut focus = GettingFocusEventArgs::new(
            FocusNavigationDirection::Up,
            FocusInputDevice::Keyboard,
            Some(fx.container(1)),
            Some(fx.container(0)),
        );
        fx.view.on_list_view_getting_focus(old_list, &mut focus);
        assert!(!focus.cancel);
        assert!(!focus.handled);

        fx.view.on_add_button_click(old_button);
        assert!(clicks.lock().is_empty());
    }

    #[test]
    fn test_removing_selected_picks_following_tab() {
        let mut fx = Fixture::loaded(&["Home", "Docs", "Mail", "News"]);
        fx.view.set_selected_index(Some(1));

        fx.view.remove_tab(1).unwrap();
        assert_eq!(fx.view.selected_item(), Some(fx.items[2].clone()));
        assert_eq!(fx.list.read().selected_index(), Some(1));
    }

    #[test]
    fn test_removal_skips_disabled_and_hidden_tabs() {
        let mut fx = Fixture::loaded(&["Home", "Docs", "Mail", "News"]);
        fx.view.set_selected_index(Some(1));
        {
            let mut list = fx.list.write();
            list.container_at_mut(2).unwrap().is_enabled = false;
            list.container_at_mut(3).unwrap().is_visible = false;
        }

        fx.view.remove_tab(1).unwrap();
        assert_eq!(fx.view.selected_item(), Some(fx.items[0].clone()));
    }

    #[test]
    fn test_removal_with_nothing_selectable_clears() {
        let mut fx = Fixture::loaded(&["Home", "Docs", "Mail"]);
        fx.view.set_selected_index(Some(0));
        {
            let mut list = fx.list.write();
            list.container_at_mut(1).unwrap().is_enabled = false;
            list.container_at_mut(2).unwrap().is_enabled = false;
        }

        fx.view.remove_tab(0).unwrap();
        assert_eq!(fx.view.selected_index(), None);
        assert_eq!(fx.view.selected_item(), None);
    }

    #[test]
    fn test_removal_always_leaves_nearest_selected() {
        let headers = ["A", "B", "C", "D", "E", "F"];
        for count in 2..=headers.len() {
            for selected in 0..count {
                let mut fx = Fixture::loaded(&headers[..count]);
                fx.view.set_selected_index(Some(selected));

                fx.view.remove_tab(selected).unwrap();

                let expected = selected.min(count - 2);
                assert_eq!(fx.view.selected_index(), Some(expected));
                let list = fx.list.read();
                assert_eq!(list.containers().iter().filter(|c| c.is_selected).count(), 1);
            }
        }
    }

    #[test]
    fn test_removing_earlier_tab_keeps_selection() {
        let mut fx = Fixture::loaded(&["Home", "Docs", "Mail"]);
        fx.view.set_selected_index(Some(2));
        let (changes, _sub) = record(&fx.view.events().selection_changed);

        fx.view.remove_tab(0).unwrap();
        assert_eq!(fx.view.selected_index(), Some(1));
        assert_eq!(fx.view.selected_item(), Some(fx.items[2].clone()));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_removing_last_tab_clears_selection() {
        let mut fx = Fixture::loaded(&["Home"]);
        fx.view.set_selected_index(Some(0));
        let (changes, _sub) = record(&fx.view.events().selection_changed);

        fx.view.remove_tab(0).unwrap();
        assert_eq!(fx.view.selected_item(), None);
        assert_eq!(changes.lock().len(), 1);
    }

    #[test]
    fn test_standalone_removal_reselects() {
        let mut fx = Fixture::new(&["Home", "Docs", "Mail"]);
        fx.view.set_selected_index(Some(2));

        fx.view.remove_tab(2).unwrap();
        assert_eq!(fx.view.selected_item(), Some(fx.items[1].clone()));
    }

    #[test]
    fn test_move_keeps_selected_tab() {
        let mut fx = Fixture::loaded(&["Home", "Docs", "Mail"]);
        fx.view.set_selected_index(Some(0));
        let (changes, _sub) = record(&fx.view.events().selection_changed);

        fx.view.move_tab(0, 2).unwrap();
        assert_eq!(fx.view.selected_index(), Some(2));
        assert_eq!(fx.view.selected_item(), Some(fx.items[0].clone()));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_move_out_of_range() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        assert!(fx.view.move_tab(0, 5).is_err());
        assert!(fx.view.insert_tab(9, TabItem::new("Late")).is_err());
    }

    #[test]
    fn test_items_source_replaces_host_entries() {
        let mut fx = Fixture::loaded(&["Home"]);
        let source = vec![TabItem::new("One"), TabItem::new("Two")];

        fx.view.set_tab_items_source(Some(source.clone()));
        assert_eq!(fx.list.read().items(), source);
        assert_eq!(fx.view.tab_items_source(), Some(source.as_slice()));
    }

    #[test]
    fn test_items_source_forwarded_on_load() {
        let mut fx = Fixture::new(&[]);
        let source = vec![TabItem::new("One"), TabItem::new("Two")];
        fx.view.set_tab_items_source(Some(source.clone()));

        fx.load();
        assert_eq!(fx.list.read().items(), source);
    }

    #[test]
    fn test_close_request_resolves_item() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        let (closes, _sub) = record(&fx.view.events().tab_close_requested);

        let tab = fx.container(1);
        fx.view.request_close_tab(tab);
        fx.view.request_close_tab(ElementId::new());

        let closes = closes.lock();
        assert_eq!(closes.len(), 1);
        assert_eq!(closes[0].item, fx.items[1]);
        assert_eq!(closes[0].tab, tab);
        assert_eq!(fx.view.tab_count(), 2);
        assert_eq!(fx.list.read().container_close_requests(), &[tab]);
    }

    #[test]
    fn test_container_close_follows_control_event() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);
        let list = Arc::clone(&fx.list);
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = fx.view.events().tab_close_requested.subscribe(move |_| {
            sink.lock().push(list.read().container_close_requests().len());
        });

        let tab = fx.container(0);
        fx.view.request_close_tab(tab);
        assert_eq!(seen.lock().as_slice(), &[0]);
        assert_eq!(fx.list.read().container_close_requests(), &[tab]);
    }

    #[test]
    fn test_add_button_localized_and_clicked() {
        let mut fx = Fixture::loaded(&["Home"]);
        let button_id = {
            let button = fx.add_button.read();
            assert_eq!(button.automation_name, "Add Tab");
            assert_eq!(button.tooltip.as_deref(), Some("Add new tab"));
            button.id
        };
        let (clicks, _sub) = record(&fx.view.events().add_tab_button_click);

        fx.view.on_add_button_click(button_id);
        fx.view.on_add_button_click(ElementId::new());
        assert_eq!(clicks.lock().len(), 1);
    }

    #[test]
    fn test_scroll_buttons_step_and_clamp() {
        let mut fx = Fixture::loaded(&["Home", "Docs"]);

        fx.view.on_scroll_increase_click();
        assert_eq!(fx.scroll_viewer.read().horizontal_offset(), 50.0);
        fx.view.on_scroll_increase_click();
        fx.view.on_scroll_increase_click();
        assert_eq!(fx.scroll_viewer.read().horizontal_offset(), 120.0);

        fx.view.on_scroll_decrease_click();
        assert_eq!(fx.scroll_viewer.read().horizontal_offset(), 70.0);
        fx.view.on_scroll_decrease_click();
        fx.view.on_scroll_decrease_click();
        assert_eq!(fx.scroll_viewer.read().horizontal_offset(), 0.0);
    }

    #[test]
    fn test_scrolling_before_load_is_noop() {
        let mut fx = Fixture::new(&["Home"]);
        fx.view.on_scroll_increase_click();
        assert_eq!(fx.scroll_viewer.read().horizontal_offset(), 0.0);
    }
}
