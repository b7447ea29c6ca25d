//! In-memory host list

use crate::element::{ElementId, Rect, ScrollBarVisibility, TabWidth};
use crate::list::{HostList, SelectionChangedEventArgs, TabContainer, TabEntry, VectorChange};
use crate::memory::MemoryScrollViewer;
use crate::parts::ScrollViewer;
use crate::Shared;

/// Host list that realizes one container per item, eagerly
pub struct MemoryHostList<T> {
    id: ElementId,
    items: Vec<T>,
    /// Parallel to `items`
    containers: Vec<TabContainer>,
    selected: Option<usize>,
    max_width: Option<f64>,
    scroll_bar: ScrollBarVisibility,
    bounds: Rect,
    scroll_viewer: Option<Shared<MemoryScrollViewer>>,
    close_requests: Vec<ElementId>,
}

impl<T: TabEntry> MemoryHostList<T> {
    pub fn new() -> Self {
        Self {
            id: ElementId::new(),
            items: Vec::new(),
            containers: Vec::new(),
            selected: None,
            max_width: None,
            scroll_bar: ScrollBarVisibility::Auto,
            bounds: Rect::default(),
            scroll_viewer: None,
            close_requests: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_scroll_viewer(mut self, scroll_viewer: Shared<MemoryScrollViewer>) -> Self {
        self.scroll_viewer = Some(scroll_viewer);
        self
    }

    pub fn containers(&self) -> &[TabContainer] {
        &self.containers
    }

    pub fn container_mut(&mut self, container: ElementId) -> Option<&mut TabContainer> {
        self.containers.iter_mut().find(|c| c.id == container)
    }

    pub fn container_at_mut(&mut self, index: usize) -> Option<&mut TabContainer> {
        self.containers.get_mut(index)
    }

    pub fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    pub fn horizontal_scroll_bar_visibility(&self) -> ScrollBarVisibility {
        self.scroll_bar
    }

    /// Containers that raised their own close request, oldest first
    pub fn container_close_requests(&self) -> &[ElementId] {
        &self.close_requests
    }

    /// Select a tab the way a pointer click would, returning the
    /// notification the list raises.
    pub fn user_select(&mut self, index: usize) -> SelectionChangedEventArgs<T> {
        let removed = self.selected_item();
        self.apply_selection(Some(index).filter(|i| *i < self.items.len()));
        SelectionChangedEventArgs::new(removed, self.selected_item())
    }

    /// Reorder a tab the way a drag inside the strip would, returning the
    /// remove and insert notifications in order.
    pub fn user_move(&mut self, from: usize, to: usize) -> Option<(VectorChange, VectorChange)> {
        if from >= self.items.len() || to >= self.items.len() {
            return None;
        }

        let item = self.remove_item(from)?;
        self.insert_item(to, item);
        Some((VectorChange::removed(from), VectorChange::inserted(to)))
    }

    fn realize(item: &T) -> TabContainer {
        TabContainer::new(item.as_container().unwrap_or_default())
    }

    fn apply_selection(&mut self, index: Option<usize>) {
        self.selected = index;
        for (i, container) in self.containers.iter_mut().enumerate() {
            container.is_selected = Some(i) == index;
        }
    }
}

impl<T: TabEntry> Default for MemoryHostList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TabEntry> HostList<T> for MemoryHostList<T> {
    fn element_id(&self) -> ElementId {
        self.id
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }

    fn items(&self) -> Vec<T> {
        self.items.clone()
    }

    fn insert_item(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.containers.insert(index, Self::realize(&item));
        self.items.insert(index, item);

        if let Some(selected) = self.selected {
            if selected >= index {
                self.selected = Some(selected + 1);
            }
        }
    }

    fn remove_item(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }

        self.containers.remove(index);
        let item = self.items.remove(index);

        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };

        Some(item)
    }

    fn set_items_source(&mut self, source: Option<Vec<T>>) {
        if let Some(source) = source {
            self.containers = source.iter().map(Self::realize).collect();
            self.items = source;
            self.apply_selection(None);
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn selected_item(&self) -> Option<T> {
        self.selected.and_then(|index| self.items.get(index).cloned())
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        match index {
            Some(index) if index >= self.items.len() => {
                tracing::debug!(index, count = self.items.len(), "Ignoring out of range selection");
            }
            index => self.apply_selection(index),
        }
    }

    fn select_container(&mut self, container: ElementId) {
        if let Some(index) = self.index_from_container(container) {
            self.apply_selection(Some(index));
        }
    }

    fn set_is_selected(&mut self, container: ElementId, selected: bool) {
        if let Some(index) = self.index_from_container(container) {
            if selected {
                self.apply_selection(Some(index));
            } else if self.selected == Some(index) {
                self.apply_selection(None);
            }
        }
    }

    fn container_from_item(&self, item: &T) -> Option<ElementId> {
        self.index_of(item)
            .and_then(|index| self.containers.get(index))
            .map(|c| c.id)
    }

    fn container_from_index(&self, index: usize) -> Option<ElementId> {
        self.containers.get(index).map(|c| c.id)
    }

    fn item_from_container(&self, container: ElementId) -> Option<T> {
        self.index_from_container(container)
            .and_then(|index| self.items.get(index).cloned())
    }

    fn index_from_container(&self, container: ElementId) -> Option<usize> {
        self.containers.iter().position(|c| c.id == container)
    }

    fn container(&self, container: ElementId) -> Option<TabContainer> {
        self.containers.iter().find(|c| c.id == container).cloned()
    }

    fn set_container_width(&mut self, container: ElementId, width: TabWidth) {
        if let Some(container) = self.container_mut(container) {
            container.width = width;
        }
    }

    fn raise_container_close_requested(&mut self, container: ElementId) {
        if self.index_from_container(container).is_some() {
            self.close_requests.push(container);
        }
    }

    fn set_max_width(&mut self, width: f64) {
        self.max_width = Some(width);
    }

    fn set_horizontal_scroll_bar_visibility(&mut self, visibility: ScrollBarVisibility) {
        self.scroll_bar = visibility;
    }

    fn screen_bounds(&self) -> Rect {
        self.bounds
    }

    fn scroll_viewer(&self) -> Option<Shared<dyn ScrollViewer>> {
        self.scroll_viewer
            .clone()
            .map(|viewer| -> Shared<dyn ScrollViewer> { viewer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str);

    impl TabEntry for Item {}

    fn list_of(names: &[&'static str]) -> MemoryHostList<Item> {
        let mut list = MemoryHostList::new();
        for name in names {
            let count = list.item_count();
            list.insert_item(count, Item(name));
        }
        list
    }

    #[test]
    fn test_removing_selected_clears_selection() {
        let mut list = list_of(&["a", "b", "c"]);
        list.set_selected_index(Some(1));

        list.remove_item(1);
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn test_selection_follows_shifted_item() {
        let mut list = list_of(&["a", "b", "c"]);
        list.set_selected_index(Some(2));

        list.remove_item(0);
        assert_eq!(list.selected_item(), Some(Item("c")));

        list.insert_item(0, Item("z"));
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut list = list_of(&["a"]);
        list.set_selected_index(Some(0));
        list.set_selected_index(Some(4));
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn test_container_flags_track_selection() {
        let mut list = list_of(&["a", "b"]);
        let second = list.container_from_index(1).unwrap();

        list.set_is_selected(second, true);
        assert_eq!(list.selected_index(), Some(1));
        assert!(list.containers()[1].is_selected);
        assert!(!list.containers()[0].is_selected);
    }

    #[test]
    fn test_user_move_reorders_items() {
        let mut list = list_of(&["a", "b", "c"]);
        list.user_select(0);

        let (removed, inserted) = list.user_move(0, 2).unwrap();
        assert_eq!(removed, VectorChange::removed(0));
        assert_eq!(inserted, VectorChange::inserted(2));
        assert_eq!(list.items(), vec![Item("b"), Item("c"), Item("a")]);
    }
}
