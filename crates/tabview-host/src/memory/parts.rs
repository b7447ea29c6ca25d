//! In-memory template parts

use std::collections::HashMap;

use crate::element::{ElementId, GridColumn};
use crate::events::EventSource;
use crate::focus::VisualTree;
use crate::list::{HostList, PresentedContent, TabEntry};
use crate::memory::MemoryVisualTree;
use crate::parts::{Button, ContentPresenter, LosingFocusEventArgs, ScrollViewer, TemplateChildren};
use crate::Shared;

/// Content presenter that realizes its content on `update_layout`.
///
/// When attached to a `MemoryVisualTree`, replacing the content while
/// focus is inside the old content drops focus and raises `losing_focus`.
pub struct MemoryContentPresenter {
    id: ElementId,
    content: PresentedContent,
    live: Option<ElementId>,
    desired_width: f64,
    losing_focus: EventSource<LosingFocusEventArgs>,
    tree: Option<Shared<MemoryVisualTree>>,
}

impl MemoryContentPresenter {
    pub fn new() -> Self {
        Self {
            id: ElementId::new(),
            content: PresentedContent::default(),
            live: None,
            desired_width: 0.0,
            losing_focus: EventSource::new(),
            tree: None,
        }
    }

    pub fn with_tree(mut self, tree: Shared<MemoryVisualTree>) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn with_desired_width(mut self, width: f64) -> Self {
        self.desired_width = width;
        self
    }

    pub fn set_desired_width(&mut self, width: f64) {
        self.desired_width = width;
    }
}

impl Default for MemoryContentPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentPresenter for MemoryContentPresenter {
    fn element_id(&self) -> ElementId {
        self.id
    }

    fn content(&self) -> PresentedContent {
        self.content.clone()
    }

    fn set_content(&mut self, content: PresentedContent) {
        if content == self.content {
            return;
        }

        if let (Some(live), Some(tree)) = (self.live, self.tree.as_ref()) {
            let lost = {
                let mut tree = tree.write();
                if tree.is_focus_within(live) {
                    let old = tree.focused_element();
                    tree.clear_focus();
                    Some(old)
                } else {
                    None
                }
            };

            if let Some(old_focused_element) = lost {
                self.losing_focus
                    .raise(&LosingFocusEventArgs { old_focused_element });
            }
        }

        self.content = content;
        self.live = None;
    }

    fn update_layout(&mut self) {
        self.live = self.content.content;
    }

    fn live_content(&self) -> Option<ElementId> {
        self.live
    }

    fn desired_width(&self) -> f64 {
        self.desired_width
    }

    fn losing_focus(&self) -> &EventSource<LosingFocusEventArgs> {
        &self.losing_focus
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryScrollViewer {
    id: ElementId,
    horizontal_offset: f64,
    scrollable_width: f64,
}

impl MemoryScrollViewer {
    pub fn new(scrollable_width: f64) -> Self {
        Self {
            id: ElementId::new(),
            horizontal_offset: 0.0,
            scrollable_width,
        }
    }
}

impl ScrollViewer for MemoryScrollViewer {
    fn element_id(&self) -> ElementId {
        self.id
    }

    fn horizontal_offset(&self) -> f64 {
        self.horizontal_offset
    }

    fn scrollable_width(&self) -> f64 {
        self.scrollable_width
    }

    fn change_view(&mut self, horizontal_offset: f64) {
        self.horizontal_offset = horizontal_offset.clamp(0.0, self.scrollable_width.max(0.0));
    }
}

/// Template built up part by part
pub struct MemoryTemplate<T: TabEntry> {
    presenters: HashMap<String, Shared<dyn ContentPresenter>>,
    columns: HashMap<String, Shared<GridColumn>>,
    grids: HashMap<String, ElementId>,
    list_views: HashMap<String, Shared<dyn HostList<T>>>,
    buttons: HashMap<String, Shared<Button>>,
}

impl<T: TabEntry> MemoryTemplate<T> {
    pub fn new() -> Self {
        Self {
            presenters: HashMap::new(),
            columns: HashMap::new(),
            grids: HashMap::new(),
            list_views: HashMap::new(),
            buttons: HashMap::new(),
        }
    }

    pub fn with_presenter<P>(mut self, name: &str, presenter: Shared<P>) -> Self
    where
        P: ContentPresenter + 'static,
    {
        let presenter: Shared<dyn ContentPresenter> = presenter;
        self.presenters.insert(name.to_string(), presenter);
        self
    }

    pub fn with_column(mut self, name: &str, column: Shared<GridColumn>) -> Self {
        self.columns.insert(name.to_string(), column);
        self
    }

    pub fn with_grid(mut self, name: &str, grid: ElementId) -> Self {
        self.grids.insert(name.to_string(), grid);
        self
    }

    pub fn with_list_view<L>(mut self, name: &str, list_view: Shared<L>) -> Self
    where
        L: HostList<T> + 'static,
    {
        let list_view: Shared<dyn HostList<T>> = list_view;
        self.list_views.insert(name.to_string(), list_view);
        self
    }

    pub fn with_button(mut self, name: &str, button: Shared<Button>) -> Self {
        self.buttons.insert(name.to_string(), button);
        self
    }
}

impl<T: TabEntry> Default for MemoryTemplate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TabEntry> TemplateChildren<T> for MemoryTemplate<T> {
    fn content_presenter(&self, name: &str) -> Option<Shared<dyn ContentPresenter>> {
        self.presenters.get(name).cloned()
    }

    fn column(&self, name: &str) -> Option<Shared<GridColumn>> {
        self.columns.get(name).cloned()
    }

    fn grid(&self, name: &str) -> Option<ElementId> {
        self.grids.get(name).copied()
    }

    fn list_view(&self, name: &str) -> Option<Shared<dyn HostList<T>>> {
        self.list_views.get(name).cloned()
    }

    fn button(&self, name: &str) -> Option<Shared<Button>> {
        self.buttons.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Rect;
    use crate::shared;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_presenter_reports_focus_loss() {
        let tree = shared(MemoryVisualTree::new());
        let old_root = ElementId::new();
        let old_field = ElementId::new();
        {
            let mut tree = tree.write();
            tree.add_element(old_root, None, Rect::default(), false);
            tree.add_element(old_field, Some(old_root), Rect::default(), true);
            tree.set_focus(old_field, crate::FocusState::Keyboard);
        }

        let mut presenter = MemoryContentPresenter::new().with_tree(Arc::clone(&tree));
        presenter.set_content(PresentedContent::element(old_root));
        presenter.update_layout();

        let lost = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&lost);
        let _watch = presenter.losing_focus().subscribe(move |_| {
            flag.store(true, Ordering::SeqCst);
        });

        presenter.set_content(PresentedContent::element(ElementId::new()));
        assert!(lost.load(Ordering::SeqCst));
        assert!(presenter.live_content().is_none());
        assert!(tree.read().focused_element().is_none());
    }

    #[test]
    fn test_scroll_viewer_clamps() {
        let mut viewer = MemoryScrollViewer::new(120.0);
        viewer.change_view(500.0);
        assert_eq!(viewer.horizontal_offset(), 120.0);
        viewer.change_view(-10.0);
        assert_eq!(viewer.horizontal_offset(), 0.0);
    }
}
