//! Headless control wired to the in-memory parts

use parking_lot::Mutex;
use std::sync::Arc;

use tabview_host::memory::{
    MemoryContentPresenter, MemoryHostList, MemoryScrollViewer, MemoryTemplate, MemoryVisualTree,
};
use tabview_host::{
    part_names, shared, Button, ContentPresenter, ElementId, EventSource, GridColumn, HostList,
    PresentedContent, Rect, RoutedEventSource, Shared, Subscription, VisualTree,
};
use tabview_tabs::TabItem;

use crate::config::Config;
use crate::view::TabView;

pub(crate) fn strip_bounds() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 32.0)
}

pub(crate) struct Fixture {
    pub view: TabView<TabItem>,
    pub items: Vec<TabItem>,
    pub tree: Shared<MemoryVisualTree>,
    pub list: Shared<MemoryHostList<TabItem>>,
    pub presenter: Shared<MemoryContentPresenter>,
    pub right_presenter: Shared<MemoryContentPresenter>,
    pub left_column: Shared<GridColumn>,
    pub tab_column: Shared<GridColumn>,
    pub add_button_column: Shared<GridColumn>,
    pub right_column: Shared<GridColumn>,
    pub add_button: Shared<Button>,
    pub scroll_viewer: Shared<MemoryScrollViewer>,
}

impl Fixture {
    /// Template applied, tabs added, list view not loaded yet
    pub fn new(headers: &[&str]) -> Self {
        Self::with_config(Config::default(), headers)
    }

    pub fn with_config(config: Config, headers: &[&str]) -> Self {
        Self::build(config, headers, true)
    }

    pub fn without_grid(headers: &[&str]) -> Self {
        Self::build(Config::default(), headers, false)
    }

    pub fn loaded(headers: &[&str]) -> Self {
        let mut fixture = Self::new(headers);
        fixture.load();
        fixture
    }

    fn build(config: Config, headers: &[&str], with_grid: bool) -> Self {
        let tree = shared(MemoryVisualTree::new());
        let scroll_viewer = shared(MemoryScrollViewer::new(120.0));
        let list = shared(
            MemoryHostList::new()
                .with_bounds(strip_bounds())
                .with_scroll_viewer(Arc::clone(&scroll_viewer)),
        );
        let presenter = shared(MemoryContentPresenter::new().with_tree(Arc::clone(&tree)));
        let right_presenter = shared(MemoryContentPresenter::new());
        let left_column = shared(GridColumn::default());
        let tab_column = shared(GridColumn::default());
        let add_button_column = shared(GridColumn::default());
        let right_column = shared(GridColumn::default());
        let add_button = shared(Button {
            id: ElementId::new(),
            ..Button::default()
        });

        let mut template = MemoryTemplate::new()
            .with_presenter(part_names::TAB_CONTENT_PRESENTER, Arc::clone(&presenter))
            .with_presenter(part_names::RIGHT_CONTENT_PRESENTER, Arc::clone(&right_presenter))
            .with_column(part_names::LEFT_CONTENT_COLUMN, Arc::clone(&left_column))
            .with_column(part_names::TAB_COLUMN, Arc::clone(&tab_column))
            .with_column(part_names::ADD_BUTTON_COLUMN, Arc::clone(&add_button_column))
            .with_column(part_names::RIGHT_CONTENT_COLUMN, Arc::clone(&right_column))
            .with_list_view(part_names::TAB_LIST_VIEW, Arc::clone(&list))
            .with_button(part_names::ADD_BUTTON, Arc::clone(&add_button));
        if with_grid {
            template = template.with_grid(part_names::TAB_CONTAINER_GRID, ElementId::new());
        }

        let presenter_id = presenter.read().element_id();
        tree.write()
            .add_element(presenter_id, None, Rect::new(0.0, 40.0, 400.0, 400.0), false);

        let visual_tree: Shared<dyn VisualTree> = tree.clone();
        let mut view = TabView::new(config, visual_tree);
        view.apply_template(&template);

        let items: Vec<TabItem> = headers.iter().map(|header| TabItem::new(*header)).collect();
        for item in &items {
            view.push_tab(item.clone());
        }

        Self {
            view,
            items,
            tree,
            list,
            presenter,
            right_presenter,
            left_column,
            tab_column,
            add_button_column,
            right_column,
            add_button,
            scroll_viewer,
        }
    }

    /// Load the list view and the control, then put the tab headers into
    /// the visual tree side by side, overlapping by one pixel
    pub fn load(&mut self) {
        let list_id = self.list_id();
        self.view.on_list_view_loaded(list_id);
        self.view.on_loaded();

        let list = self.list.read();
        let mut tree = self.tree.write();
        tree.add_element(list_id, None, strip_bounds(), false);
        for (index, container) in list.containers().iter().enumerate() {
            let bounds = Rect::new(index as f64 * 99.0, 0.0, 100.0, 32.0);
            tree.add_element(container.id, Some(list_id), bounds, true);
        }
    }

    pub fn list_id(&self) -> ElementId {
        self.list.read().element_id()
    }

    pub fn container(&self, index: usize) -> ElementId {
        self.list.read().container_from_index(index).unwrap()
    }

    /// Give tab `index` a content root holding one field. Returns both.
    pub fn give_content(&self, index: usize, focusable: bool) -> (ElementId, ElementId) {
        let root = ElementId::new();
        let field = ElementId::new();
        let presenter_id = self.presenter.read().element_id();
        {
            let mut tree = self.tree.write();
            tree.add_element(root, Some(presenter_id), Rect::new(0.0, 40.0, 400.0, 400.0), false);
            tree.add_element(field, Some(root), Rect::new(8.0, 48.0, 200.0, 24.0), focusable);
        }

        self.list
            .write()
            .container_at_mut(index)
            .unwrap()
            .content = PresentedContent::element(root);
        (root, field)
    }
}

/// Collect every payload raised on `source` while the subscription lives
pub(crate) fn record<A>(source: &EventSource<A>) -> (Arc<Mutex<Vec<A>>>, Subscription)
where
    A: Clone + Send + 'static,
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = source.subscribe(move |args: &A| sink.lock().push(args.clone()));
    (seen, subscription)
}

/// `record` for sources whose handlers may answer; only observes
pub(crate) fn record_routed<A>(
    source: &RoutedEventSource<A>,
) -> (Arc<Mutex<Vec<A>>>, Subscription)
where
    A: Clone + Send + 'static,
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = source.subscribe(move |args: &mut A| sink.lock().push(args.clone()));
    (seen, subscription)
}
