//! Headless shell hosting one tab view

use parking_lot::Mutex;
use std::sync::Arc;

use tabview_core::{
    Config, KeyChord, KeyRoutedEventArgs, Result, TabItem, TabView, WidthMode,
};
use tabview_host::memory::{
    MemoryContentPresenter, MemoryHostList, MemoryScrollViewer, MemoryTemplate, MemoryVisualTree,
};
use tabview_host::{
    part_names, shared, Button, DataPackageOperation, DragItemsCompletedEventArgs,
    DragItemsStartingEventArgs, ElementId, GridColumn, HostList, Rect, Shared, Subscription,
    VisualTree,
};

/// Owns the control, its in-memory parts and the application's reactions
/// to the control's events.
pub struct DemoShell {
    view: TabView<TabItem>,
    list: Shared<MemoryHostList<TabItem>>,
    close_requests: Arc<Mutex<Vec<TabItem>>>,
    torn_out: Arc<Mutex<Vec<TabItem>>>,
    _subscriptions: Vec<Subscription>,
}

impl DemoShell {
    pub fn new(config: Config) -> Self {
        let tree = shared(MemoryVisualTree::new());
        let scroll_viewer = shared(MemoryScrollViewer::new(0.0));
        let list = shared(
            MemoryHostList::<TabItem>::new()
                .with_bounds(Rect::new(0.0, 0.0, 640.0, 32.0))
                .with_scroll_viewer(scroll_viewer),
        );

        let template = MemoryTemplate::new()
            .with_presenter(
                part_names::TAB_CONTENT_PRESENTER,
                shared(MemoryContentPresenter::new().with_tree(Arc::clone(&tree))),
            )
            .with_column(part_names::TAB_COLUMN, shared(GridColumn::default()))
            .with_column(
                part_names::ADD_BUTTON_COLUMN,
                shared(GridColumn::with_actual_width(40.0)),
            )
            .with_grid(part_names::TAB_CONTAINER_GRID, ElementId::new())
            .with_list_view(part_names::TAB_LIST_VIEW, Arc::clone(&list))
            .with_button(part_names::ADD_BUTTON, shared(Button::default()));

        let visual_tree: Shared<dyn VisualTree> = tree;
        let mut view = TabView::new(config, visual_tree);
        view.apply_template(&template);

        let close_requests = Arc::new(Mutex::new(Vec::new()));
        let torn_out = Arc::new(Mutex::new(Vec::new()));

        let subscriptions = {
            let events = view.events();
            let requests = Arc::clone(&close_requests);
            let dropped = Arc::clone(&torn_out);

            vec![
                events.tab_close_requested.subscribe(move |args| {
                    requests.lock().push(args.item.clone());
                }),
                events.tab_dropped_outside.subscribe(move |args| {
                    dropped.lock().push(args.item.clone());
                }),
                events.selection_changed.subscribe(|args| {
                    if let Some(item) = args.added_items.first() {
                        tracing::info!(header = %item.display_header(), "Selected tab");
                    }
                }),
            ]
        };

        Self {
            view,
            list,
            close_requests,
            torn_out,
            _subscriptions: subscriptions,
        }
    }

    pub fn open(&mut self, header: &str) {
        self.view.push_tab(TabItem::new(header));
    }

    /// The platform finished loading the list view and the control
    pub fn load(&mut self) {
        let list_id = self.list.read().element_id();
        self.view.on_list_view_loaded(list_id);
        self.view.on_loaded();
        self.view.set_selected_index(Some(0));
    }

    pub fn resize(&mut self, width: f64) {
        self.view.on_size_changed(width);
    }

    pub fn set_width_mode(&mut self, mode: WidthMode) {
        self.view.set_tab_width_mode(mode);
    }

    /// Deliver a chord the way the platform would: through a registered
    /// accelerator when there is one, as a key-down otherwise.
    pub fn press(&mut self, chord: KeyChord) -> bool {
        let accelerator = self
            .view
            .accelerators()
            .iter()
            .copied()
            .find(|accelerator| accelerator.chord == chord);

        let handled = match accelerator {
            Some(accelerator) => self.view.on_accelerator_invoked(&accelerator),
            None => {
                let mut args = KeyRoutedEventArgs::new(chord.key, chord.modifiers);
                self.view.on_key_down(&mut args);
                args.handled
            }
        };

        tracing::debug!(chord = %chord, handled, "Pressed");
        handled
    }

    /// Drag the tab at `index` and let go where nothing accepts it
    pub fn drag_outside(&mut self, index: usize) {
        let Some(item) = self.view.tab_items().get(index).cloned() else {
            return;
        };
        let list_id = self.list.read().element_id();

        let mut starting = DragItemsStartingEventArgs {
            items: vec![item.clone()],
            cancel: false,
        };
        self.view
            .on_list_view_drag_items_starting(list_id, &mut starting);
        if starting.cancel {
            tracing::info!(index, "Drag cancelled");
            return;
        }

        self.view.on_list_view_drag_items_completed(
            list_id,
            &DragItemsCompletedEventArgs {
                items: vec![item],
                drop_result: DataPackageOperation::None,
            },
        );
    }

    /// The application decides what closing means; here it removes the tab
    pub fn process_close_requests(&mut self) -> Result<()> {
        let requests = std::mem::take(&mut *self.close_requests.lock());
        self.remove_all(requests, "Closed tab")
    }

    /// Tabs dropped outside would open in a new window
    pub fn process_torn_out_tabs(&mut self) -> Result<()> {
        let torn_out = std::mem::take(&mut *self.torn_out.lock());
        self.remove_all(torn_out, "Moved tab to a new window")
    }

    fn remove_all(&mut self, items: Vec<TabItem>, message: &str) -> Result<()> {
        for item in items {
            if let Some(index) = self.view.tab_items().iter().position(|tab| *tab == item) {
                self.view.remove_tab(index)?;
                tracing::info!(header = %item.display_header(), "{}", message);
            }
        }
        Ok(())
    }

    pub fn log_state(&self, step: &str) {
        let headers: Vec<String> = self
            .view
            .tab_items()
            .iter()
            .map(|tab| tab.display_header().to_string())
            .collect();
        let list = self.list.read();
        let widths: Vec<_> = list.containers().iter().map(|c| c.width).collect();

        tracing::info!(
            step,
            tabs = ?headers,
            selected = ?self.view.selected_index(),
            widths = ?widths,
            scroll_bar = ?list.horizontal_scroll_bar_visibility(),
            "Tab view state"
        );
    }
}
