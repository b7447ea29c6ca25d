//! Template parts and resources

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::element::{ElementId, GridColumn};
use crate::events::EventSource;
use crate::list::{HostList, PresentedContent, TabEntry};
use crate::Shared;

/// Names the control looks its template parts up by
pub mod part_names {
    pub const TAB_CONTENT_PRESENTER: &str = "TabContentPresenter";
    pub const RIGHT_CONTENT_PRESENTER: &str = "RightContentPresenter";
    pub const LEFT_CONTENT_COLUMN: &str = "LeftContentColumn";
    pub const TAB_COLUMN: &str = "TabColumn";
    pub const ADD_BUTTON_COLUMN: &str = "AddButtonColumn";
    pub const RIGHT_CONTENT_COLUMN: &str = "RightContentColumn";
    pub const TAB_CONTAINER_GRID: &str = "TabContainerGrid";
    pub const TAB_LIST_VIEW: &str = "TabListView";
    pub const ADD_BUTTON: &str = "AddButton";
}

pub mod resource_keys {
    pub const TAB_MIN_WIDTH: &str = "TabViewItemMinWidth";
    pub const TAB_MAX_WIDTH: &str = "TabViewItemMaxWidth";
    pub const ADD_BUTTON_NAME: &str = "TabViewAddButtonName";
    pub const ADD_BUTTON_TOOLTIP: &str = "TabViewAddButtonTooltip";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LosingFocusEventArgs {
    pub old_focused_element: Option<ElementId>,
}

/// Presents a content element inside the control
pub trait ContentPresenter: Send + Sync {
    fn element_id(&self) -> ElementId;

    fn content(&self) -> PresentedContent;

    fn set_content(&mut self, content: PresentedContent);

    /// Realize the current content into the live visual tree
    fn update_layout(&mut self);

    /// Root of the realized content, once laid out
    fn live_content(&self) -> Option<ElementId>;

    fn desired_width(&self) -> f64;

    /// Raised when focus leaves this presenter's subtree
    fn losing_focus(&self) -> &EventSource<LosingFocusEventArgs>;
}

/// Horizontal scroller around the tab strip
pub trait ScrollViewer: Send + Sync {
    fn element_id(&self) -> ElementId;

    fn horizontal_offset(&self) -> f64;

    fn scrollable_width(&self) -> f64;

    fn change_view(&mut self, horizontal_offset: f64);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Button {
    pub id: ElementId,
    /// Accessible name
    pub automation_name: String,
    pub tooltip: Option<String>,
}

/// Named-part lookup on the applied template
pub trait TemplateChildren<T: TabEntry> {
    fn content_presenter(&self, name: &str) -> Option<Shared<dyn ContentPresenter>>;

    fn column(&self, name: &str) -> Option<Shared<GridColumn>>;

    fn grid(&self, name: &str) -> Option<ElementId>;

    fn list_view(&self, name: &str) -> Option<Shared<dyn HostList<T>>>;

    fn button(&self, name: &str) -> Option<Shared<Button>>;
}

/// String and number resource lookup
pub trait ResourceProvider: Send + Sync {
    fn string(&self, key: &str) -> Option<String>;

    fn number(&self, key: &str, default: f64) -> f64;
}

/// Resource dictionary loaded from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceTable {
    pub strings: HashMap<String, String>,
    pub numbers: HashMap<String, f64>,
}

impl ResourceTable {
    pub fn empty() -> Self {
        Self {
            strings: HashMap::new(),
            numbers: HashMap::new(),
        }
    }

    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.strings.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_number(mut self, key: &str, value: f64) -> Self {
        self.numbers.insert(key.to_string(), value);
        self
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::empty()
            .with_string(resource_keys::ADD_BUTTON_NAME, "Add Tab")
            .with_string(resource_keys::ADD_BUTTON_TOOLTIP, "Add new tab")
    }
}

impl ResourceProvider for ResourceTable {
    fn string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn number(&self, key: &str, default: f64) -> f64 {
        self.numbers.get(key).copied().unwrap_or(default)
    }
}
