//! Template part resolution

use tabview_host::{
    part_names, resource_keys, Button, ContentPresenter, ElementId, GridColumn, HostList,
    ResourceProvider, Shared, TabEntry, TemplateChildren,
};

/// Named parts found in the applied template. Every part is optional and
/// each feature that needs one is skipped while it is missing.
pub(crate) struct TemplateParts<T: TabEntry> {
    pub tab_content_presenter: Option<Shared<dyn ContentPresenter>>,
    pub right_content_presenter: Option<Shared<dyn ContentPresenter>>,
    pub left_content_column: Option<Shared<GridColumn>>,
    pub tab_column: Option<Shared<GridColumn>>,
    pub add_button_column: Option<Shared<GridColumn>>,
    pub right_content_column: Option<Shared<GridColumn>>,
    pub tab_container_grid: Option<ElementId>,
    pub list_view: Option<Shared<dyn HostList<T>>>,
    pub add_button: Option<Shared<Button>>,
}

impl<T: TabEntry> TemplateParts<T> {
    pub fn empty() -> Self {
        Self {
            tab_content_presenter: None,
            right_content_presenter: None,
            left_content_column: None,
            tab_column: None,
            add_button_column: None,
            right_content_column: None,
            tab_container_grid: None,
            list_view: None,
            add_button: None,
        }
    }

    pub fn resolve(template: &dyn TemplateChildren<T>) -> Self {
        let parts = Self {
            tab_content_presenter: template.content_presenter(part_names::TAB_CONTENT_PRESENTER),
            right_content_presenter: template
                .content_presenter(part_names::RIGHT_CONTENT_PRESENTER),
            left_content_column: template.column(part_names::LEFT_CONTENT_COLUMN),
            tab_column: template.column(part_names::TAB_COLUMN),
            add_button_column: template.column(part_names::ADD_BUTTON_COLUMN),
            right_content_column: template.column(part_names::RIGHT_CONTENT_COLUMN),
            tab_container_grid: template.grid(part_names::TAB_CONTAINER_GRID),
            list_view: template.list_view(part_names::TAB_LIST_VIEW),
            add_button: template.button(part_names::ADD_BUTTON),
        };

        tracing::debug!(
            list_view = parts.list_view.is_some(),
            content_presenter = parts.tab_content_presenter.is_some(),
            grid = parts.tab_container_grid.is_some(),
            "Resolved template parts"
        );

        parts
    }

    /// Accessible name and tooltip for the add button
    pub fn localize_add_button(&self, resources: &dyn ResourceProvider) {
        let Some(button) = &self.add_button else {
            return;
        };

        let mut button = button.write();
        if button.automation_name.is_empty() {
            if let Some(name) = resources.string(resource_keys::ADD_BUTTON_NAME) {
                button.automation_name = name;
            }
        }
        if button.tooltip.is_none() {
            button.tooltip = resources.string(resource_keys::ADD_BUTTON_TOOLTIP);
        }
    }

    pub fn list_view_id(&self) -> Option<ElementId> {
        self.list_view.as_ref().map(|list| list.read().element_id())
    }
}
