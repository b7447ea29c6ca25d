//! Applying the width layout to the template

use tabview_host::{resource_keys, TabEntry, TabWidth};
use tabview_layout::{
    layout_strip, ReservedWidths, StripRequest, TabWidthBounds, DEFAULT_MAX_TAB_WIDTH,
    DEFAULT_MIN_TAB_WIDTH,
};

use crate::view::TabView;

impl<T: TabEntry> TabView<T> {
    /// Width bounds from resources, falling back to the defaults
    pub fn tab_width_bounds(&self) -> TabWidthBounds {
        TabWidthBounds::new(
            self.resources
                .number(resource_keys::TAB_MIN_WIDTH, DEFAULT_MIN_TAB_WIDTH),
            self.resources
                .number(resource_keys::TAB_MAX_WIDTH, DEFAULT_MAX_TAB_WIDTH),
        )
    }

    /// Recompute every width from scratch and push the result into the
    /// columns, the host list and each tab container.
    pub(crate) fn update_tab_widths(&mut self) {
        let mut tab_width = TabWidth::Auto;

        if self.parts.tab_container_grid.is_some() {
            let mut reserved = ReservedWidths::default();

            if let Some(column) = &self.parts.left_content_column {
                reserved.left_content = column.read().actual_width;
            }
            if let Some(column) = &self.parts.add_button_column {
                reserved.add_button = column.read().actual_width;
            }
            if let (Some(column), Some(presenter)) = (
                &self.parts.right_content_column,
                &self.parts.right_content_presenter,
            ) {
                let desired = presenter.read().desired_width();
                column.write().min_width = desired;
                reserved.right_content = desired;
            }

            if let Some(tab_column) = &self.parts.tab_column {
                let metrics = layout_strip(&StripRequest {
                    control_width: self.actual_width,
                    reserved,
                    horizontal_padding: self.padding.horizontal(),
                    tab_count: self.items.len(),
                    mode: self.width_mode,
                    bounds: self.tab_width_bounds(),
                });

                {
                    let mut column = tab_column.write();
                    if let Some(max_width) = metrics.column_max_width {
                        column.max_width = Some(max_width);
                    }
                    if let Some(width) = metrics.column_width {
                        column.width = width;
                    }
                }

                if let Some(list) = &self.parts.list_view {
                    let mut list = list.write();
                    if let Some(max_width) = metrics.list_max_width {
                        list.set_max_width(max_width);
                    }
                    if let Some(visibility) = metrics.scroll_bar {
                        list.set_horizontal_scroll_bar_visibility(visibility);
                    }
                }

                tracing::debug!(
                    mode = %self.width_mode,
                    available_width = metrics.available_width,
                    tab_width = ?metrics.tab_width,
                    "Updated tab widths"
                );
                tab_width = metrics.tab_width;
                self.metrics = Some(metrics);
            }
        }

        let Some(list) = self.list_view() else {
            return;
        };
        let mut host = list.write();
        for item in host.items() {
            if let Some(container) = Self::resolve_container(&*host, &item) {
                host.set_container_width(container, tab_width);
            }
        }
    }
}
