//! Keyboard commands and directional focus interception

use tabview_host::{ElementId, GettingFocusEventArgs, TabEntry};
use tabview_input::{
    cycle_index, resolve_header_overlap, KeyRoutedEventArgs, KeyboardAccelerator,
    OverlapResolution, TabCommand,
};

use crate::view::{DeferredAction, TabView};

impl<T: TabEntry> TabView<T> {
    /// Run `command`; returns whether it was handled
    pub fn handle_command(&mut self, command: TabCommand) -> bool {
        let handled = match command.step() {
            Some(step) => self.select_next_tab(step),
            None => self.request_close_current_tab(),
        };

        tracing::debug!(command = ?command, handled, "Dispatched tab command");
        handled
    }

    pub fn on_accelerator_invoked(&mut self, accelerator: &KeyboardAccelerator) -> bool {
        match self.router.from_accelerator(accelerator.chord) {
            Some(command) => self.handle_command(command),
            None => false,
        }
    }

    pub fn on_key_down(&mut self, args: &mut KeyRoutedEventArgs) {
        if let Some(command) = self.router.from_key_down(args) {
            args.handled = self.handle_command(command);
        }
    }

    /// Move the selection `step` tabs along, wrapping at either end.
    /// Needs at least two tabs.
    pub fn select_next_tab(&mut self, step: i32) -> bool {
        match cycle_index(self.selection.index(), step, self.item_count()) {
            Some(index) => {
                self.set_selected_index(Some(index));
                true
            }
            None => false,
        }
    }

    /// Ask for the selected tab to be closed, if it is closable
    pub fn request_close_current_tab(&mut self) -> bool {
        match self.selected_container() {
            Some(container) if container.is_closable => {
                self.request_close_tab(container.id);
                true
            }
            _ => false,
        }
    }

    /// Tabs counted for cycling. Once attached the host list holds the
    /// bound source's entries, so its live count is used; tabs added or
    /// removed after binding are counted too.
    fn item_count(&self) -> usize {
        match &self.items_source {
            Some(source) if !self.items.is_delegated() => source.len(),
            _ => self.items.len(),
        }
    }

    /// Intercept Up/Down moves between two of this control's tab headers
    pub fn on_list_view_getting_focus(
        &mut self,
        sender: ElementId,
        args: &mut GettingFocusEventArgs,
    ) {
        if !self.is_current_list(sender) {
            return;
        }
        let Some(list) = self.list_view() else {
            return;
        };

        let (old_is_own_tab, new_is_own_tab, bounds) = {
            let host = list.read();
            let is_own_tab = |element: Option<ElementId>| {
                element
                    .and_then(|element| host.index_from_container(element))
                    .is_some()
            };
            (
                is_own_tab(args.old_focused_element),
                is_own_tab(args.new_focused_element),
                host.screen_bounds(),
            )
        };

        match resolve_header_overlap(
            args.direction,
            args.input_device,
            old_is_own_tab,
            new_is_own_tab,
        ) {
            OverlapResolution::Ignore => {}
            OverlapResolution::Cancel => {
                args.cancel = true;
                args.handled = true;
                tracing::debug!(direction = ?args.direction, "Cancelled focus move between tabs");
            }
            OverlapResolution::Redirect => {
                let next = self.tree.read().find_next_element(args.direction, bounds);

                if self.router.capabilities().retarget_focus_in_handler {
                    args.try_set_new_focused_element(next);
                } else if let Some(next) = next {
                    // Focus cannot change from inside this callback here
                    self.deferred.push_back(DeferredAction::SetFocus(next));
                }
                args.handled = true;
                tracing::debug!(
                    direction = ?args.direction,
                    target = ?next,
                    "Redirected focus past the tab strip"
                );
            }
        }
    }
}
