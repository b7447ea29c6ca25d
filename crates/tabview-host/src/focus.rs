//! Focus routing primitives

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusState {
    #[default]
    Unfocused,
    Pointer,
    Keyboard,
    Programmatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusNavigationDirection {
    Next,
    Previous,
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl FocusNavigationDirection {
    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            FocusNavigationDirection::Up | FocusNavigationDirection::Down
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusInputDevice {
    #[default]
    None,
    Mouse,
    Touch,
    Pen,
    Keyboard,
    GameController,
}

/// Notification that focus is about to move, raised while the move is in
/// progress. Handlers may cancel it or retarget it.
#[derive(Debug, Clone, PartialEq)]
pub struct GettingFocusEventArgs {
    pub direction: FocusNavigationDirection,
    pub input_device: FocusInputDevice,
    pub old_focused_element: Option<ElementId>,
    pub new_focused_element: Option<ElementId>,
    pub cancel: bool,
    pub handled: bool,
}

impl GettingFocusEventArgs {
    pub fn new(
        direction: FocusNavigationDirection,
        input_device: FocusInputDevice,
        old_focused_element: Option<ElementId>,
        new_focused_element: Option<ElementId>,
    ) -> Self {
        Self {
            direction,
            input_device,
            old_focused_element,
            new_focused_element,
            cancel: false,
            handled: false,
        }
    }

    /// Retarget the in-progress focus move
    pub fn try_set_new_focused_element(&mut self, element: Option<ElementId>) -> bool {
        self.new_focused_element = element;
        true
    }
}

/// Visual tree queries and programmatic focus
pub trait VisualTree: Send + Sync {
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn focused_element(&self) -> Option<ElementId>;

    /// First focusable element in the realized subtree rooted at `root`,
    /// `root` included
    fn find_first_focusable(&self, root: ElementId) -> Option<ElementId>;

    /// Next focus candidate in `direction` that lies outside `exclusion`
    fn find_next_element(
        &self,
        direction: FocusNavigationDirection,
        exclusion: Rect,
    ) -> Option<ElementId>;

    fn set_focus(&mut self, element: ElementId, state: FocusState) -> bool;
}
