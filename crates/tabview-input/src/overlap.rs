//! Vertical focus moves between overlapping tab headers
//!
//! Adjacent tab headers overlap by one pixel so their separators line up.
//! Directional navigation treats the overlap as adjacency, so Up or Down
//! from one header lands on its neighbor. Those moves are intercepted.

use tabview_host::{FocusInputDevice, FocusNavigationDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapResolution {
    /// Not a header-to-header vertical move; leave it alone
    Ignore,
    /// Stay on the current header
    Cancel,
    /// Move past the tab strip in the same direction
    Redirect,
}

pub fn resolve_header_overlap(
    direction: FocusNavigationDirection,
    input_device: FocusInputDevice,
    old_is_own_tab: bool,
    new_is_own_tab: bool,
) -> OverlapResolution {
    if !direction.is_vertical() || !old_is_own_tab || !new_is_own_tab {
        return OverlapResolution::Ignore;
    }

    match input_device {
        FocusInputDevice::GameController => OverlapResolution::Redirect,
        _ => OverlapResolution::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_up_between_tabs_cancels() {
        assert_eq!(
            resolve_header_overlap(
                FocusNavigationDirection::Up,
                FocusInputDevice::Keyboard,
                true,
                true
            ),
            OverlapResolution::Cancel
        );
    }

    #[test]
    fn test_gamepad_down_between_tabs_redirects() {
        assert_eq!(
            resolve_header_overlap(
                FocusNavigationDirection::Down,
                FocusInputDevice::GameController,
                true,
                true
            ),
            OverlapResolution::Redirect
        );
    }

    #[test]
    fn test_other_moves_are_ignored() {
        assert_eq!(
            resolve_header_overlap(
                FocusNavigationDirection::Right,
                FocusInputDevice::Keyboard,
                true,
                true
            ),
            OverlapResolution::Ignore
        );
        assert_eq!(
            resolve_header_overlap(
                FocusNavigationDirection::Down,
                FocusInputDevice::Keyboard,
                true,
                false
            ),
            OverlapResolution::Ignore
        );
    }
}
