//! Tab commands and key chords

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabCommand {
    /// Request closing the selected tab
    CloseCurrentTab,
    SelectNextTab,
    SelectPreviousTab,
}

impl TabCommand {
    /// Selection step for the cycling commands
    pub fn step(&self) -> Option<i32> {
        match self {
            TabCommand::CloseCurrentTab => None,
            TabCommand::SelectNextTab => Some(1),
            TabCommand::SelectPreviousTab => Some(-1),
        }
    }

    /// Chord the command is bound to
    pub fn chord(&self) -> KeyChord {
        match self {
            TabCommand::CloseCurrentTab => KeyChord::new(VirtualKey::F4, Modifiers::CONTROL),
            TabCommand::SelectNextTab => KeyChord::new(VirtualKey::Tab, Modifiers::CONTROL),
            TabCommand::SelectPreviousTab => {
                KeyChord::new(VirtualKey::Tab, Modifiers::CONTROL_SHIFT)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VirtualKey {
    Tab,
    F4,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    /// Any key the control has no binding for
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        shift: false,
        alt: false,
    };
    pub const CONTROL: Modifiers = Modifiers {
        control: true,
        shift: false,
        alt: false,
    };
    pub const CONTROL_SHIFT: Modifiers = Modifiers {
        control: true,
        shift: true,
        alt: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: VirtualKey,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: VirtualKey, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Parse a chord such as `Ctrl+Shift+Tab`
    pub fn parse(input: &str) -> Option<Self> {
        let mut modifiers = Modifiers::NONE;
        let mut key = None;

        for part in input.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.control = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                "tab" => key = Some(VirtualKey::Tab),
                "f4" => key = Some(VirtualKey::F4),
                "up" => key = Some(VirtualKey::Up),
                "down" => key = Some(VirtualKey::Down),
                "left" => key = Some(VirtualKey::Left),
                "right" => key = Some(VirtualKey::Right),
                "enter" => key = Some(VirtualKey::Enter),
                "esc" | "escape" => key = Some(VirtualKey::Escape),
                _ => return None,
            }
        }

        key.map(|key| Self { key, modifiers })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.control {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift+")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt+")?;
        }
        match self.key {
            VirtualKey::Other(code) => write!(f, "Key{}", code),
            key => write!(f, "{:?}", key),
        }
    }
}

/// Index `step` positions from `current` in a ring of `count` tabs.
///
/// Needs more than one tab. With nothing selected the ring is entered from
/// just before index 0.
pub fn cycle_index(current: Option<usize>, step: i32, count: usize) -> Option<usize> {
    if count <= 1 {
        return None;
    }

    let count = count as i64;
    let current = current.map(|i| i as i64).unwrap_or(-1);
    Some((current + step as i64).rem_euclid(count) as usize)
}
