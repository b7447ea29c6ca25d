//! Capability-gated command routing

use serde::{Deserialize, Serialize};

use crate::command::{KeyChord, Modifiers, TabCommand, VirtualKey};

/// What the platform's input stack supports, resolved once per control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformCapabilities {
    /// Keyboard accelerators exist at all (needed for Ctrl+F4)
    pub keyboard_accelerators: bool,
    /// Accelerators fire for Tab chords (needed for Ctrl+Tab)
    pub tab_key_accelerators: bool,
    /// A focus move can be retargeted from inside the getting-focus handler
    pub retarget_focus_in_handler: bool,
}

impl PlatformCapabilities {
    /// A platform with none of the above
    pub fn legacy() -> Self {
        Self {
            keyboard_accelerators: false,
            tab_key_accelerators: false,
            retarget_focus_in_handler: false,
        }
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self {
            keyboard_accelerators: true,
            tab_key_accelerators: true,
            retarget_focus_in_handler: true,
        }
    }
}

/// Declarative accelerator registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardAccelerator {
    pub chord: KeyChord,
    pub command: TabCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRoutedEventArgs {
    pub key: VirtualKey,
    /// Modifier keys held when the key went down
    pub modifiers: Modifiers,
    pub handled: bool,
}

impl KeyRoutedEventArgs {
    pub fn new(key: VirtualKey, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            handled: false,
        }
    }
}

/// Decides, per command, whether it arrives as an accelerator or from
/// key-down handling.
#[derive(Debug, Clone)]
pub struct CommandRouter {
    capabilities: PlatformCapabilities,
    accelerators: Vec<KeyboardAccelerator>,
}

impl CommandRouter {
    pub fn new(capabilities: PlatformCapabilities) -> Self {
        let mut accelerators = Vec::new();

        if capabilities.keyboard_accelerators {
            accelerators.push(Self::accelerator(TabCommand::CloseCurrentTab));
        }
        if capabilities.tab_key_accelerators {
            accelerators.push(Self::accelerator(TabCommand::SelectNextTab));
            accelerators.push(Self::accelerator(TabCommand::SelectPreviousTab));
        }

        tracing::debug!(
            accelerators = accelerators.len(),
            "Resolved keyboard command routing"
        );

        Self {
            capabilities,
            accelerators,
        }
    }

    pub fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    /// Accelerators to register with the platform
    pub fn accelerators(&self) -> &[KeyboardAccelerator] {
        &self.accelerators
    }

    /// Command for an accelerator the platform reports as invoked
    pub fn from_accelerator(&self, chord: KeyChord) -> Option<TabCommand> {
        self.accelerators
            .iter()
            .find(|accel| accel.chord == chord)
            .map(|accel| accel.command)
    }

    /// Command for a key-down the control receives directly. Chords routed
    /// through accelerators are not matched here.
    pub fn from_key_down(&self, args: &KeyRoutedEventArgs) -> Option<TabCommand> {
        let control = args.modifiers.control;
        let shift = args.modifiers.shift;

        let command = match args.key {
            VirtualKey::F4 if control => TabCommand::CloseCurrentTab,
            VirtualKey::Tab if control && !shift => TabCommand::SelectNextTab,
            VirtualKey::Tab if control && shift => TabCommand::SelectPreviousTab,
            _ => return None,
        };

        if self.is_accelerated(command) {
            None
        } else {
            Some(command)
        }
    }

    fn is_accelerated(&self, command: TabCommand) -> bool {
        self.accelerators.iter().any(|accel| accel.command == command)
    }

    fn accelerator(command: TabCommand) -> KeyboardAccelerator {
        KeyboardAccelerator {
            chord: command.chord(),
            command,
        }
    }
}
