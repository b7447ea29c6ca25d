//! TabView Keyboard and Focus Navigation
//!
//! Supported chords:
//! - `Ctrl+F4` : close the selected tab
//! - `Ctrl+Tab` : select the next tab, wrapping
//! - `Ctrl+Shift+Tab` : select the previous tab, wrapping
//!
//! Platforms with native accelerator support get them registered as
//! accelerators; elsewhere the same chords are matched in key-down. A chord
//! is routed one way or the other, never both.

mod command;
mod overlap;
mod routing;

pub use command::{cycle_index, KeyChord, Modifiers, TabCommand, VirtualKey};
pub use overlap::{resolve_header_overlap, OverlapResolution};
pub use routing::{CommandRouter, KeyRoutedEventArgs, KeyboardAccelerator, PlatformCapabilities};
