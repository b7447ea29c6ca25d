//! TabView demo
//!
//! Drives a headless tab view through a short scripted session and logs
//! what the control does. An optional argument names a JSON config file.

mod shell;

use anyhow::{Context, Result};
use tabview_core::{Config, KeyChord, WidthMode};

use shell::DemoShell;

fn main() -> Result<()> {
    tabview_core::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::default(),
    };

    let mut shell = DemoShell::new(config);
    for header in ["Inbox", "Calendar", "Notes", "Reading list"] {
        shell.open(header);
    }
    shell.load();
    shell.resize(640.0);
    shell.log_state("Opened tabs");

    let next = KeyChord::parse("Ctrl+Tab").context("Invalid chord")?;
    let previous = KeyChord::parse("Ctrl+Shift+Tab").context("Invalid chord")?;
    let close = KeyChord::parse("Ctrl+F4").context("Invalid chord")?;

    shell.press(next);
    shell.press(next);
    shell.press(previous);
    shell.log_state("Cycled tabs");

    shell.press(close);
    shell.process_close_requests()?;
    shell.log_state("Closed selected tab");

    shell.resize(180.0);
    shell.log_state("Narrowed window");

    shell.set_width_mode(WidthMode::SizeToContent);
    shell.log_state("Switched to size-to-content");

    shell.drag_outside(0);
    shell.process_torn_out_tabs()?;
    shell.log_state("Dragged first tab out");

    Ok(())
}
