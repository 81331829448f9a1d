//! Slatedeck application shell.
//!
//! Headless wiring around the core: keyboard shortcuts, command dispatch,
//! and autosave. A GUI front end would sit on top of this crate, feeding
//! pointer and key events into the session.

mod commands;
mod shortcuts;

pub use commands::{EditorCommand, apply, map_key};
pub use shortcuts::{Shortcut, ShortcutRegistry};
