//! TUI integration layer (crossterm + ratatui): scoped terminal acquisition
//! and the blink timer owned by the event loop.

pub mod blink;
pub mod terminal_guard;

pub use blink::{BlinkTimer, BLINK_INTERVAL};
pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
