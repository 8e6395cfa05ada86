//! zigbook-term - the Zigbook landing terminal, rendered in a real terminal
//!
//! Module structure:
//! - core: command table, scrollback + interpreter, input events, View trait
//! - views: the terminal window (scrollback, live prompt, chrome)
//! - app: single-threaded event loop orchestration
//! - runtime: deferred navigation on tokio, posting messages to the loop
//! - motion: reduced-motion preference observer (config file watcher)
//! - tui: scoped terminal acquisition and the cursor blink timer

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod motion;
pub mod paths;
pub mod runtime;
pub mod tui;
pub mod views;
