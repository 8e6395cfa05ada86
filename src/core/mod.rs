//! Core abstractions of the landing terminal:
//! - Command: the fixed command table and its parser
//! - Scrollback: typed line storage, interpreter, and render projection
//! - Event: backend-independent input events
//! - View: the render/input seam between app loop and components

pub mod command;
pub mod event;
pub mod scrollback;
pub mod view;

pub use command::{Command, BUILD_COMMAND};
pub use event::InputEvent;
pub use scrollback::{project, Line, RenderLine, Scrollback, SubmitOutcome};
pub use view::{EventResult, View};
