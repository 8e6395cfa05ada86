//! Async side of the app: deferred work posts messages back to the
//! single-threaded event loop through an mpsc channel.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::AsyncRuntime;
