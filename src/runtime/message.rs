//! Messages delivered to the event loop from outside it.

pub enum AppMessage {
    /// The deferred navigation delay elapsed; leave the TUI and open `url`.
    NavigateDue { url: String },
    /// The reduced-motion preference changed.
    MotionChanged { reduce: bool },
}
