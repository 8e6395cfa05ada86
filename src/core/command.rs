//! Command table: the fixed set of inputs the landing terminal recognizes.
//!
//! Dispatch is a tagged enum with a single ordered match instead of chained
//! string comparisons, so the table stays extensible and exhaustively
//! testable.

/// The one command that actually goes somewhere.
pub const BUILD_COMMAND: &str = "zig build zigbook";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `zig build zigbook` — run the fake build and leave for chapter 0.
    Build,
    /// `clear` — wipe the scrollback.
    Clear,
    /// `help` — print the command table.
    Help,
    /// Anything else non-empty; carries the literal trimmed input.
    Unknown(String),
    /// Blank or whitespace-only submission.
    Empty,
}

impl Command {
    /// Parse a submitted line. Matching is ordered, case-sensitive, and
    /// operates on the whitespace-trimmed input.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            BUILD_COMMAND => Command::Build,
            "clear" => Command::Clear,
            "help" => Command::Help,
            "" => Command::Empty,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Build => "build",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Unknown(_) => "unknown",
            Command::Empty => "empty",
        }
    }
}
