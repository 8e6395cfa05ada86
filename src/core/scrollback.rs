//! Scrollback storage, the command interpreter that mutates it, and the pure
//! projection from stored lines to renderable lines.
//!
//! Storage is a typed sequence, not marker-prefixed strings: a `Prompt`
//! element is a command echo (or, when it is the final element, the live
//! prompt the user is typing into), an `Output` element is plain preformatted
//! text. The projection decides which element is "live"; the storage never
//! does.

use super::command::Command;

/// Initial banner shown when the terminal starts.
const WELCOME_BANNER: [&str; 5] = [
    "Welcome to Zigbook",
    "",
    "Ready to transform how you think about software?",
    "Type: zig build zigbook",
    "",
];

/// Fake build transcript appended after `zig build zigbook`.
const BUILD_TRANSCRIPT: [&str; 6] = [
    "",
    "🚀 Initializing Zigbook...",
    "📚 Loading 61 chapters...",
    "✨ Preparing your transformation...",
    "",
    "✓ Ready! Redirecting to Chapter 0...",
];

/// Help block, stored as a single multi-row element.
const HELP_TEXT: &str = "Available commands:\n  zig build zigbook  - Start your learning journey\n  help              - Show this message\n  clear             - Clear terminal";

const HINT_LINE: &str = "Try: zig build zigbook";

/// One stored scrollback element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A prompt line. All but the last are completed command echoes; the
    /// last one, if present, is the live prompt.
    Prompt(String),
    /// Plain output text. May contain `\n` (e.g. the help block).
    Output(String),
}

/// What a submission asks the host to do besides mutating the scrollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Keep running; nothing left to do.
    Stay,
    /// Schedule the one-shot navigation to the first chapter.
    Navigate,
}

/// Ordered history of terminal lines. Unbounded within a session; reset only
/// by the `clear` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrollback {
    lines: Vec<Line>,
}

impl Scrollback {
    /// Fresh scrollback holding the welcome banner and a live prompt.
    pub fn welcome() -> Self {
        let mut lines: Vec<Line> = WELCOME_BANNER
            .iter()
            .map(|text| Line::Output((*text).to_string()))
            .collect();
        lines.push(Line::Prompt(String::new()));
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn push_prompt(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Prompt(text.into()));
    }

    fn push_output(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Output(text.into()));
    }

    /// Interpret a submitted input line.
    ///
    /// Every branch is deterministic scrollback mutation; there is nothing to
    /// fail. The caller clears its input buffer unconditionally afterwards.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let command = Command::parse(raw);
        tracing::debug!(command = command.name(), "interpreting submission");

        match command {
            Command::Build => {
                let cmd = raw.trim().to_string();
                self.push_prompt(cmd);
                for text in BUILD_TRANSCRIPT {
                    self.push_output(text);
                }
                // Deliberately no fresh prompt: the session is about to leave.
                SubmitOutcome::Navigate
            }
            Command::Clear => {
                self.lines.clear();
                self.push_prompt(String::new());
                SubmitOutcome::Stay
            }
            Command::Help => {
                let cmd = raw.trim().to_string();
                self.push_prompt(cmd);
                self.push_output("");
                self.push_output(HELP_TEXT);
                self.push_output("");
                self.push_prompt(String::new());
                SubmitOutcome::Stay
            }
            Command::Unknown(cmd) => {
                self.push_prompt(cmd.clone());
                self.push_output(format!("zsh: command not found: {}", cmd));
                self.push_output("");
                self.push_output(HINT_LINE);
                self.push_prompt(String::new());
                SubmitOutcome::Stay
            }
            Command::Empty => {
                self.push_prompt(String::new());
                SubmitOutcome::Stay
            }
        }
    }
}

/// One renderable line, derived from storage plus the live input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderLine<'a> {
    /// The live prompt: marker, current input, cursor glyph.
    Live { input: &'a str, cursor_visible: bool },
    /// A completed command echo.
    Echo(&'a str),
    /// Plain output text, one display row.
    Text(&'a str),
}

/// Project stored lines plus live input state into renderable lines.
///
/// Pure function: the final `Prompt` element (if any) renders as the live
/// line from the input buffer; multi-row `Output` elements are split into
/// one `Text` per row. After a build submission the last element is output,
/// so no live line is produced.
pub fn project<'a>(
    scrollback: &'a Scrollback,
    input: &'a str,
    cursor_visible: bool,
) -> Vec<RenderLine<'a>> {
    let lines = scrollback.lines();
    let mut out = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let is_last = idx + 1 == lines.len();
        match line {
            Line::Prompt(_) if is_last => out.push(RenderLine::Live {
                input,
                cursor_visible,
            }),
            Line::Prompt(text) => out.push(RenderLine::Echo(text)),
            Line::Output(text) => {
                for row in text.split('\n') {
                    out.push(RenderLine::Text(row));
                }
            }
        }
    }

    out
}
