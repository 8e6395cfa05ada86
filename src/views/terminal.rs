//! The landing terminal view: framed window, scrollback, live prompt.

use crate::core::event::InputEvent;
use crate::core::scrollback::{project, RenderLine, Scrollback, SubmitOutcome};
use crate::core::view::{EventResult, View};
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const WINDOW_MAX_WIDTH: u16 = 76;
const HEADER_TITLE: &str = "zsh — zigbook.net";
const HOST_MARKER: &str = "zigbook % ";
const PROMPT_MARKER: &str = "$ ";
const CURSOR_GLYPH: &str = "█";
const FOOTER_HINT: &str = "Try typing: zig build zigbook  ·  Ctrl+C to quit";

pub struct TerminalView {
    scrollback: Scrollback,
    input: String,
    cursor_visible: bool,
    reduced_motion: bool,
}

impl TerminalView {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            scrollback: Scrollback::welcome(),
            input: String::new(),
            // Permanently visible while reduced motion is active.
            cursor_visible: true,
            reduced_motion,
        }
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Blink tick from the event loop. No-op while reduced motion is active.
    pub fn toggle_cursor(&mut self) {
        if self.reduced_motion {
            return;
        }
        self.cursor_visible = !self.cursor_visible;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.cursor_visible = true;
        }
    }

    fn submit(&mut self) -> EventResult {
        let outcome = self.scrollback.submit(&self.input);
        // Cleared on every submission, valid or not.
        self.input.clear();
        match outcome {
            SubmitOutcome::Stay => EventResult::Consumed,
            SubmitOutcome::Navigate => EventResult::Navigate,
        }
    }

    fn push_text(&mut self, text: &str) {
        // Input buffer invariant: never contains a newline.
        for ch in text.chars() {
            if ch == '\n' || ch == '\r' || ch.is_control() {
                continue;
            }
            self.input.push(ch);
        }
    }

    fn render_window(&self, frame: &mut Frame, area: Rect) {
        let window = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = window.inner(area);
        frame.render_widget(window, area);

        if inner.height < 2 {
            return;
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        self.render_header(frame, chunks[0]);
        self.render_scrollback(frame, chunks[1]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::styled("● ", Style::default().fg(Color::Yellow)),
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::raw("  "),
            Span::styled(HEADER_TITLE, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_scrollback(&self, frame: &mut Frame, area: Rect) {
        let rows = self.display_rows(area.width);

        // Bottom-anchored like a real terminal: drop rows that scrolled off.
        let height = area.height as usize;
        let skip = rows.len().saturating_sub(height);
        let visible: Vec<Line> = rows.into_iter().skip(skip).collect();

        frame.render_widget(Paragraph::new(visible), area);
    }

    fn display_rows(&self, width: u16) -> Vec<Line> {
        let marker_style = Style::default().fg(Color::DarkGray);
        let prompt_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);

        project(&self.scrollback, &self.input, self.cursor_visible)
            .into_iter()
            .map(|line| match line {
                RenderLine::Live {
                    input,
                    cursor_visible,
                } => {
                    let used = HOST_MARKER.width() + PROMPT_MARKER.width() + 1;
                    let avail = (width as usize).saturating_sub(used);
                    let mut spans = vec![
                        Span::styled(HOST_MARKER, marker_style),
                        Span::styled(PROMPT_MARKER, prompt_style),
                        Span::raw(fit_tail(input, avail).to_string()),
                    ];
                    if cursor_visible {
                        spans.push(Span::styled(CURSOR_GLYPH, prompt_style));
                    }
                    Line::from(spans)
                }
                RenderLine::Echo(text) => Line::from(vec![
                    Span::styled(HOST_MARKER, marker_style),
                    Span::styled(format!("{}{}", PROMPT_MARKER, text), prompt_style),
                ]),
                RenderLine::Text(text) => Line::from(Span::raw(text.to_string())),
            })
            .collect()
    }
}

impl View for TerminalView {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return EventResult::Ignored;
                }
                match key.code {
                    KeyCode::Enter => self.submit(),
                    KeyCode::Backspace => {
                        self.input.pop();
                        EventResult::Consumed
                    }
                    KeyCode::Char(ch)
                        if key
                            .modifiers
                            .difference(KeyModifiers::SHIFT)
                            .is_empty() =>
                    {
                        self.input.push(ch);
                        EventResult::Consumed
                    }
                    _ => EventResult::Ignored,
                }
            }
            InputEvent::Paste(text) => {
                self.push_text(text);
                EventResult::Consumed
            }
            InputEvent::Resize(_, _) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.render_window(frame, centered(chunks[0], WINDOW_MAX_WIDTH));

        let footer = Paragraph::new(Span::styled(
            FOOTER_HINT,
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }
}

/// Horizontally center a window of at most `max_width` columns.
fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Keep the tail of `input` that fits in `max_cols` display columns, so the
/// cursor end of a long line stays visible.
fn fit_tail(input: &str, max_cols: usize) -> &str {
    if input.width() <= max_cols {
        return input;
    }

    let mut cols = 0;
    let mut start = input.len();
    for (idx, ch) in input.char_indices().rev() {
        cols += ch.width().unwrap_or(0);
        if cols > max_cols {
            break;
        }
        start = idx;
    }
    &input[start..]
}
