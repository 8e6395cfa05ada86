//! App orchestration: the single-threaded event loop that owns the view, the
//! blink timer, the async runtime, and the message/signal channels.
//!
//! All state transitions happen synchronously on this loop, in delivery
//! order: input events from the terminal, blink ticks, and messages posted by
//! the deferred-navigation task and the reduced-motion observer.

use crate::config::AppConfig;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::motion::MotionObserver;
use crate::runtime::{AppMessage, AsyncRuntime};
use crate::tui::blink::BlinkTimer;
use crate::tui::terminal_guard::TerminationSignal;
use crate::views::TerminalView;
use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// Delay between a recognized build command and the navigation.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(2000);

/// Upper bound on event-poll sleep, so channel messages are picked up
/// promptly even while blinking is disabled.
const IDLE_POLL: Duration = Duration::from_millis(200);

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Quit,
    /// Leave the TUI and open the first chapter.
    Navigate { url: String },
    Terminated(TerminationSignal),
}

pub struct App {
    view: TerminalView,
    blink: BlinkTimer,
    runtime: AsyncRuntime,
    messages: Receiver<AppMessage>,
    signals: Receiver<TerminationSignal>,
    config: AppConfig,
    _motion: Option<MotionObserver>,
}

impl App {
    pub fn new(
        config: AppConfig,
        reduced_motion: bool,
        runtime: AsyncRuntime,
        messages: Receiver<AppMessage>,
        signals: Receiver<TerminationSignal>,
        motion: Option<MotionObserver>,
    ) -> Self {
        Self {
            view: TerminalView::new(reduced_motion),
            blink: BlinkTimer::new(!reduced_motion, Instant::now()),
            runtime,
            messages,
            signals,
            config,
            _motion: motion,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<RunOutcome> {
        loop {
            terminal.draw(|f| self.view.render(f, f.area()))?;

            if let Some(outcome) = self.drain_messages() {
                return Ok(outcome);
            }
            if let Ok(signal) = self.signals.try_recv() {
                tracing::info!(signal = ?signal, "termination signal received");
                return Ok(RunOutcome::Terminated(signal));
            }

            let now = Instant::now();
            let timeout = self.blink.timeout(now).unwrap_or(IDLE_POLL).min(IDLE_POLL);
            if event::poll(timeout)? {
                let input: InputEvent = event::read()?.into();
                match self.handle_event(&input) {
                    EventResult::Quit => return Ok(RunOutcome::Quit),
                    EventResult::Navigate => self.schedule_navigation(),
                    _ => {}
                }
            }

            if self.blink.tick(Instant::now()) {
                self.view.toggle_cursor();
            }
        }
    }

    fn schedule_navigation(&mut self) {
        let url = self.config.first_chapter_url();
        tracing::info!(url = %url, "build command recognized, scheduling navigation");
        self.runtime.schedule_navigation(url, NAVIGATION_DELAY);
    }

    /// Drain pending channel messages; a due navigation ends the loop.
    fn drain_messages(&mut self) -> Option<RunOutcome> {
        while let Ok(message) = self.messages.try_recv() {
            match message {
                AppMessage::NavigateDue { url } => {
                    return Some(RunOutcome::Navigate { url });
                }
                AppMessage::MotionChanged { reduce } => self.apply_motion_preference(reduce),
            }
        }
        None
    }

    fn apply_motion_preference(&mut self, reduce: bool) {
        tracing::info!(reduce, "reduced-motion preference changed");
        self.view.set_reduced_motion(reduce);
        self.blink.set_enabled(!reduce, Instant::now());
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if let InputEvent::Key(key) = event {
            if let Some(result) = handle_global_key(key) {
                return result;
            }
        }
        self.view.handle_input(event)
    }

    #[cfg(test)]
    fn view(&self) -> &TerminalView {
        &self.view
    }

    #[cfg(test)]
    fn blink(&self) -> &BlinkTimer {
        &self.blink
    }
}

fn handle_global_key(event: &KeyEvent) -> Option<EventResult> {
    match (event.code, event.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(EventResult::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Sender};

    fn test_app() -> (App, Sender<AppMessage>) {
        let (message_tx, message_rx) = mpsc::channel();
        let (_signal_tx, signal_rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(message_tx.clone()).unwrap();
        let app = App::new(
            AppConfig::default(),
            false,
            runtime,
            message_rx,
            signal_rx,
            None,
        );
        (app, message_tx)
    }

    #[test]
    fn test_global_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);

        assert_eq!(handle_global_key(&ctrl_c), Some(EventResult::Quit));
        assert_eq!(handle_global_key(&ctrl_q), Some(EventResult::Quit));
        assert_eq!(handle_global_key(&plain_c), None);
    }

    #[test]
    fn test_navigate_due_ends_the_loop() {
        let (mut app, tx) = test_app();
        tx.send(AppMessage::NavigateDue {
            url: "https://zigbook.net/chapters/00__zigbook_introduction".to_string(),
        })
        .unwrap();

        assert_eq!(
            app.drain_messages(),
            Some(RunOutcome::Navigate {
                url: "https://zigbook.net/chapters/00__zigbook_introduction".to_string()
            })
        );
    }

    #[test]
    fn test_motion_change_disables_blink_and_pins_cursor() {
        let (mut app, tx) = test_app();
        assert!(app.blink().is_enabled());

        tx.send(AppMessage::MotionChanged { reduce: true }).unwrap();
        assert_eq!(app.drain_messages(), None);
        assert!(!app.blink().is_enabled());
        assert!(app.view().cursor_visible());
        assert!(app.view().reduced_motion());

        tx.send(AppMessage::MotionChanged { reduce: false }).unwrap();
        assert_eq!(app.drain_messages(), None);
        assert!(app.blink().is_enabled());
        assert!(!app.view().reduced_motion());
    }

    #[test]
    fn test_typing_routes_to_the_view() {
        let (mut app, _tx) = test_app();
        let event = InputEvent::Key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
        assert_eq!(app.handle_event(&event), EventResult::Consumed);
        assert_eq!(app.view().input(), "h");
    }

    #[test]
    fn test_build_schedules_exactly_one_navigation() {
        let (mut app, _tx) = test_app();
        for ch in "zig build zigbook".chars() {
            let event = InputEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
            app.handle_event(&event);
        }
        let enter = InputEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.handle_event(&enter), EventResult::Navigate);
        app.schedule_navigation();

        // The message arrives only after the full delay; nothing is pending
        // immediately.
        assert_eq!(app.drain_messages(), None);
    }
}
