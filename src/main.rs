use ratatui::prelude::*;
use std::io;
use std::sync::mpsc;

use zigbook_term::app::{App, RunOutcome};
use zigbook_term::config::AppConfig;
use zigbook_term::motion::{self, MotionObserver};
use zigbook_term::runtime::AsyncRuntime;
use zigbook_term::tui::TerminalGuard;
use zigbook_term::{logging, paths};

fn main() -> io::Result<()> {
    let _logging = logging::init();

    if let Err(e) = paths::ensure_config_dir() {
        tracing::warn!(error = %e, "cannot create config directory");
    }
    let config_path = paths::get_config_file();
    let config = match &config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let reduced_motion = match &config_path {
        Some(path) => motion::effective_preference(path),
        None => config.reduce_motion,
    };

    let (message_tx, message_rx) = mpsc::channel();
    let (signal_tx, signal_rx) = mpsc::channel();

    let runtime = AsyncRuntime::new(message_tx.clone())?;
    let observer = config_path.as_deref().and_then(|path| {
        match MotionObserver::subscribe(path, message_tx.clone()) {
            Ok(observer) => Some(observer),
            Err(e) => {
                tracing::warn!(error = %e, "reduced-motion observer unavailable");
                None
            }
        }
    });
    drop(message_tx);

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    let _signal_thread = zigbook_term::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        config.clone(),
        reduced_motion,
        runtime,
        message_rx,
        signal_rx,
        observer,
    );
    let outcome = app.run(&mut terminal);

    // Teardown order matters: dropping the app aborts any still-pending
    // navigation task; dropping the guard gives the screen back before we
    // print or open anything.
    drop(app);
    drop(guard);

    match outcome? {
        RunOutcome::Quit => Ok(()),
        RunOutcome::Navigate { url } => {
            if config.open_browser {
                println!("Opening {url}");
                if let Err(e) = open::that(&url) {
                    tracing::error!(error = %e, url = %url, "failed to open browser");
                    eprintln!("Could not open a browser. Read on at: {url}");
                }
            } else {
                println!("Continue reading at: {url}");
            }
            Ok(())
        }
        RunOutcome::Terminated(signal) => std::process::exit(signal.exit_code()),
    }
}
