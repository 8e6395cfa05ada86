//! Reduced-motion observer.
//!
//! The preference lives in the config file (`reduce_motion`), with a one-time
//! env override at startup. A file watcher on the config directory delivers
//! change notifications for the lifetime of the app; dropping the observer
//! unsubscribes. Platforms without a native watcher backend fall back to the
//! polling watcher, which registers the exact same change callback.

use crate::config::AppConfig;
use crate::runtime::AppMessage;
use notify::{
    Config as NotifyConfig, Event, EventKind, PollWatcher, RecommendedWatcher, RecursiveMode,
    Watcher,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

pub const REDUCE_MOTION_ENV: &str = "ZIGBOOK_TERM_REDUCE_MOTION";

const WATCHER_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Current effective preference: env override first, then the config file,
/// then false.
pub fn effective_preference(config_path: &Path) -> bool {
    if let Some(forced) = env_override() {
        return forced;
    }
    AppConfig::load(config_path)
        .map(|config| config.reduce_motion)
        .unwrap_or(false)
}

fn env_override() -> Option<bool> {
    parse_flag(&std::env::var(REDUCE_MOTION_ENV).ok()?)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

enum WatcherBackend {
    Native(RecommendedWatcher),
    Polling(PollWatcher),
}

/// Subscription to preference changes. Holds the watcher; drop to
/// unsubscribe.
pub struct MotionObserver {
    _backend: WatcherBackend,
}

impl MotionObserver {
    /// Watch the config file's directory and post `MotionChanged` whenever
    /// the file is created, modified, or removed.
    pub fn subscribe(config_path: &Path, tx: Sender<AppMessage>) -> notify::Result<Self> {
        let watch_dir = config_path
            .parent()
            .ok_or_else(|| notify::Error::generic("config path has no parent directory"))?
            .to_path_buf();

        let backend = match RecommendedWatcher::new(
            change_handler(config_path.to_path_buf(), tx.clone()),
            NotifyConfig::default(),
        ) {
            Ok(mut watcher) => {
                watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
                WatcherBackend::Native(watcher)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "native file watcher unavailable, falling back to polling"
                );
                let mut watcher = PollWatcher::new(
                    change_handler(config_path.to_path_buf(), tx),
                    NotifyConfig::default().with_poll_interval(WATCHER_POLL_INTERVAL),
                )?;
                watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
                WatcherBackend::Polling(watcher)
            }
        };

        Ok(Self { _backend: backend })
    }
}

fn change_handler(
    config_path: PathBuf,
    tx: Sender<AppMessage>,
) -> impl FnMut(notify::Result<Event>) {
    let file_name = config_path.file_name().map(|n| n.to_os_string());

    move |res: notify::Result<Event>| {
        let Ok(event) = res else { return };
        if !matches!(
            event.kind,
            EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) {
            return;
        }
        // The whole directory is watched; only react to the config file.
        let touches_config = file_name.as_ref().map_or(true, |name| {
            event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(name.as_os_str()))
        });
        if !touches_config {
            return;
        }

        let reduce = effective_preference(&config_path);
        tracing::debug!(reduce, "reduced-motion preference re-read");
        let _ = tx.send(AppMessage::MotionChanged { reduce });
    }
}
