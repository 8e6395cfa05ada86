//! JSON config file: reduced-motion preference and navigation settings.
//!
//! The file is optional; a missing or malformed file yields the defaults.
//! The reduced-motion observer re-reads it on every change notification.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Route of the first chapter, appended to `base_url`.
pub const FIRST_CHAPTER_ROUTE: &str = "/chapters/00__zigbook_introduction";

const DEFAULT_BASE_URL: &str = "https://zigbook.net";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Disable the cursor blink animation.
    pub reduce_motion: bool,
    /// Site root the chapter route is resolved against.
    pub base_url: String,
    /// When false, the chapter URL is printed instead of opened.
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            open_browser: true,
        }
    }
}

impl AppConfig {
    /// Load the config file. A missing file is not an error; a malformed
    /// file is logged and replaced by defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "malformed config file, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Absolute URL of the first chapter.
    pub fn first_chapter_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            FIRST_CHAPTER_ROUTE
        )
    }
}
