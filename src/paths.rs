//! Platform directory resolution for config and logs.

use std::path::PathBuf;

const APP_NAME: &str = "zigbook-term";
const LOG_DIR: &str = "logs";
const CONFIG_FILE: &str = "config.json";

/// Per-user data directory for the app (logs live under it).
pub fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        data_dir_macos()
    }

    #[cfg(target_os = "linux")]
    {
        data_dir_linux()
    }

    #[cfg(target_os = "windows")]
    {
        data_dir_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Per-user config directory for the app.
pub fn get_app_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        data_dir_macos()
    }

    #[cfg(target_os = "linux")]
    {
        config_dir_linux()
    }

    #[cfg(target_os = "windows")]
    {
        data_dir_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn data_dir_macos() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn data_dir_linux() -> Option<PathBuf> {
    // XDG_DATA_HOME first, then ~/.local/share.
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg).join(APP_NAME))
    } else {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
    }
}

#[cfg(target_os = "linux")]
fn config_dir_linux() -> Option<PathBuf> {
    // XDG_CONFIG_HOME first, then ~/.config.
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg).join(APP_NAME))
    } else {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
    }
}

#[cfg(target_os = "windows")]
fn data_dir_windows() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// Path of the JSON config file; the reduced-motion observer watches its
/// parent directory.
pub fn get_config_file() -> Option<PathBuf> {
    get_app_config_dir().map(|p| p.join(CONFIG_FILE))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = get_app_config_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine config directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}
