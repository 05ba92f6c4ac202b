//! Where vocabtape keeps its files.
//!
//! Directories are resolved from environment variables only. Empty
//! variables count as unset.

use std::ffi::OsString;
use std::path::PathBuf;

/// Directory name used under the platform data and config roots.
pub const APP_DIR: &str = "vocabtape";

const LOG_FILE: &str = "vocabtape.log";

/// Path to the debug log file, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Platform roots looked up through `var_os`.
struct Roots<F> {
    var_os: F,
}

impl<F: Fn(&str) -> Option<OsString>> Roots<F> {
    fn var(&self, key: &str) -> Option<PathBuf> {
        (self.var_os)(key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    #[cfg(not(windows))]
    fn home(&self) -> Option<PathBuf> {
        self.var("HOME")
    }

    /// `xdg_var` if set, else `unix_fallback` under the home directory.
    /// macOS keeps both data and config in Application Support.
    #[cfg(not(windows))]
    fn xdg(&self, xdg_var: &str, unix_fallback: &[&str]) -> Option<PathBuf> {
        self.var(xdg_var).or_else(|| {
            self.home().map(|home| {
                if cfg!(target_os = "macos") {
                    home.join("Library").join("Application Support")
                } else {
                    unix_fallback.iter().fold(home, |dir, part| dir.join(part))
                }
            })
        })
    }

    #[cfg(windows)]
    fn data_local(&self) -> Option<PathBuf> {
        self.var("LOCALAPPDATA").or_else(|| self.var("APPDATA"))
    }

    #[cfg(not(windows))]
    fn data_local(&self) -> Option<PathBuf> {
        self.xdg("XDG_DATA_HOME", &[".local", "share"])
    }

    #[cfg(windows)]
    fn config(&self) -> Option<PathBuf> {
        self.var("APPDATA")
    }

    #[cfg(not(windows))]
    fn config(&self) -> Option<PathBuf> {
        self.xdg("XDG_CONFIG_HOME", &[".config"])
    }
}

fn process_roots() -> Roots<impl Fn(&str) -> Option<OsString>> {
    Roots {
        var_os: |key: &str| std::env::var_os(key),
    }
}

/// Per-user local data directory (`$XDG_DATA_HOME`, `~/.local/share`,
/// `%LOCALAPPDATA%`).
#[must_use]
pub fn data_local_dir() -> Option<PathBuf> {
    process_roots().data_local()
}

/// Per-user configuration directory (`$XDG_CONFIG_HOME`, `~/.config`,
/// `%APPDATA%`).
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    process_roots().config()
}
