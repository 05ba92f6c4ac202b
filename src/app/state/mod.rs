//! Application state
//!
//! The `App` struct holds the persisted store plus everything that only
//! lives for one terminal session: mode, selection, editor buffer and the
//! small per-overlay states.

mod editor;
mod settings_menu;

pub use editor::TextEditor;
pub use settings_menu::{SettingsItem, SettingsMenuState};

use crate::config::Config;
use crate::secret::SecretBrowserState;
use crate::store::Store;
use tracing::{debug, warn};

/// Actions that need a yes/no confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove all stored session state
    ResetAll,
}

/// Overlays drawn above the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayMode {
    /// Keybinding reference
    Help,
    /// Paste/edit a JSON deck
    JsonLoader,
    /// Display preferences
    Settings,
    /// Yes/no prompt
    Confirm(ConfirmAction),
    /// Hidden link list
    SecretBrowser,
    /// Error message, dismissed by any key
    Error(String),
}

/// Application mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Table navigation
    #[default]
    Normal,
    /// An overlay has focus
    Overlay(OverlayMode),
}

impl From<OverlayMode> for Mode {
    fn from(overlay: OverlayMode) -> Self {
        Self::Overlay(overlay)
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Session and display preferences, persisted on change
    pub store: Store,

    /// Current application mode
    pub mode: Mode,

    /// Selected row index
    pub selected: usize,

    /// JSON loader buffer
    pub input: TextEditor,

    /// Inline error under the JSON loader
    pub json_error: Option<String>,

    /// Settings overlay state
    pub settings_menu: SettingsMenuState,

    /// Link browser state
    pub secret: SecretBrowserState,

    /// Inline error in the link browser
    pub browser_error: Option<String>,

    /// Help overlay scroll offset
    pub help_scroll: usize,

    /// Message shown in the status bar
    pub status_message: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

/// Loader buffer holding the saved deck as indented JSON, empty without rows
fn saved_deck_editor(store: &Store) -> TextEditor {
    let mut editor = TextEditor::new();
    let rows = store.session().rows();
    if rows.is_empty() {
        return editor;
    }
    match serde_json::to_string_pretty(rows) {
        Ok(text) => editor.set(text),
        Err(e) => warn!(error = %e, "Failed to fill loader with saved deck"),
    }
    editor
}

impl App {
    /// Create a new application over a loaded store
    ///
    /// The JSON loader starts out holding the saved deck.
    #[must_use]
    pub fn new(config: Config, store: Store) -> Self {
        let input = saved_deck_editor(&store);
        Self {
            config,
            store,
            mode: Mode::Normal,
            selected: 0,
            input,
            json_error: None,
            settings_menu: SettingsMenuState::new(),
            secret: SecretBrowserState::new(),
            browser_error: None,
            help_scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Number of loaded rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.store.session().len()
    }

    /// Move selection to the next row, wrapping
    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Move selection to the previous row, wrapping
    pub fn select_prev(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1).min(count - 1);
        }
    }

    /// Select the first row
    pub const fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Select the last row
    pub fn select_last(&mut self) {
        self.selected = self.row_count().saturating_sub(1);
    }

    /// Enter a new mode, resetting the target overlay's transient state
    pub fn enter_mode(&mut self, mode: Mode) {
        match &mode {
            Mode::Overlay(OverlayMode::Help) => self.help_scroll = 0,
            Mode::Overlay(OverlayMode::JsonLoader) => self.json_error = None,
            Mode::Overlay(OverlayMode::Settings) => self.settings_menu.reset(),
            Mode::Overlay(OverlayMode::SecretBrowser) => {
                self.secret.reset();
                self.browser_error = None;
            }
            _ => {}
        }
        debug!(?mode, "Entering mode");
        self.mode = mode;
    }

    /// Return to normal mode
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Show an error modal
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.mode = Mode::Overlay(OverlayMode::Error(message.into()));
    }

    /// Close the error modal
    pub fn dismiss_error(&mut self) {
        if matches!(self.mode, Mode::Overlay(OverlayMode::Error(_))) {
            self.exit_mode();
        }
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
