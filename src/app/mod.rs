//! Application state and logic

mod event;
mod handlers;
pub mod settings;
mod state;

pub use event::{Event, Handler};
pub use handlers::Actions;
pub use settings::{Settings, TapeColor, ThemeMode};
pub use state::{
    App, ConfirmAction, Mode, OverlayMode, SettingsItem, SettingsMenuState, TextEditor,
};
