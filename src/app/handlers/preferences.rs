//! Settings overlay handlers

use super::{Actions, report};
use crate::app::settings::OPACITY_STEP;
use crate::app::state::{App, SettingsItem};
use crate::session::TapeState;

impl Actions {
    /// Change the highlighted setting with Left/Right
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn adjust_setting(self, app: &mut App, forward: bool) {
        let step = i8::try_from(OPACITY_STEP).unwrap_or(i8::MAX);
        let delta = if forward { step } else { -step };
        let result = match app.settings_menu.selected_item() {
            SettingsItem::TapeColor => app.store.cycle_tape_color(forward),
            SettingsItem::CoveredOpacity => app.store.step_opacity(TapeState::Covered, delta),
            SettingsItem::PeekOpacity => app.store.step_opacity(TapeState::Peek, delta),
            SettingsItem::Theme => app.store.toggle_theme(),
            SettingsItem::ResetDefaults => return,
        };
        report(app, result);
    }

    /// Activate the highlighted setting with Enter
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn activate_setting(self, app: &mut App) {
        let result = match app.settings_menu.selected_item() {
            SettingsItem::TapeColor => app.store.cycle_tape_color(true),
            SettingsItem::Theme => app.store.toggle_theme(),
            SettingsItem::ResetDefaults => {
                let result = app.store.reset_tape_defaults();
                app.set_status("Tape defaults restored");
                result
            }
            SettingsItem::CoveredOpacity | SettingsItem::PeekOpacity => return,
        };
        report(app, result);
    }
}
