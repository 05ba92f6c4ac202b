//! Action handlers for the application
//!
//! This module contains the `Actions` struct and all action handlers,
//! organized into focused submodules by domain.

mod deck;
mod preferences;
mod secret;

#[cfg(test)]
mod tests;

use crate::config::Action;
use crate::session::AnswerMark;
use crate::store::ColumnSide;
use anyhow::Result;
use tracing::warn;

use super::state::{App, ConfirmAction, Mode, OverlayMode};

/// Handler for application actions
#[derive(Debug, Default, Clone, Copy)]
pub struct Actions;

/// Surface a failed store write in the error modal. The in-memory change
/// has already been applied.
pub(super) fn report(app: &mut App, result: Result<()>) {
    if let Err(e) = result {
        warn!(error = %e, "Failed to persist change");
        app.set_error(format!("{e:#}"));
    }
}

impl Actions {
    /// Create a new action handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handle a keybinding action
    pub fn handle_action(self, app: &mut App, action: Action) {
        match action {
            Action::OpenJsonLoader => {
                app.enter_mode(OverlayMode::JsonLoader.into());
            }
            Action::ClearAnswers => self.clear_answers(app),
            Action::ResetAll => {
                app.enter_mode(OverlayMode::Confirm(ConfirmAction::ResetAll).into());
            }
            Action::Settings => {
                app.enter_mode(OverlayMode::Settings.into());
            }
            Action::CycleTape => {
                let index = app.selected;
                let result = app.store.cycle_tape(index).map(drop);
                report(app, result);
            }
            Action::MarkKnown => self.mark_selected(app, AnswerMark::Known),
            Action::MarkUnknown => self.mark_selected(app, AnswerMark::Unknown),
            Action::ToggleCoverAll => {
                let result = app.store.toggle_cover_all();
                report(app, result);
            }
            Action::SwitchTapes => {
                if !app.store.session().is_empty() {
                    let result = app.store.switch_tapes();
                    report(app, result);
                }
            }
            Action::SwapColumns => {
                let result = app.store.swap_columns();
                report(app, result);
            }
            Action::CycleLeftColumn => self.cycle_column(app, ColumnSide::Left),
            Action::CycleRightColumn => self.cycle_column(app, ColumnSide::Right),
            Action::NextRow => app.select_next(),
            Action::PrevRow => app.select_prev(),
            Action::ScrollTop => app.select_first(),
            Action::ScrollBottom => app.select_last(),
            Action::Help => {
                app.enter_mode(OverlayMode::Help.into());
            }
            Action::Quit => {
                app.should_quit = true;
            }
        }
    }

    /// Toggle the selected row's answer
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn mark_selected(self, app: &mut App, mark: AnswerMark) {
        let index = app.selected;
        let result = app.store.set_answer(index, mark).map(drop);
        report(app, result);
    }

    /// Step the field shown on one side
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn cycle_column(self, app: &mut App, side: ColumnSide) {
        match app.store.cycle_column(side, true) {
            Ok(true) => {
                let settings = app.store.settings();
                let key = match side {
                    ColumnSide::Left => &settings.left_key,
                    ColumnSide::Right => &settings.right_key,
                };
                let message = format!("{} column: {key}", side.label());
                app.set_status(message);
            }
            Ok(false) => app.set_status("Load a deck with at least two fields"),
            Err(e) => report(app, Err(e)),
        }
    }

    /// Run the pending confirmation
    pub fn handle_confirm(self, app: &mut App) {
        if let Mode::Overlay(OverlayMode::Confirm(action)) = app.mode {
            app.exit_mode();
            match action {
                ConfirmAction::ResetAll => self.reset_all(app),
            }
        }
    }
}
