//! Deck loading, answer clearing and reset

use super::{Actions, report};
use crate::app::state::{App, OverlayMode};
use crate::store::ApplyOutcome;
use tracing::{debug, warn};

impl Actions {
    /// Submit the JSON loader buffer.
    ///
    /// A rejected deck keeps the loader open with the error shown inline.
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn apply_json_input(self, app: &mut App) {
        app.json_error = None;
        let text = app.input.text().to_string();
        match app.store.apply_json(&text) {
            Ok(ApplyOutcome::Secret) => {
                app.enter_mode(OverlayMode::SecretBrowser.into());
            }
            Ok(ApplyOutcome::Loaded(count)) => {
                app.exit_mode();
                app.selected = 0;
                app.set_status(format!(
                    "Loaded {count} {}",
                    if count == 1 { "row" } else { "rows" }
                ));
            }
            Ok(ApplyOutcome::Rejected(e)) => {
                debug!(error = %e, "Deck rejected");
                app.json_error = Some(e.to_string());
            }
            Err(e) => {
                // The deck is in memory even though it was not saved
                app.selected = 0;
                warn!(error = %e, "Failed to save deck");
                app.set_error(format!("{e:#}"));
            }
        }
    }

    /// Empty the JSON loader buffer
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn clear_json_input(self, app: &mut App) {
        app.input.clear();
        app.json_error = None;
    }

    /// Unset every answer
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn clear_answers(self, app: &mut App) {
        let result = app.store.clear_answers();
        report(app, result);
        app.set_status("Answers cleared");
    }

    /// Drop the deck, answers, cover and tapes
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn reset_all(self, app: &mut App) {
        let result = app.store.reset_all();
        app.input.clear();
        app.json_error = None;
        app.selected = 0;
        report(app, result);
        app.set_status("Reset complete");
    }
}
