//! Link browser handlers

use super::Actions;
use crate::app::state::App;
use crate::opener;
use tracing::warn;

impl Actions {
    /// Open the highlighted link with the configured browser command.
    ///
    /// Launch failures stay inside the browser overlay.
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn open_secret_link(self, app: &mut App) {
        app.browser_error = None;
        let Some(link) = app.secret.open_highlighted() else {
            return;
        };
        if let Err(e) = opener::open_url(&app.config.browser_command, link.url) {
            warn!(error = %e, url = link.url, "Failed to open link");
            app.browser_error = Some(format!("{e:#}"));
        }
    }

    /// Leave an opened link, or close the browser from the list
    pub fn secret_back(self, app: &mut App) {
        app.browser_error = None;
        if app.secret.opened.is_some() {
            app.secret.back();
        } else {
            self.close_secret_browser(app);
        }
    }

    /// Close the link browser and forget its state
    #[expect(clippy::unused_self, reason = "consistent with other handler methods")]
    pub(crate) fn close_secret_browser(self, app: &mut App) {
        app.secret.reset();
        app.browser_error = None;
        app.exit_mode();
    }
}
