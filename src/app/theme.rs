use tracing::{debug, warn};

use crate::logic::theme::THEME_KEY;
use crate::model::Theme;
use crate::App;

impl App {
    /// Apply a theme and persist it for the next session
    pub fn set_theme(&mut self, theme: Theme) {
        self.model.ui.theme = theme;

        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!(error = %e, "failed to persist theme preference");
        } else {
            debug!(theme = theme.as_str(), "theme saved");
        }
    }

    pub fn toggle_theme(&mut self) {
        let next = self.model.ui.theme.toggled();
        self.set_theme(next);
    }
}
