use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::model::ToastKind;
use crate::App;

impl App {
    /// Open the highlighted card's article in the external opener
    ///
    /// The opener is detached: no stdio is shared and the child is never
    /// waited on, so the article cannot talk back to the TUI.
    pub fn open_selected_link(&mut self) {
        let Some(card) = self.model.news.selected_card() else {
            return;
        };

        let Some(link) = card.link.clone() else {
            self.model
                .show_toast("This article has no valid link", ToastKind::Error);
            return;
        };

        let result = Command::new(&self.open_command)
            .arg(&link)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                info!(command = %self.open_command, %link, "opened article");
                self.model.show_toast(format!("Opened: {}", link), ToastKind::Success);
            }
            Err(e) => {
                warn!(command = %self.open_command, error = %e, "failed to open article");
                self.model.show_toast(
                    format!("Failed to open with '{}'", self.open_command),
                    ToastKind::Error,
                );
            }
        }
    }
}
