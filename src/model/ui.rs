//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! theme, focus, country selection, and toast notifications.

use std::time::Instant;

use super::types::{Focus, Theme, Toast, ToastKind};
use crate::logic;

/// UI preferences and transient UI state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Active colour scheme
    pub theme: Theme,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // SELECTION & FOCUS
    // ============================================
    /// Selected row of the country selector (0 = no country)
    pub country_index: usize,

    /// Pane receiving navigation keys
    pub focus: Focus,

    // ============================================
    // NOTIFICATIONS
    // ============================================
    /// Active toasts, oldest first
    pub toasts: Vec<Toast>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(theme: Theme, vim_mode: bool) -> Self {
        Self {
            theme,
            vim_mode,
            country_index: 0,
            focus: Focus::Selector,
            toasts: Vec::new(),
            should_quit: false,
        }
    }

    /// Selected country code, `None` for the empty row
    pub fn selected_country(&self) -> Option<&'static str> {
        logic::country::code_at(self.country_index)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let last = logic::country::selector_len() as isize - 1;
        let next = self.country_index as isize + delta;
        self.country_index = next.clamp(0, last) as usize;
    }

    /// Show a new toast; every call adds an independent toast
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.show_toast_at(message, kind, Instant::now());
    }

    /// Toast text is stripped of terminal control sequences
    pub fn show_toast_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.toasts.push(Toast {
            message: logic::render::sanitize_text(&message.into()),
            kind,
            created_at: now,
        });
    }

    /// Drop toasts whose fade-out has finished
    pub fn prune_toasts(&mut self, now: Instant) {
        self.toasts.retain(|toast| {
            let age = now.saturating_duration_since(toast.created_at).as_millis();
            !logic::toast::should_dismiss_toast(age)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_selection_bounds() {
        let mut ui = UiModel::new(Theme::Dark, false);
        assert_eq!(ui.selected_country(), None);

        ui.move_selection(-1);
        assert_eq!(ui.country_index, 0);

        ui.move_selection(5);
        assert_eq!(ui.selected_country(), Some("jp"));

        ui.move_selection(100);
        assert_eq!(ui.selected_country(), Some("fr"));
    }

    #[test]
    fn test_toasts_are_independent() {
        let mut ui = UiModel::new(Theme::Dark, false);
        ui.show_toast("same", ToastKind::Info);
        ui.show_toast("same", ToastKind::Info);
        assert_eq!(ui.toasts.len(), 2);
    }

    #[test]
    fn test_toast_text_is_sanitized() {
        let mut ui = UiModel::new(Theme::Dark, false);
        ui.show_toast("Failed: \u{1b}]8;;http://evil\u{7}link\u{1b}]8;;\u{7}\n\u{1b}[31mred", ToastKind::Error);
        assert_eq!(ui.toasts[0].message, "Failed: link red");
    }

    #[test]
    fn test_prune_after_fade() {
        let mut ui = UiModel::new(Theme::Dark, false);
        let start = Instant::now();
        ui.show_toast_at("old", ToastKind::Error, start);
        ui.show_toast_at("new", ToastKind::Success, start + Duration::from_millis(2000));

        ui.prune_toasts(start + Duration::from_millis(3299));
        assert_eq!(ui.toasts.len(), 2);

        ui.prune_toasts(start + Duration::from_millis(3300));
        assert_eq!(ui.toasts.len(), 1);
        assert_eq!(ui.toasts[0].message, "new");
    }
}
