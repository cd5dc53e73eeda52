//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NewsModel**: fetch state machine and the results pane
//! - **UiModel**: theme, focus, country selection, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state in tests
//! - No services: All I/O lives in `App`
//! - Pure accessors: Helper methods are side-effect free

pub mod news;
pub mod types;
pub mod ui;

pub use news::{Card, FetchState, NewsModel, NewsView};
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Fetch cycle and results
    pub news: NewsModel,

    /// UI preferences and notifications
    pub ui: UiModel,
}

impl Model {
    pub fn new(theme: Theme, vim_mode: bool) -> Self {
        Self {
            news: NewsModel::new(),
            ui: UiModel::new(theme, vim_mode),
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.ui.show_toast(message, kind);
    }

    pub fn is_loading(&self) -> bool {
        self.news.fetch_state.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(Theme::Light, false);
        assert_eq!(model.news.fetch_state, FetchState::Idle);
        assert_eq!(model.news.view, NewsView::Welcome);
        assert_eq!(model.ui.theme, Theme::Light);
        assert!(model.ui.toasts.is_empty());
        assert!(!model.is_loading());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(Theme::Dark, true);
        let cloned = model.clone();
        assert!(cloned.ui.vim_mode);
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new(Theme::Dark, false);
        model.show_toast("Test", ToastKind::Info);
        assert_eq!(model.ui.toasts.len(), 1);
        assert_eq!(model.ui.toasts[0].kind, ToastKind::Info);
    }
}
