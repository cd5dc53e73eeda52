//! App Orchestration
//!
//! `App` owns the model plus every handle that performs I/O (the news
//! service channels and the preference store). Methods are grouped by
//! domain in the submodules:
//! - fetch: fetch controller (validation, loading state, request dispatch)
//! - theme: theme switching and persistence
//! - links: opening article links in an external program

pub(crate) mod fetch;
pub(crate) mod links;
pub(crate) mod theme;

use std::time::Instant;
use tokio::sync::mpsc;

use crate::handlers;
use crate::model::Model;
use crate::services::{NewsRequest, NewsResult};
use crate::store::PreferenceStore;

pub struct App {
    pub model: Model,

    store: PreferenceStore,
    news_tx: mpsc::UnboundedSender<NewsRequest>,
    news_rx: mpsc::UnboundedReceiver<NewsResult>,
    open_command: String,
    next_request_id: u64,
}

impl App {
    pub fn new(
        model: Model,
        store: PreferenceStore,
        news_tx: mpsc::UnboundedSender<NewsRequest>,
        news_rx: mpsc::UnboundedReceiver<NewsResult>,
        open_command: String,
    ) -> Self {
        Self {
            model,
            store,
            news_tx,
            news_rx,
            open_command,
            next_request_id: 1,
        }
    }

    /// Process completed fetches from the news service (non-blocking)
    pub fn drain_news_results(&mut self) {
        while let Ok(result) = self.news_rx.try_recv() {
            self.handle_news_result(result);
        }
    }

    /// Handle a completed fetch
    /// Delegated to handlers::news module
    pub fn handle_news_result(&mut self, result: NewsResult) {
        handlers::handle_news_result(self, result);
    }

    /// Time-based housekeeping run once per frame
    pub fn tick(&mut self, now: Instant) {
        self.model.ui.prune_toasts(now);
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn open_command(&self) -> &str {
        &self.open_command
    }
}
