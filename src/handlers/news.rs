//! News Result Handler
//!
//! Finishes a fetch cycle when the news service reports back.

use std::time::Instant;
use tracing::{debug, error, info};

use crate::logic::errors::format_error_message;
use crate::logic::render::display_news;
use crate::model::{FetchState, NewsView, ToastKind};
use crate::services::NewsResult;
use crate::App;

/// Handle a completed fetch from the news service
///
/// Results that do not belong to the in-flight request are dropped. For the
/// in-flight request the view becomes the cards (or the empty placeholder)
/// on success, and the failure placeholder plus an error toast otherwise.
/// Either way the controller returns to idle.
pub fn handle_news_result(app: &mut App, result: NewsResult) {
    if app.model.news.fetch_state.request_id() != Some(result.request_id) {
        debug!(
            request_id = result.request_id,
            country = %result.country,
            "dropping stale news result"
        );
        return;
    }

    match result.outcome {
        Ok(response) => {
            let count = response.news.as_ref().map_or(0, Vec::len);
            info!(country = %result.country, count, "news fetched");
            app.model.news.view = display_news(response.news.as_deref(), Instant::now());
        }
        Err(e) => {
            error!(
                country = %result.country,
                kind = ?e.kind(),
                status = ?e.status(),
                error = %e,
                "error fetching news"
            );
            app.model.show_toast(format_error_message(&e), ToastKind::Error);
            app.model.news.view = NewsView::Failed;
        }
    }

    app.model.news.fetch_state = FetchState::Idle;
    app.model.news.card_cursor = 0;
    app.model.news.last_updated = Some(chrono::Local::now());
}
