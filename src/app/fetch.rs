use std::time::Instant;
use tracing::{debug, info};

use crate::logic::country::country_name;
use crate::logic::errors::FetchError;
use crate::model::{FetchState, NewsView, ToastKind};
use crate::services::{NewsRequest, NewsResult};
use crate::App;

impl App {
    /// Start a fetch for the selected country
    ///
    /// Returns `true` when a request was handed to the news service. An empty
    /// selection or a fetch already in flight is reported with a toast
    /// instead.
    pub fn fetch_news(&mut self) -> bool {
        let Some(country) = self.model.ui.selected_country() else {
            self.model.show_toast("Please select a country", ToastKind::Error);
            return false;
        };

        if self.model.is_loading() {
            debug!(%country, "fetch rejected: request already in flight");
            self.model.show_toast("Already fetching news...", ToastKind::Info);
            return false;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.model.news.fetch_state = FetchState::Loading {
            request_id,
            country: country.to_string(),
            started_at: Instant::now(),
        };
        self.model.news.view = NewsView::Loading {
            country_name: country_name(country),
        };
        self.model.news.card_cursor = 0;

        info!(request_id, %country, "fetching news");

        let request = NewsRequest::Fetch {
            request_id,
            country: country.to_string(),
        };
        if self.news_tx.send(request).is_err() {
            // No worker to answer, so finish the cycle here
            self.handle_news_result(NewsResult {
                request_id,
                country: country.to_string(),
                outcome: Err(FetchError::ServiceUnavailable),
            });
            return false;
        }

        true
    }
}
