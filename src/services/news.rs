use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{FetchNewsResponse, NewsClient};
use crate::logic::errors::FetchError;

/// Anything that can answer a news request for a country
///
/// `NewsClient` is the real implementation; tests plug in canned sources.
pub trait NewsSource: Send + Sync + 'static {
    fn fetch_news(
        &self,
        country: &str,
    ) -> impl Future<Output = Result<FetchNewsResponse, FetchError>> + Send;
}

impl NewsSource for NewsClient {
    async fn fetch_news(&self, country: &str) -> Result<FetchNewsResponse, FetchError> {
        NewsClient::fetch_news(self, country).await
    }
}

/// Requests accepted by the news service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsRequest {
    Fetch { request_id: u64, country: String },
}

/// Completed fetch, tagged with the id of the request that produced it
#[derive(Debug)]
pub struct NewsResult {
    pub request_id: u64,
    pub country: String,
    pub outcome: Result<FetchNewsResponse, FetchError>,
}

/// Spawn the news service worker
///
/// Each request runs on its own task so the receive loop never waits on the
/// network. Results come back in completion order.
pub fn spawn_news_service<S: NewsSource>(
    source: S,
) -> (
    mpsc::UnboundedSender<NewsRequest>,
    mpsc::UnboundedReceiver<NewsResult>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<NewsRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<NewsResult>();
    let source = Arc::new(source);

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let NewsRequest::Fetch {
                request_id,
                country,
            } = request;

            let source = Arc::clone(&source);
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                debug!(request_id, %country, "news request started");
                let outcome = source.fetch_news(&country).await;
                debug!(request_id, ok = outcome.is_ok(), "news request finished");

                let _ = response_tx.send(NewsResult {
                    request_id,
                    country,
                    outcome,
                });
            });
        }
        debug!("news service stopped: request channel closed");
    });

    (request_tx, response_rx)
}
