//! External Services
//!
//! Background workers that talk to external systems:
//! - news: executes backend fetch requests off the UI loop

pub mod news;

pub use news::{spawn_news_service, NewsRequest, NewsResult, NewsSource};
