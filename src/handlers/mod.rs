//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - news: Completed fetches from the news service

pub mod keyboard;
pub mod news;

// Re-export for convenience
pub use keyboard::handle_key;
pub use news::handle_news_result;
