//! News Summarizer TUI
//!
//! Terminal client for a news summarization backend: pick a country, fetch
//! the top stories, read them as cards.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod store;
pub mod ui;
pub mod utils;

pub use app::App;
