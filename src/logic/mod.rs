//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - country: Supported countries and display names
//! - errors: Fetch error type and user-facing messages
//! - render: Article cards, sanitizing, reveal schedule
//! - theme: Startup theme resolution
//! - toast: Toast lifecycle timing

pub mod country;
pub mod errors;
pub mod render;
pub mod theme;
pub mod toast;
