// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, panes, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Title bar with the theme toggle icon
// - selector: Country list and fetch button
// - cards: Article cards and result placeholders
// - legend: Hotkey legend
// - status_bar: Fetch state and last update time
// - toast: Stacked toast notifications
// - theme: Light/dark colour palettes

pub mod cards;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod selector;
pub mod status_bar;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for the given elapsed time (80ms per frame)
pub fn spinner_frame(elapsed_ms: u128) -> &'static str {
    SPINNER_FRAMES[(elapsed_ms / 80) as usize % SPINNER_FRAMES.len()]
}
