use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use crate::logic::country::country_name;
use crate::model::{FetchState, NewsModel, NewsView};

/// Status text for the bottom bar
pub fn status_text(news: &NewsModel) -> String {
    let state = match &news.fetch_state {
        FetchState::Idle => "Idle".to_string(),
        FetchState::Loading { country, .. } => format!("Loading {}", country_name(country)),
    };

    let results = match &news.view {
        NewsView::Welcome => "No results yet".to_string(),
        NewsView::Loading { .. } => "Waiting for backend".to_string(),
        NewsView::Empty => "0 articles".to_string(),
        NewsView::Failed => "Last fetch failed".to_string(),
        NewsView::Cards { cards, .. } => format!("{} articles", cards.len()),
    };

    let updated = news
        .last_updated
        .map(|t| format!("Updated {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "Never updated".to_string());

    format!(" {} │ {} │ {}", state, results, updated)
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, news: &NewsModel, palette: &Palette) {
    let line = Line::from(Span::styled(status_text(news), Style::default().fg(palette.muted)));
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_idle_status() {
        let news = NewsModel::new();
        assert_eq!(status_text(&news), " Idle │ No results yet │ Never updated");
    }

    #[test]
    fn test_loading_status() {
        let mut news = NewsModel::new();
        news.fetch_state = FetchState::Loading {
            request_id: 3,
            country: "fr".to_string(),
            started_at: Instant::now(),
        };
        assert!(status_text(&news).starts_with(" Loading France"));
    }
}
