use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

use super::spinner_frame;
use super::theme::Palette;
use crate::logic::render::{self, EMPTY_MESSAGE, FAILED_MESSAGE};
use crate::model::{Card, NewsModel, NewsView};
use crate::utils::truncate_chars;

/// Rows taken by one card (borders, title, two summary lines, image, link)
pub const CARD_HEIGHT: u16 = 7;

/// Render the results pane: a placeholder or the article cards
///
/// The card cursor is only highlighted while the pane has focus.
pub fn render_cards(
    f: &mut Frame,
    area: Rect,
    news: &NewsModel,
    focused: bool,
    palette: &Palette,
    now: Instant,
) {
    let cursor = focused.then_some(news.card_cursor);

    let border_color = if focused { palette.accent } else { palette.border };
    let block = Block::default()
        .title(" Headlines ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &news.view {
        NewsView::Welcome => render_placeholder(
            f,
            inner,
            "◆",
            "Pick a country and press Enter to fetch headlines",
            palette,
        ),
        NewsView::Loading { country_name } => {
            let frame = spinner_frame(news.fetch_state.elapsed_ms(now));
            render_placeholder(f, inner, frame, &render::loading_message(country_name), palette)
        }
        NewsView::Empty => render_placeholder(f, inner, "▤", EMPTY_MESSAGE, palette),
        NewsView::Failed => render_placeholder(f, inner, "⚠", FAILED_MESSAGE, palette),
        NewsView::Cards { cards, revealed_at } => {
            let elapsed = now.saturating_duration_since(*revealed_at).as_millis();
            let visible = render::visible_cards(elapsed, cards.len());
            render_card_list(f, inner, &cards[..visible], cursor, palette);
        }
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, icon: &str, message: &str, palette: &Palette) {
    let top = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(icon.to_string(), Style::default().fg(palette.accent)));
    lines.push(Line::styled(message.to_string(), Style::default().fg(palette.muted)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_card_list(
    f: &mut Frame,
    area: Rect,
    cards: &[Card],
    cursor: Option<usize>,
    palette: &Palette,
) {
    let per_page = (area.height / CARD_HEIGHT).max(1) as usize;
    let start = first_visible_card(cursor.unwrap_or(0), per_page);
    let shown = &cards[start.min(cards.len())..];

    let constraints: Vec<Constraint> = shown
        .iter()
        .take(per_page)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (offset, card) in shown.iter().take(per_page).enumerate() {
        let index = start + offset;
        let selected = cursor == Some(index);
        render_card(f, chunks[offset], card, index, cards.len(), selected, palette);
    }
}

/// First card index to draw so that `cursor` stays on screen
pub fn first_visible_card(cursor: usize, per_page: usize) -> usize {
    cursor.saturating_sub(per_page.saturating_sub(1))
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &Card,
    index: usize,
    total: usize,
    selected: bool,
    palette: &Palette,
) {
    let border_style = if selected {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .title(format!(" {}/{} ", index + 1, total))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let link_line = match &card.link {
        Some(link) => Line::from(vec![
            Span::styled("↗ Read full article ", Style::default().fg(palette.accent)),
            Span::styled(
                truncate_chars(link, width.saturating_sub(20)),
                Style::default().fg(palette.muted),
            ),
        ]),
        None => Line::styled("Link unavailable", Style::default().fg(palette.muted)),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::styled(
            truncate_chars(&card.title, width),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(card.summary.clone())
            .style(Style::default().fg(palette.fg))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(Line::styled(
            format!("▣ {}", truncate_chars(&card.image_src, width.saturating_sub(2))),
            Style::default().fg(palette.muted),
        )),
        chunks[2],
    );
    f.render_widget(Paragraph::new(link_line), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_card() {
        assert_eq!(first_visible_card(0, 3), 0);
        assert_eq!(first_visible_card(2, 3), 0);
        assert_eq!(first_visible_card(3, 3), 1);
        assert_eq!(first_visible_card(4, 1), 4);
        assert_eq!(first_visible_card(4, 0), 4);
    }
}
