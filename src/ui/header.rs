use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::model::Theme;

/// Render the title bar with the theme toggle icon on the right
pub fn render_header(f: &mut Frame, area: Rect, theme: Theme, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            " News Summarizer",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  top stories by country", Style::default().fg(palette.muted)),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let toggle = Line::from(vec![
        Span::styled("t ", Style::default().fg(palette.muted)),
        Span::styled(
            theme.toggle_icon(),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ])
    .right_aligned();
    f.render_widget(Paragraph::new(toggle), chunks[1]);
}
