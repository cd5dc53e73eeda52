use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::spinner_frame;
use super::theme::Palette;
use crate::logic::country::{EMPTY_SELECTION_LABEL, SUPPORTED_COUNTRIES};
use crate::model::FetchState;

/// Render the country selector with the fetch button underneath
pub fn render_selector(
    f: &mut Frame,
    area: Rect,
    selected: usize,
    fetch_state: &FetchState,
    focused: bool,
    palette: &Palette,
    elapsed_ms: u128,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let border_color = if focused { palette.accent } else { palette.border };

    let mut items = vec![ListItem::new(Span::styled(
        EMPTY_SELECTION_LABEL,
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC),
    ))];
    items.extend(SUPPORTED_COUNTRIES.iter().map(|(code, name)| {
        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", code.to_uppercase()), Style::default().fg(palette.muted)),
            Span::styled(*name, Style::default().fg(palette.fg)),
        ]))
    }));

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Country ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, chunks[0], &mut state);

    f.render_widget(build_button(fetch_state, palette, elapsed_ms), chunks[1]);
}

/// Fetch button: label and spinner follow the fetch state, dimmed while busy
fn build_button<'a>(fetch_state: &FetchState, palette: &Palette, elapsed_ms: u128) -> Paragraph<'a> {
    let label = if fetch_state.spinner_visible() {
        format!("{} {}", spinner_frame(elapsed_ms), fetch_state.button_label())
    } else {
        fetch_state.button_label().to_string()
    };

    let style = if fetch_state.button_enabled() {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::DIM)
    };

    Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        )
}
