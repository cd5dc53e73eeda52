use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use crate::model::Focus;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, focus: Focus, palette: &Palette) -> Vec<Span<'static>> {
    let key = Style::default().fg(palette.accent);
    let text = Style::default().fg(palette.muted);
    let nav = if vim_mode { "j/k" } else { "↑/↓" };

    let mut spans = vec![Span::styled(nav, key)];
    match focus {
        Focus::Selector => {
            spans.push(Span::styled(":Country  ", text));
            spans.push(Span::styled("Enter", key));
            spans.push(Span::styled(":Fetch  ", text));
        }
        Focus::Cards => {
            spans.push(Span::styled(":Article  ", text));
            spans.push(Span::styled("Enter/o", key));
            spans.push(Span::styled(":Open  ", text));
        }
    }

    spans.extend(vec![
        Span::styled("f", key),
        Span::styled(":Fetch  ", text),
        Span::styled("Tab", key),
        Span::styled(":Switch pane  ", text),
        Span::styled("t", key),
        Span::styled(":Theme  ", text),
        Span::styled("q", key),
        Span::styled(":Quit", text),
    ]);

    spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, focus: Focus, palette: &Palette) {
    let line = Line::from(build_hotkey_spans(vim_mode, focus, palette));
    f.render_widget(Paragraph::new(line), area);
}
