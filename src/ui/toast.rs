use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

use super::theme::{toast_color, Palette};
use crate::logic::toast::{toast_phase, ToastPhase};
use crate::model::{Toast, ToastKind};

/// Height of one toast (border, text, border)
const TOAST_HEIGHT: u16 = 3;

fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Error => "✗ ",
        ToastKind::Success => "✓ ",
        ToastKind::Info => "ℹ ",
    }
}

/// Area for the `slot`-th visible toast, stacked down from the top right
pub fn toast_area(area: Rect, message: &str, slot: u16) -> Option<Rect> {
    let max_width = area.width.min(60) as usize;
    let width = (message.width() + 6).min(max_width) as u16;
    let y = 1 + slot * TOAST_HEIGHT;

    if y + TOAST_HEIGHT > area.height || width == 0 {
        return None;
    }

    let margin = (area.width - width).min(1);
    Some(Rect {
        x: area.x + area.width - width - margin,
        y: area.y + y,
        width,
        height: TOAST_HEIGHT,
    })
}

/// Render all live toasts
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast], palette: &Palette, now: Instant) {
    let mut slot = 0;
    for toast in toasts {
        let age = now.saturating_duration_since(toast.created_at).as_millis();
        let dimmed = match toast_phase(age) {
            ToastPhase::Shown => false,
            ToastPhase::Hiding => true,
            ToastPhase::Pending | ToastPhase::Expired => continue,
        };

        let Some(toast_rect) = toast_area(area, &toast.message, slot) else {
            break;
        };
        slot += 1;

        // Clear the area first to prevent background bleed-through
        f.render_widget(Clear, toast_rect);

        let color = toast_color(toast.kind);
        let mut border_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        let mut text_style = Style::default().fg(palette.fg).bg(palette.bg);
        if dimmed {
            border_style = border_style.add_modifier(Modifier::DIM);
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let line = Line::from(vec![
            Span::styled(toast_icon(toast.kind), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(toast.message.as_str(), text_style),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(palette.bg)),
        );
        f.render_widget(paragraph, toast_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_without_overlap() {
        let screen = Rect::new(0, 0, 100, 30);
        let first = toast_area(screen, "first", 0).unwrap();
        let second = toast_area(screen, "second", 1).unwrap();
        assert!(second.y >= first.y + first.height);
        assert!(first.right() <= screen.right());
    }

    #[test]
    fn test_long_message_is_capped() {
        let screen = Rect::new(0, 0, 100, 30);
        let rect = toast_area(screen, &"x".repeat(200), 0).unwrap();
        assert_eq!(rect.width, 60);
    }

    #[test]
    fn test_no_room_for_more() {
        let screen = Rect::new(0, 0, 80, 6);
        assert!(toast_area(screen, "a", 0).is_some());
        assert!(toast_area(screen, "a", 1).is_none());
    }
}
