use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the country selector pane
const SELECTOR_WIDTH: u16 = 30;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar
    pub header_area: Rect,
    /// Country selector and fetch button
    pub selector_area: Rect,
    /// Article cards / placeholders
    pub cards_area: Rect,
    /// Hotkey legend
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (top border, title, bottom border)
            Constraint::Min(5),    // Selector + cards
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Status bar
        ])
        .split(terminal_size);

    // Narrow terminals give the selector at most half the width
    let selector_width = SELECTOR_WIDTH.min(terminal_size.width / 2);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(selector_width), Constraint::Min(10)])
        .split(main_chunks[1]);

    LayoutInfo {
        header_area: main_chunks[0],
        selector_area: content_chunks[0],
        cards_area: content_chunks[1],
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_screen() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(info.header_area.height, 3);
        assert_eq!(info.legend_area.height, 1);
        assert_eq!(info.status_area.height, 1);
        assert_eq!(info.selector_area.width, 30);
        assert_eq!(info.cards_area.width, 70);
        assert_eq!(info.cards_area.height, 35);
    }

    #[test]
    fn test_narrow_terminal() {
        let info = calculate_layout(Rect::new(0, 0, 40, 20));
        assert_eq!(info.selector_area.width, 20);
    }
}
