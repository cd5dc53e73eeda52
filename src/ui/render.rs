use ratatui::{style::Style, widgets::Block, Frame};
use std::time::Instant;

use super::{cards, header, layout, legend, selector, status_bar, theme::Palette, toast};
use crate::model::{Focus, Model};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, model: &Model, now: Instant) {
    let size = f.area();
    let palette = Palette::for_theme(model.ui.theme);

    // Paint the theme background across the whole screen
    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        size,
    );

    let layout_info = layout::calculate_layout(size);

    header::render_header(f, layout_info.header_area, model.ui.theme, &palette);

    let spinner_ms = model.news.fetch_state.elapsed_ms(now);

    selector::render_selector(
        f,
        layout_info.selector_area,
        model.ui.country_index,
        &model.news.fetch_state,
        model.ui.focus == Focus::Selector,
        &palette,
        spinner_ms,
    );

    cards::render_cards(
        f,
        layout_info.cards_area,
        &model.news,
        model.ui.focus == Focus::Cards,
        &palette,
        now,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.ui.focus,
        &palette,
    );

    status_bar::render_status_bar(f, layout_info.status_area, &model.news, &palette);

    // Toasts go last so they draw over everything else
    toast::render_toasts(f, size, &model.ui.toasts, &palette, now);
}
