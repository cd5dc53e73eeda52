//! Colour palettes for the light and dark themes

use ratatui::style::Color;

use crate::model::{Theme, ToastKind};

/// Colours used by every pane for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                fg: Color::Rgb(0xe5, 0xe7, 0xeb),
                bg: Color::Rgb(0x11, 0x18, 0x27),
                muted: Color::Rgb(0x9c, 0xa3, 0xaf),
                accent: Color::Rgb(0x60, 0xa5, 0xfa),
                border: Color::Rgb(0x37, 0x41, 0x51),
                highlight_bg: Color::Rgb(0x1f, 0x29, 0x37),
            },
            Theme::Light => Palette {
                fg: Color::Rgb(0x1f, 0x29, 0x37),
                bg: Color::Rgb(0xf9, 0xfa, 0xfb),
                muted: Color::Rgb(0x6b, 0x72, 0x80),
                accent: Color::Rgb(0x25, 0x63, 0xeb),
                border: Color::Rgb(0xd1, 0xd5, 0xdb),
                highlight_bg: Color::Rgb(0xe5, 0xe7, 0xeb),
            },
        }
    }
}

/// Toast colour by severity
pub fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Error => Color::Rgb(0xef, 0x44, 0x44),
        ToastKind::Success => Color::Rgb(0x10, 0xb9, 0x81),
        ToastKind::Info => Color::Rgb(0x3b, 0x82, 0xf6),
    }
}
