//! Theme preference resolution
//!
//! Pure functions deciding which theme to start with.

use crate::model::Theme;

/// Preference store key holding the theme
pub const THEME_KEY: &str = "theme";

/// Decide whether the terminal prefers a dark scheme from `COLORFGBG`
///
/// `COLORFGBG` is `"<fg>;<bg>"` (sometimes with a middle field). The last
/// field is the background colour index: 0-6 and 8 are dark colours in the
/// standard 16-colour palette, anything else is light. Without a usable
/// value we assume dark, which is what most terminals ship with.
///
/// # Examples
/// ```
/// use newstui::logic::theme::prefers_dark;
///
/// assert!(prefers_dark(Some("15;0")));
/// assert!(!prefers_dark(Some("0;15")));
/// assert!(prefers_dark(None));
/// ```
pub fn prefers_dark(colorfgbg: Option<&str>) -> bool {
    let Some(bg) = colorfgbg.and_then(|v| v.rsplit(';').next()) else {
        return true;
    };

    match bg.trim().parse::<u8>() {
        Ok(index) => index <= 6 || index == 8,
        Err(_) => true,
    }
}

/// Pick the startup theme from the persisted value, falling back to the
/// environment preference when nothing valid was stored
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or_else(|| Theme::from_dark(prefers_dark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_dark_from_background_index() {
        assert!(prefers_dark(Some("15;0")));
        assert!(prefers_dark(Some("7;8")));
        assert!(prefers_dark(Some("15;default;0")));
        assert!(!prefers_dark(Some("0;15")));
        assert!(!prefers_dark(Some("0;7")));
    }

    #[test]
    fn test_prefers_dark_without_signal() {
        assert!(prefers_dark(None));
        assert!(prefers_dark(Some("")));
        assert!(prefers_dark(Some("15;default")));
    }

    #[test]
    fn test_stored_value_wins() {
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_value_falls_back() {
        assert_eq!(initial_theme(Some("sepia"), false), Theme::Light);
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }
}
