//! News Model
//!
//! State of the fetch cycle and the content of the results pane.

use std::time::Instant;

/// Button label while idle
pub const IDLE_LABEL: &str = "Fetch News";

/// Button label while a request is in flight
pub const LOADING_LABEL: &str = "Fetching...";

/// Fetch controller state
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Ready for a new request
    Idle,
    /// A request is in flight
    Loading {
        request_id: u64,
        country: String,
        started_at: Instant,
    },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    pub fn button_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn spinner_visible(&self) -> bool {
        self.is_loading()
    }

    /// Milliseconds since the in-flight request started, 0 when idle
    pub fn elapsed_ms(&self, now: Instant) -> u128 {
        match self {
            FetchState::Loading { started_at, .. } => {
                now.saturating_duration_since(*started_at).as_millis()
            }
            FetchState::Idle => 0,
        }
    }

    /// Request id of the in-flight request, if any
    pub fn request_id(&self) -> Option<u64> {
        match self {
            FetchState::Loading { request_id, .. } => Some(*request_id),
            FetchState::Idle => None,
        }
    }
}

/// One rendered article card, with every field already made safe to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub summary: String,
    /// Article link; `None` when the backend sent something that is not http(s)
    pub link: Option<String>,
    pub image_src: String,
}

/// Content of the results pane
#[derive(Debug, Clone, PartialEq)]
pub enum NewsView {
    /// Nothing fetched yet
    Welcome,
    /// Request in flight for the named country
    Loading { country_name: String },
    /// Backend returned no articles
    Empty,
    /// The last fetch failed
    Failed,
    /// Article cards, revealed one by one starting at `revealed_at`
    Cards {
        cards: Vec<Card>,
        revealed_at: Instant,
    },
}

impl NewsView {
    pub fn cards(&self) -> &[Card] {
        match self {
            NewsView::Cards { cards, .. } => cards,
            _ => &[],
        }
    }
}

/// Fetch cycle state and results
#[derive(Clone, Debug)]
pub struct NewsModel {
    pub fetch_state: FetchState,
    pub view: NewsView,
    /// Highlighted card when the cards pane has focus
    pub card_cursor: usize,
    /// Wall-clock time of the last completed fetch
    pub last_updated: Option<chrono::DateTime<chrono::Local>>,
}

impl NewsModel {
    pub fn new() -> Self {
        Self {
            fetch_state: FetchState::Idle,
            view: NewsView::Welcome,
            card_cursor: 0,
            last_updated: None,
        }
    }

    /// Currently highlighted card
    pub fn selected_card(&self) -> Option<&Card> {
        self.view.cards().get(self.card_cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.view.cards().len();
        if len == 0 {
            self.card_cursor = 0;
            return;
        }
        let next = self.card_cursor as isize + delta;
        self.card_cursor = next.clamp(0, len as isize - 1) as usize;
    }
}

impl Default for NewsModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms() {
        let start = Instant::now();
        let loading = FetchState::Loading {
            request_id: 1,
            country: "jp".to_string(),
            started_at: start,
        };
        assert_eq!(loading.elapsed_ms(start + std::time::Duration::from_millis(160)), 160);
        assert_eq!(FetchState::Idle.elapsed_ms(start), 0);
    }

    #[test]
    fn test_idle_button() {
        let state = FetchState::Idle;
        assert_eq!(state.button_label(), "Fetch News");
        assert!(state.button_enabled());
        assert!(!state.spinner_visible());
    }

    #[test]
    fn test_loading_button() {
        let state = FetchState::Loading {
            request_id: 1,
            country: "jp".to_string(),
            started_at: Instant::now(),
        };
        assert_eq!(state.button_label(), "Fetching...");
        assert!(!state.button_enabled());
        assert!(state.spinner_visible());
        assert_eq!(state.request_id(), Some(1));
    }

    #[test]
    fn test_cursor_clamps() {
        let mut model = NewsModel::new();
        model.move_cursor(3);
        assert_eq!(model.card_cursor, 0);

        let card = Card {
            title: "t".to_string(),
            summary: "s".to_string(),
            link: None,
            image_src: String::new(),
        };
        model.view = NewsView::Cards {
            cards: vec![card.clone(), card],
            revealed_at: Instant::now(),
        };
        model.move_cursor(5);
        assert_eq!(model.card_cursor, 1);
        model.move_cursor(-9);
        assert_eq!(model.card_cursor, 0);
    }
}
