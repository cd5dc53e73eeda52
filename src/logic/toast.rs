//! Toast lifecycle timing
//!
//! A toast becomes visible shortly after it is created, stays up for three
//! seconds, then fades out for 300ms before it is removed.

/// Delay before a new toast is drawn
pub const TOAST_SHOW_DELAY_MS: u128 = 10;

/// How long a toast stays fully visible (measured from creation)
pub const TOAST_VISIBLE_MS: u128 = 3000;

/// Length of the fade-out after the visible period
pub const TOAST_FADE_MS: u128 = 300;

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Created but not drawn yet
    Pending,
    /// Fully visible
    Shown,
    /// Fading out, drawn dimmed
    Hiding,
    /// Ready to be removed
    Expired,
}

/// Classify a toast by its age in milliseconds
pub fn toast_phase(age_ms: u128) -> ToastPhase {
    if age_ms < TOAST_SHOW_DELAY_MS {
        ToastPhase::Pending
    } else if age_ms < TOAST_VISIBLE_MS {
        ToastPhase::Shown
    } else if age_ms < TOAST_VISIBLE_MS + TOAST_FADE_MS {
        ToastPhase::Hiding
    } else {
        ToastPhase::Expired
    }
}

/// Check if a toast should be dropped from the model
pub fn should_dismiss_toast(age_ms: u128) -> bool {
    toast_phase(age_ms) == ToastPhase::Expired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_before_show_delay() {
        assert_eq!(toast_phase(0), ToastPhase::Pending);
        assert_eq!(toast_phase(9), ToastPhase::Pending);
    }

    #[test]
    fn test_shown_window() {
        assert_eq!(toast_phase(10), ToastPhase::Shown);
        assert_eq!(toast_phase(1500), ToastPhase::Shown);
        assert_eq!(toast_phase(2999), ToastPhase::Shown);
    }

    #[test]
    fn test_fade_window() {
        assert_eq!(toast_phase(3000), ToastPhase::Hiding);
        assert_eq!(toast_phase(3299), ToastPhase::Hiding);
    }

    #[test]
    fn test_expired_after_fade() {
        assert_eq!(toast_phase(3300), ToastPhase::Expired);
        assert!(should_dismiss_toast(3300));
        assert!(!should_dismiss_toast(3299));
    }
}
