//! UI state transition logic
//!
//! Pure functions for page cycling and toast timing.

use crate::Page;

/// How long a toast stays up
pub const TOAST_DURATION_MS: u128 = 2500;

/// Next page in navigation-bar order, wrapping around
///
/// # Examples
/// ```
/// use fitbee::Page;
/// use fitbee::logic::ui::next_page;
///
/// assert_eq!(next_page(Page::Dashboard), Page::Workouts);
/// assert_eq!(next_page(Page::Profile), Page::Dashboard);
/// ```
pub fn next_page(current: Page) -> Page {
    Page::ALL[(current.index() + 1) % Page::ALL.len()]
}

/// Previous page in navigation-bar order, wrapping around
pub fn previous_page(current: Page) -> Page {
    Page::ALL[(current.index() + Page::ALL.len() - 1) % Page::ALL.len()]
}

/// Page bound to a number key (`1`..=`4`)
pub fn page_for_digit(digit: char) -> Option<Page> {
    let index = digit.to_digit(10)? as usize;
    if index == 0 {
        return None;
    }
    Page::ALL.get(index - 1).copied()
}

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_forward_visits_every_page() {
        let mut page = Page::Dashboard;
        let mut seen = vec![page];
        for _ in 0..3 {
            page = next_page(page);
            seen.push(page);
        }
        assert_eq!(seen, Page::ALL.to_vec());
        assert_eq!(next_page(page), Page::Dashboard);
    }

    #[test]
    fn test_cycle_backward() {
        assert_eq!(previous_page(Page::Dashboard), Page::Profile);
        assert_eq!(previous_page(Page::Water), Page::Workouts);
    }

    #[test]
    fn test_page_for_digit() {
        assert_eq!(page_for_digit('1'), Some(Page::Dashboard));
        assert_eq!(page_for_digit('4'), Some(Page::Profile));
        assert_eq!(page_for_digit('0'), None);
        assert_eq!(page_for_digit('5'), None);
        assert_eq!(page_for_digit('x'), None);
    }

    #[test]
    fn test_toast_dismissal() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(2499));
        assert!(should_dismiss_toast(2500));
    }
}
