/// Fixed-header clearance for in-page anchor jumps, in pixels.
pub const HEADER_ANCHOR_OFFSET: f64 = 80.0;

/// Absolute scroll position that puts an anchor target just below the fixed
/// header: the element's viewport offset plus the current page offset, minus
/// the header clearance. Never negative.
pub fn anchor_scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    (element_top + page_y_offset - HEADER_ANCHOR_OFFSET).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_clears_the_header() {
        // Element 500px down the viewport on an unscrolled page.
        assert_eq!(anchor_scroll_target(500.0, 0.0), 420.0);
    }

    #[test]
    fn test_target_accounts_for_current_scroll() {
        // Element 200px below the viewport top while already 300px down.
        assert_eq!(anchor_scroll_target(200.0, 300.0), 420.0);
    }

    #[test]
    fn test_target_never_negative() {
        // Anchors near the top of the page pin to the very top.
        assert_eq!(anchor_scroll_target(30.0, 0.0), 0.0);
    }
}
