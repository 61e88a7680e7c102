//! Scroll progress tracking
//!
//! Recomputes the progress ratio on every scroll notification and writes it
//! into the indicator element's width style. Purely derived state: there is
//! no memory of the previous ratio.

use vantage_core::{Document, NodeId};

/// Element id the indicator is looked up by.
pub const PROGRESS_BAR_ID: &str = "scrollProgressBar";

/// Style attribute the ratio is written to, as a percentage string.
pub const WIDTH_STYLE_ATTR: &str = "style.width";

/// Width tracker for the scroll progress indicator.
pub struct ScrollProgress {
    indicator: Option<NodeId>,
}

impl ScrollProgress {
    /// Missing indicator element makes every update a no-op.
    pub fn new(doc: &Document) -> Self {
        Self {
            indicator: doc.node_by_id(PROGRESS_BAR_ID),
        }
    }

    /// Progress through the scrollable span as a percentage in `[0, 100]`.
    /// A non-positive span (content no taller than the viewport) is 0.
    pub fn ratio(scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
        let span = scroll_height - client_height;
        if span <= 0.0 {
            return 0.0;
        }
        (scroll_top / span * 100.0).clamp(0.0, 100.0)
    }

    pub fn update(
        &self,
        doc: &mut Document,
        scroll_top: f32,
        scroll_height: f32,
        client_height: f32,
    ) {
        let Some(indicator) = self.indicator else {
            return;
        };
        let ratio = Self::ratio(scroll_top, scroll_height, client_height);
        if let Some(element) = doc.get_mut(indicator) {
            element.set_attr(WIDTH_STYLE_ATTR, format!("{ratio}%"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Element;

    #[test]
    fn test_ratio_midpoint() {
        assert_eq!(ScrollProgress::ratio(500.0, 2000.0, 1000.0), 50.0);
    }

    #[test]
    fn test_ratio_clamps() {
        assert_eq!(ScrollProgress::ratio(5000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(ScrollProgress::ratio(-50.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_ratio_zero_span() {
        assert_eq!(ScrollProgress::ratio(100.0, 1000.0, 1000.0), 0.0);
        assert_eq!(ScrollProgress::ratio(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_ratio_before_any_scroll() {
        assert_eq!(ScrollProgress::ratio(0.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_update_writes_indicator_width() {
        let mut doc = Document::new();
        let bar = doc.insert(Element::new().with_id(PROGRESS_BAR_ID));

        let progress = ScrollProgress::new(&doc);
        progress.update(&mut doc, 500.0, 2000.0, 1000.0);

        assert_eq!(doc.get(bar).unwrap().attr(WIDTH_STYLE_ATTR), Some("50%"));
    }

    #[test]
    fn test_missing_indicator_noops() {
        let mut doc = Document::new();
        let progress = ScrollProgress::new(&doc);
        // Nothing to assert beyond "does not panic".
        progress.update(&mut doc, 500.0, 2000.0, 1000.0);
    }
}
