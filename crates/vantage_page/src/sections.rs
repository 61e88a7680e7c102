//! Active-section highlighting
//!
//! Tracks which page section is most visible and keeps exactly one nav link
//! marked active. The viewport is inset by a fixed header band top and
//! bottom before ranking, so content hidden behind the sticky header does
//! not count as visible.

use vantage_core::{Document, NodeId, Rect, VisibilityObserver};

/// Height of the fixed header band excluded from the viewport, in px.
pub const HEADER_BAND_PX: f32 = 80.0;

/// Minimum visible fraction for a section to qualify as current.
pub const MIN_VISIBLE_FRACTION: f32 = 0.1;

/// Class carried by tracked sections. Tracked sections also need an id.
pub const SECTION_CLASS: &str = "section";

/// Class carried by the navigation links.
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Class applied to the active link.
pub const ACTIVE_CLASS: &str = "is-active";

/// Tracks section visibility and mirrors it onto the nav links.
pub struct SectionTracker {
    observer: VisibilityObserver,
    nav_links: Vec<NodeId>,
    active: Option<String>,
}

impl SectionTracker {
    /// Sections are elements with the `section` class and a non-empty id.
    /// With zero tracked sections no link is ever marked active.
    pub fn new(doc: &Document) -> Self {
        let mut observer = VisibilityObserver::new();
        for node in doc.with_class(SECTION_CLASS) {
            if doc.get(node).and_then(|e| e.id()).is_some() {
                observer.observe(node, MIN_VISIBLE_FRACTION);
            }
        }
        Self {
            observer,
            nav_links: doc.with_class(NAV_LINK_CLASS),
            active: None,
        }
    }

    /// Id of the currently highlighted section.
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-rank section visibility against `viewport` and update the links.
    ///
    /// The winner is the qualifying section with the highest visible
    /// fraction; ties break in document order. When nothing qualifies the
    /// previous active link is left untouched, so the highlight never
    /// flickers to "none" between sections.
    pub fn update(&mut self, doc: &mut Document, viewport: Rect) {
        if self.observer.is_empty() {
            return;
        }

        let tracking_root = viewport.inset_vertical(HEADER_BAND_PX, HEADER_BAND_PX);
        let entries = self.observer.update(doc, tracking_root);

        let mut best: Option<(NodeId, f32)> = None;
        for entry in &entries {
            // Strict comparison: the first section in document order wins
            // an exact tie.
            if best.map_or(true, |(_, fraction)| entry.fraction > fraction) {
                best = Some((entry.node, entry.fraction));
            }
        }

        let Some((node, _)) = best else {
            return;
        };
        let Some(id) = doc.get(node).and_then(|e| e.id()).map(str::to_string) else {
            return;
        };
        self.set_active(doc, &id);
    }

    fn set_active(&mut self, doc: &mut Document, id: &str) {
        if self.active.as_deref() != Some(id) {
            tracing::debug!(section = id, "active section changed");
        }
        let target_href = format!("#{id}");
        for link in &self.nav_links {
            if let Some(element) = doc.get_mut(*link) {
                let is_active = element.attr("href") == Some(target_href.as_str());
                element.toggle_class(ACTIVE_CLASS, is_active);
            }
        }
        self.active = Some(id.to_string());
    }
}
