//! Smooth-scroll destination math
//!
//! Resolves a `#id` selector to the scroll offset that puts the target just
//! below the fixed header. The host performs the actual scroll; under a
//! reduced-motion preference it should jump instead of animating.

use vantage_core::Document;

/// Gap left between the header and the scrolled-to element, in px.
pub const ANCHOR_GAP_PX: f32 = 8.0;

/// How the host should perform the scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

/// A resolved scroll destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub top: f32,
    pub behavior: ScrollBehavior,
}

/// Resolve `selector` (`#id` form) against the document. Unknown ids and
/// selectors without an id resolve to `None`.
pub fn resolve(
    doc: &Document,
    selector: &str,
    header_height: f32,
    reduced_motion: bool,
) -> Option<ScrollPlan> {
    let id = selector.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    let node = doc.node_by_id(id)?;
    let top = doc.get(node)?.rect().y() - header_height - ANCHOR_GAP_PX;
    Some(ScrollPlan {
        top,
        behavior: if reduced_motion {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        },
    })
}
