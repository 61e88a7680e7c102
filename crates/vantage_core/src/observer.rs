//! Visibility observation
//!
//! An explicit watch/sweep subscription registry. The owner registers
//! watches (node + minimum visible fraction), then calls [`update`] with the
//! current viewport whenever scroll or layout changes; qualifying entries
//! come back in document order. One-shot semantics belong to the caller:
//! unobserving synchronously on the first qualifying entry, before any
//! animation is scheduled, guarantees at-most-once triggering.
//!
//! [`update`]: VisibilityObserver::update

use slotmap::{new_key_type, SlotMap};

use crate::document::{Document, NodeId};
use crate::geometry::{visible_fraction, Rect};

new_key_type! {
    /// Handle to an active watch
    pub struct WatchId;
}

struct Watch {
    node: NodeId,
    threshold: f32,
}

/// A qualifying observation produced by a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub watch: WatchId,
    pub node: NodeId,
    pub fraction: f32,
}

/// Registry of visibility watches over a document.
#[derive(Default)]
pub struct VisibilityObserver {
    watches: SlotMap<WatchId, Watch>,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch a node; entries are reported while its visible fraction is at
    /// least `threshold`. A threshold of 0 reports whenever any part of the
    /// node is visible.
    pub fn observe(&mut self, node: NodeId, threshold: f32) -> WatchId {
        tracing::trace!(?node, threshold, "observe");
        self.watches.insert(Watch { node, threshold })
    }

    pub fn unobserve(&mut self, watch: WatchId) {
        if let Some(removed) = self.watches.remove(watch) {
            tracing::trace!(node = ?removed.node, "unobserve");
        }
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }

    /// Sweep all watches against `viewport`, returning qualifying entries
    /// in document order. Watches on nodes no longer in the document are
    /// skipped.
    pub fn update(&self, doc: &Document, viewport: Rect) -> Vec<VisibilityEntry> {
        let mut entries: Vec<VisibilityEntry> = self
            .watches
            .iter()
            .filter_map(|(watch, w)| {
                let element = doc.get(w.node)?;
                let fraction = visible_fraction(element.rect(), viewport);
                let qualifies = if w.threshold > 0.0 {
                    fraction >= w.threshold
                } else {
                    fraction > 0.0
                };
                qualifies.then_some(VisibilityEntry {
                    watch,
                    node: w.node,
                    fraction,
                })
            })
            .collect();

        entries.sort_by_key(|e| doc.position(e.node).unwrap_or(usize::MAX));
        entries
    }
}
