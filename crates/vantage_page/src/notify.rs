//! Toast notifications
//!
//! The toast owns a single countdown field; showing a message (re)arms it
//! and frame ticks count it down. No timer handle lives outside this
//! struct.

use vantage_core::{Document, NodeId};

/// Element id of the toast node.
pub const TOAST_ID: &str = "toast";

/// Class applied while the toast is showing.
pub const VISIBLE_CLASS: &str = "is-visible";

/// How long a toast stays visible, in milliseconds.
pub const TOAST_DURATION_MS: f32 = 2200.0;

/// One-at-a-time toast display.
pub struct Notification {
    node: Option<NodeId>,
    active_timer: Option<f32>,
}

impl Notification {
    /// Missing toast element makes `show` a no-op.
    pub fn new(doc: &Document) -> Self {
        Self {
            node: doc.node_by_id(TOAST_ID),
            active_timer: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.active_timer.is_some()
    }

    /// Show `message`, restarting the dismiss countdown if one is running.
    pub fn show(&mut self, doc: &mut Document, message: &str) {
        let Some(node) = self.node else {
            return;
        };
        if let Some(element) = doc.get_mut(node) {
            element.set_text(message);
            element.add_class(VISIBLE_CLASS);
        }
        tracing::debug!(message, "toast shown");
        self.active_timer = Some(TOAST_DURATION_MS);
    }

    /// Count down the dismiss timer; hides the toast on expiry.
    pub fn tick(&mut self, doc: &mut Document, dt_ms: f32) {
        let Some(remaining) = self.active_timer else {
            return;
        };
        let remaining = remaining - dt_ms.max(0.0);
        if remaining > 0.0 {
            self.active_timer = Some(remaining);
            return;
        }
        self.active_timer = None;
        if let Some(node) = self.node {
            if let Some(element) = doc.get_mut(node) {
                element.remove_class(VISIBLE_CLASS);
            }
        }
    }
}
