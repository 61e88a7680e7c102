//! Event vocabulary
//!
//! The flat set of host notifications the coordinator consumes. All
//! dispatch is single-threaded: every event is handled to completion on the
//! host's UI loop before the next one arrives, so no state here needs
//! locking.

use crate::document::NodeId;
use crate::geometry::Size;

/// A notification from the host page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// The page scrolled to a new offset.
    Scroll { scroll_top: f32 },
    /// The viewport or content size changed. `scroll_height` is the full
    /// scrollable content height.
    Resize { viewport: Size, scroll_height: f32 },
    /// A display-refresh tick. `dt_ms` is time since the previous tick.
    Frame { dt_ms: f32 },
    /// The user activated (clicked/tapped) an element.
    Activate { target: NodeId },
    /// A key was pressed.
    KeyDown { key: Key },
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Key(pub u32);

impl Key {
    pub const ESCAPE: Key = Key(0x1B);
}
