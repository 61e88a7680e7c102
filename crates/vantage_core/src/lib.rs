//! Vantage Core
//!
//! This crate provides the foundational primitives for the Vantage page
//! behavior engine:
//!
//! - **Document model**: a slotmap-keyed element store standing in for the
//!   host document (classes, attributes, text, layout rects)
//! - **Geometry**: rects, intersections, and visible-fraction math
//! - **Events**: the flat event vocabulary consumed by the coordinator loop
//! - **Visibility observation**: explicit watch/sweep subscriptions that
//!   replace callback-based intersection observers
//! - **State machines**: flat FSMs for two-state interaction toggles
//!
//! # Example
//!
//! ```rust
//! use vantage_core::document::{Document, Element};
//! use vantage_core::geometry::Rect;
//! use vantage_core::observer::VisibilityObserver;
//!
//! let mut doc = Document::new();
//! let hero = doc.insert(
//!     Element::new()
//!         .with_id("hero")
//!         .with_rect(Rect::new(0.0, 0.0, 1200.0, 800.0)),
//! );
//!
//! let mut observer = VisibilityObserver::new();
//! observer.observe(hero, 0.5);
//!
//! let viewport = Rect::new(0.0, 0.0, 1200.0, 900.0);
//! let entries = observer.update(&doc, viewport);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].node, hero);
//! ```

pub mod document;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod observer;

pub use document::{Document, DocumentError, Element, NodeId};
pub use events::{Key, PageEvent};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use geometry::{Point, Rect, Size};
pub use observer::{VisibilityEntry, VisibilityObserver, WatchId};
