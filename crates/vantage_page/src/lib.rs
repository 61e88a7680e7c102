//! Vantage Page
//!
//! The scroll-driven UI coordinator for a single page: it owns every piece
//! of UI state derived from scroll position or element visibility and
//! applies the resulting class/attribute/text mutations to the document
//! model.
//!
//! Features, matching the conventions of the page it drives:
//!
//! - **Scroll progress**: indicator width tracks scroll position
//! - **Active section**: the most-visible `section` element (by id) marks
//!   its `nav-link` as active
//! - **Reveal-on-scroll**: `data-reveal` elements gain `is-revealed` once
//!   sufficiently visible, optionally staggered by `data-reveal-delay`
//! - **Count-up stats**: `data-count` elements animate 0 → target
//! - **Show more/less**: the `showMoreSkills` control toggles
//!   `skill-card-more` cards
//! - **Mobile nav, toast, smooth-scroll targets**: interaction glue driven
//!   through [`PageEvent::Activate`]
//!
//! The coordinator never reads a clock: scroll, resize, frame, and
//! activation notifications arrive as [`PageEvent`]s and each is handled to
//! completion on the host's UI loop.
//!
//! ```rust
//! use vantage_core::{Document, Element, PageEvent, Rect, Size};
//! use vantage_page::{PageConfig, PageCoordinator};
//!
//! let mut doc = Document::new();
//! doc.insert(
//!     Element::new()
//!         .with_attr("data-count", "150")
//!         .with_rect(Rect::new(0.0, 0.0, 100.0, 100.0)),
//! );
//!
//! let mut page = PageCoordinator::new(doc, PageConfig::default());
//! page.handle_event(PageEvent::Resize {
//!     viewport: Size::new(1200.0, 900.0),
//!     scroll_height: 900.0,
//! });
//! page.handle_event(PageEvent::Frame { dt_ms: 900.0 });
//! ```
//!
//! [`PageEvent`]: vantage_core::PageEvent
//! [`PageEvent::Activate`]: vantage_core::PageEvent::Activate

pub mod coordinator;
pub mod nav;
pub mod notify;
pub mod progress;
pub mod scroll_to;
pub mod sections;
pub mod skills;

pub use coordinator::{HostCommand, PageConfig, PageCoordinator};
pub use nav::NavToggle;
pub use notify::Notification;
pub use progress::ScrollProgress;
pub use scroll_to::{ScrollBehavior, ScrollPlan};
pub use sections::SectionTracker;
pub use skills::ShowMoreToggle;
