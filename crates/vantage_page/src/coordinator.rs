//! The scroll-UI coordinator
//!
//! Owns the document and every scroll- or visibility-derived piece of UI
//! state. The host feeds it [`PageEvent`]s; it mutates the document and
//! returns commands for the effects only the host can perform (the actual
//! scrolling).
//!
//! One-shot triggers are detached synchronously: a reveal or counter watch
//! is unobserved inside the sweep that first qualifies it, before the
//! animation is scheduled, so re-entering the viewport can never re-fire
//! an element.

use serde::{Deserialize, Serialize};
use vantage_core::{Document, Key, NodeId, PageEvent, Rect, Size, VisibilityObserver};
use vantage_motion::{CountUp, MotionScheduler, MotionUpdate, RevealDelay};

use crate::nav::NavToggle;
use crate::notify::Notification;
use crate::progress::ScrollProgress;
use crate::scroll_to::{self, ScrollPlan};
use crate::sections::SectionTracker;
use crate::skills::ShowMoreToggle;

/// Attribute opting an element into reveal animation.
pub const REVEAL_ATTR: &str = "data-reveal";

/// Per-element reveal stagger in milliseconds.
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";

/// Class applied once an element is revealed.
pub const REVEALED_CLASS: &str = "is-revealed";

/// Minimum visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Attribute carrying a counter's target value.
pub const COUNT_ATTR: &str = "data-count";

/// Minimum visible fraction that starts a counter.
pub const COUNT_THRESHOLD: f32 = 0.4;

/// Attribute carrying a scroll-target selector on buttons.
pub const SCROLL_ATTR: &str = "data-scroll";

/// Attribute carrying a toast message on buttons.
pub const TOAST_ATTR: &str = "data-toast";

fn default_header_height() -> f32 {
    80.0
}

/// Environment configuration, read once at construction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PageConfig {
    /// The environment's reduced-motion preference. When set, reveal and
    /// counter elements take their final state at setup and are never
    /// observed or animated.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Height of the fixed header, used for anchor scroll offsets.
    #[serde(default = "default_header_height")]
    pub header_height: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            header_height: default_header_height(),
        }
    }
}

/// An effect only the host can perform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostCommand {
    ScrollTo(ScrollPlan),
}

/// The coordinator. See the crate docs for the feature inventory.
pub struct PageCoordinator {
    doc: Document,
    config: PageConfig,
    viewport: Size,
    scroll_height: f32,
    scroll_top: f32,
    progress: ScrollProgress,
    sections: SectionTracker,
    reveal_observer: VisibilityObserver,
    counter_observer: VisibilityObserver,
    scheduler: MotionScheduler,
    skills: ShowMoreToggle,
    nav: NavToggle,
    notify: Notification,
}

impl PageCoordinator {
    /// Wire up every feature the document carries nodes for. Features whose
    /// nodes are absent stay inert; under reduced motion, reveals and
    /// counters take their final state here and are never observed.
    pub fn new(mut doc: Document, config: PageConfig) -> Self {
        let progress = ScrollProgress::new(&doc);
        let sections = SectionTracker::new(&doc);
        let skills = ShowMoreToggle::new(&doc);
        let nav = NavToggle::new(&doc);
        let notify = Notification::new(&doc);

        let mut reveal_observer = VisibilityObserver::new();
        let mut counter_observer = VisibilityObserver::new();

        let reveal_nodes = doc.with_attr(REVEAL_ATTR);
        let counter_nodes = doc.with_attr(COUNT_ATTR);

        if config.reduced_motion {
            for node in reveal_nodes {
                if let Some(element) = doc.get_mut(node) {
                    element.add_class(REVEALED_CLASS);
                }
            }
            for node in counter_nodes {
                if let Some(element) = doc.get_mut(node) {
                    let target = element.attr_u64(COUNT_ATTR);
                    element.set_text(target.to_string());
                }
            }
        } else {
            for node in reveal_nodes {
                reveal_observer.observe(node, REVEAL_THRESHOLD);
            }
            for node in counter_nodes {
                counter_observer.observe(node, COUNT_THRESHOLD);
            }
        }

        Self {
            doc,
            config,
            viewport: Size::ZERO,
            scroll_height: 0.0,
            scroll_top: 0.0,
            progress,
            sections,
            reveal_observer,
            counter_observer,
            scheduler: MotionScheduler::new(),
            skills,
            nav,
            notify,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access for the host's layout updates (element rects).
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn active_section(&self) -> Option<&str> {
        self.sections.active_section()
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn skills_expanded(&self) -> bool {
        self.skills.is_expanded()
    }

    pub fn toast_visible(&self) -> bool {
        self.notify.is_visible()
    }

    /// True while any reveal delay or counter is still running.
    pub fn has_active_animations(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    /// Handle one host notification to completion.
    pub fn handle_event(&mut self, event: PageEvent) -> Vec<HostCommand> {
        match event {
            PageEvent::Scroll { scroll_top } => {
                self.scroll_top = scroll_top;
                self.progress.update(
                    &mut self.doc,
                    self.scroll_top,
                    self.scroll_height,
                    self.viewport.height,
                );
                self.sweep();
                Vec::new()
            }
            PageEvent::Resize {
                viewport,
                scroll_height,
            } => {
                self.viewport = viewport;
                self.scroll_height = scroll_height;
                self.progress.update(
                    &mut self.doc,
                    self.scroll_top,
                    self.scroll_height,
                    self.viewport.height,
                );
                self.sweep();
                Vec::new()
            }
            PageEvent::Frame { dt_ms } => {
                self.advance(dt_ms);
                Vec::new()
            }
            PageEvent::Activate { target } => self.activate(target),
            PageEvent::KeyDown { key } => {
                if key == Key::ESCAPE {
                    self.nav.close(&mut self.doc);
                }
                Vec::new()
            }
        }
    }

    fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_top, self.viewport.width, self.viewport.height)
    }

    /// Re-rank visibility after a scroll or layout change.
    fn sweep(&mut self) {
        let viewport = self.viewport_rect();

        self.sections.update(&mut self.doc, viewport);

        for entry in self.reveal_observer.update(&self.doc, viewport) {
            // Detach before scheduling anything.
            self.reveal_observer.unobserve(entry.watch);
            let delay = self
                .doc
                .get(entry.node)
                .map(|e| e.attr_f32(REVEAL_DELAY_ATTR))
                .unwrap_or(0.0);
            if delay > 0.0 {
                self.scheduler
                    .start_reveal(entry.node, RevealDelay::new(delay));
            } else if let Some(element) = self.doc.get_mut(entry.node) {
                element.add_class(REVEALED_CLASS);
            }
        }

        for entry in self.counter_observer.update(&self.doc, viewport) {
            self.counter_observer.unobserve(entry.watch);
            let target = self
                .doc
                .get(entry.node)
                .map(|e| e.attr_u64(COUNT_ATTR))
                .unwrap_or(0);
            self.scheduler.start_count(entry.node, CountUp::new(target));
        }
    }

    /// Advance running animations and the toast countdown.
    fn advance(&mut self, dt_ms: f32) {
        for update in self.scheduler.tick(dt_ms) {
            match update {
                MotionUpdate::Count { node, value, .. } => {
                    if let Some(element) = self.doc.get_mut(node) {
                        element.set_text(value.to_string());
                    }
                }
                MotionUpdate::Reveal { node } => {
                    if let Some(element) = self.doc.get_mut(node) {
                        element.add_class(REVEALED_CLASS);
                    }
                }
            }
        }
        self.notify.tick(&mut self.doc, dt_ms);
    }

    /// Route an activation to the interaction it targets. An element may
    /// carry several roles (an anchor that also shows a toast), so the
    /// checks are not exclusive.
    fn activate(&mut self, target: NodeId) -> Vec<HostCommand> {
        let mut commands = Vec::new();

        if self.nav.control() == Some(target) {
            self.nav.toggle(&mut self.doc);
        } else if self.nav.is_open() && !self.nav.contains(&self.doc, target) {
            // Outside click closes the open mobile nav.
            self.nav.close(&mut self.doc);
        }
        if self.skills.control() == Some(target) {
            self.skills.activate(&mut self.doc);
        }

        let (href, scroll_selector, toast_message) = match self.doc.get(target) {
            Some(element) => (
                element.attr("href").map(str::to_string),
                element.attr(SCROLL_ATTR).map(str::to_string),
                element.attr(TOAST_ATTR).map(str::to_string),
            ),
            None => return commands,
        };

        if let Some(href) = href.filter(|h| h.starts_with('#') && h.len() > 1) {
            self.nav.close(&mut self.doc);
            if let Some(plan) = scroll_to::resolve(
                &self.doc,
                &href,
                self.config.header_height,
                self.config.reduced_motion,
            ) {
                commands.push(HostCommand::ScrollTo(plan));
            }
        }

        if let Some(selector) = scroll_selector {
            self.nav.close(&mut self.doc);
            if let Some(plan) = scroll_to::resolve(
                &self.doc,
                &selector,
                self.config.header_height,
                self.config.reduced_motion,
            ) {
                commands.push(HostCommand::ScrollTo(plan));
            }
        }

        if let Some(message) = toast_message {
            if !message.is_empty() {
                self.notify.show(&mut self.doc, &message);
            }
        }

        commands
    }
}
