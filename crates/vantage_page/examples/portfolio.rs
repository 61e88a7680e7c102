//! Portfolio page walkthrough
//!
//! Drives the coordinator through a scripted session: initial layout, a
//! scroll down the page with frame ticks in between, a show-more click, and
//! a toast. Prints the derived UI state after each step.
//!
//! Run with: cargo run -p vantage_page --example portfolio

use anyhow::Result;
use vantage_core::{Document, Element, PageEvent, Rect, Size};
use vantage_page::{PageConfig, PageCoordinator};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut doc = Document::new();
    doc.insert(Element::new().with_id("scrollProgressBar"));
    for (id, y) in [("hero", 0.0), ("about", 900.0), ("skills", 1800.0)] {
        doc.insert(
            Element::new()
                .with_id(id)
                .with_class("section")
                .with_rect(Rect::new(0.0, y, 1200.0, 900.0)),
        );
        doc.insert(
            Element::new()
                .with_class("nav-link")
                .with_attr("href", format!("#{id}")),
        );
    }
    let stat = doc.insert(
        Element::new()
            .with_attr("data-count", "150")
            .with_text("0")
            .with_rect(Rect::new(0.0, 1900.0, 200.0, 100.0)),
    );
    doc.insert(
        Element::new()
            .with_attr("data-reveal", "")
            .with_attr("data-reveal-delay", "150")
            .with_rect(Rect::new(0.0, 950.0, 400.0, 100.0)),
    );
    let show_more = doc.insert(
        Element::new()
            .with_id("showMoreSkills")
            .with_text("Show more"),
    );
    doc.insert(Element::new().with_class("skill-card-more"));
    let copy_email = doc.insert(Element::new().with_attr("data-toast", "Email copied!"));
    doc.insert(Element::new().with_id("toast"));

    let mut page = PageCoordinator::new(doc, PageConfig::default());
    page.handle_event(PageEvent::Resize {
        viewport: Size::new(1200.0, 900.0),
        scroll_height: 2700.0,
    });

    for scroll_top in [0.0, 450.0, 900.0, 1350.0, 1800.0] {
        page.handle_event(PageEvent::Scroll { scroll_top });
        // A few frames between scroll positions, 60fps cadence.
        for _ in 0..12 {
            page.handle_event(PageEvent::Frame { dt_ms: 16.7 });
        }
        println!(
            "scroll_top={scroll_top:6.0}  active={:?}  stat={}",
            page.active_section(),
            page.document().get(stat).map(|e| e.text()).unwrap_or(""),
        );
    }

    // Let the counter finish.
    while page.has_active_animations() {
        page.handle_event(PageEvent::Frame { dt_ms: 16.7 });
    }
    println!(
        "settled    stat={}",
        page.document().get(stat).map(|e| e.text()).unwrap_or("")
    );

    page.handle_event(PageEvent::Activate { target: show_more });
    println!("skills expanded: {}", page.skills_expanded());

    page.handle_event(PageEvent::Activate { target: copy_email });
    println!("toast visible: {}", page.toast_visible());

    Ok(())
}
