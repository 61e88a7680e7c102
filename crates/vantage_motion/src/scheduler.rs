//! Motion scheduler
//!
//! Holds all in-flight animations and advances them on each external tick.
//! Each animation is tagged with the document node it animates; the tick
//! returns the resulting display updates for the owner to apply. Finished
//! animations are dropped during the tick that completes them.

use slotmap::{new_key_type, SlotMap};
use vantage_core::NodeId;

use crate::countup::CountUp;
use crate::reveal::RevealDelay;

new_key_type! {
    pub struct CountUpId;
    pub struct RevealId;
}

/// A display update produced by a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionUpdate {
    /// A counter advanced; `value` is the value to display now.
    Count {
        node: NodeId,
        value: u64,
        done: bool,
    },
    /// A reveal delay elapsed; the node should be marked revealed.
    Reveal { node: NodeId },
}

/// The scheduler that ticks all active animations.
#[derive(Default)]
pub struct MotionScheduler {
    countups: SlotMap<CountUpId, (NodeId, CountUp)>,
    reveals: SlotMap<RevealId, (NodeId, RevealDelay)>,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_count(&mut self, node: NodeId, anim: CountUp) -> CountUpId {
        tracing::debug!(?node, target = anim.target(), "count-up started");
        self.countups.insert((node, anim))
    }

    pub fn start_reveal(&mut self, node: NodeId, delay: RevealDelay) -> RevealId {
        tracing::debug!(?node, delay_ms = delay.delay_ms(), "reveal scheduled");
        self.reveals.insert((node, delay))
    }

    /// Advance all animations by `dt_ms`, returning the display updates in
    /// a stable order: counters first, then reveals.
    pub fn tick(&mut self, dt_ms: f32) -> Vec<MotionUpdate> {
        let mut updates = Vec::new();

        let mut finished_counts = Vec::new();
        for (id, (node, anim)) in self.countups.iter_mut() {
            let frame = anim.advance(dt_ms);
            updates.push(MotionUpdate::Count {
                node: *node,
                value: frame.value,
                done: frame.done,
            });
            if frame.done {
                finished_counts.push(id);
            }
        }
        for id in finished_counts {
            self.countups.remove(id);
        }

        let mut finished_reveals = Vec::new();
        for (id, (node, delay)) in self.reveals.iter_mut() {
            if delay.advance(dt_ms) {
                updates.push(MotionUpdate::Reveal { node: *node });
                finished_reveals.push(id);
            }
        }
        for id in finished_reveals {
            self.reveals.remove(id);
        }

        updates
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.countups.is_empty() || !self.reveals.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.countups.len() + self.reveals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::document::{Document, Element};

    fn two_nodes() -> (NodeId, NodeId) {
        let mut doc = Document::new();
        (doc.insert(Element::new()), doc.insert(Element::new()))
    }

    #[test]
    fn test_count_runs_to_completion_and_is_dropped() {
        let (node, _) = two_nodes();
        let mut scheduler = MotionScheduler::new();
        scheduler.start_count(node, CountUp::new(100).with_duration(100.0));

        let mut last_value = 0;
        for _ in 0..10 {
            for update in scheduler.tick(20.0) {
                if let MotionUpdate::Count { value, .. } = update {
                    assert!(value >= last_value);
                    last_value = value;
                }
            }
        }
        assert_eq!(last_value, 100);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_reveal_fires_once() {
        let (node, _) = two_nodes();
        let mut scheduler = MotionScheduler::new();
        scheduler.start_reveal(node, RevealDelay::new(30.0));

        assert!(scheduler.tick(16.0).is_empty());
        assert_eq!(scheduler.tick(16.0), vec![MotionUpdate::Reveal { node }]);
        assert!(scheduler.tick(16.0).is_empty());
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_mixed_animations_tick_together() {
        let (a, b) = two_nodes();
        let mut scheduler = MotionScheduler::new();
        scheduler.start_count(a, CountUp::new(10).with_duration(50.0));
        scheduler.start_reveal(b, RevealDelay::new(0.0));
        assert_eq!(scheduler.active_count(), 2);

        let updates = scheduler.tick(50.0);
        assert!(updates.contains(&MotionUpdate::Count {
            node: a,
            value: 10,
            done: true
        }));
        assert!(updates.contains(&MotionUpdate::Reveal { node: b }));
        assert!(!scheduler.has_active_animations());
    }
}
