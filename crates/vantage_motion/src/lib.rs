//! Vantage Motion
//!
//! One-shot decorative animations and the scheduler that advances them.
//!
//! # Features
//!
//! - **Easing**: the cubic curve family used by the page layer
//! - **Count-up**: eased integer counters with an explicit `advance(dt)` API
//! - **Reveal delays**: staggered one-shot timers
//! - **Scheduler**: external-tick orchestration — no wall-clock reads, so
//!   every animation is deterministic under test
//!
//! Nothing here is cancellable or restartable: an animation runs to
//! completion once started and is then dropped by the scheduler.

pub mod countup;
pub mod easing;
pub mod reveal;
pub mod scheduler;

pub use countup::{CountUp, CountUpFrame};
pub use easing::Easing;
pub use reveal::RevealDelay;
pub use scheduler::{MotionScheduler, MotionUpdate};
