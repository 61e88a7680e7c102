//! Count-up animation
//!
//! Animates an integer display from 0 to a fixed target over a fixed
//! duration with an ease-out cubic curve. Progression is driven entirely by
//! [`advance`]: there is no internal clock, so a test can step the
//! animation with any cadence it likes.
//!
//! [`advance`]: CountUp::advance

use crate::easing::Easing;

/// Default animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: f32 = 900.0;

/// One frame of a count-up animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUpFrame {
    /// Value to display this frame.
    pub value: u64,
    /// True when the animation has reached its target.
    pub done: bool,
}

/// An eased integer counter.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u64,
    duration_ms: f32,
    elapsed_ms: f32,
}

impl CountUp {
    /// Create a counter toward `target` with the default 900 ms duration.
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            elapsed_ms: 0.0,
        }
    }

    /// Override the duration. Non-positive durations complete on the first
    /// advance.
    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Current displayed value without advancing.
    pub fn value(&self) -> u64 {
        let t = self.progress();
        let eased = Easing::EaseOutCubic.apply(t);
        (f64::from(eased) * self.target as f64).round() as u64
    }

    pub fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }

    fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Advance by `dt_ms` and return the frame to display.
    pub fn advance(&mut self, dt_ms: f32) -> CountUpFrame {
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms.max(0.0);
        }
        CountUpFrame {
            value: self.value(),
            done: self.is_done(),
        }
    }
}
