//! Reveal delay timers
//!
//! A one-shot countdown used to stagger reveal animations. The timer fires
//! once its accumulated time reaches the configured delay and never rearms.

/// One-shot delay before a reveal takes effect.
#[derive(Clone, Debug)]
pub struct RevealDelay {
    delay_ms: f32,
    elapsed_ms: f32,
}

impl RevealDelay {
    /// A delay of 0 fires on the first advance.
    pub fn new(delay_ms: f32) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            elapsed_ms: 0.0,
        }
    }

    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    pub fn is_fired(&self) -> bool {
        self.elapsed_ms >= self.delay_ms
    }

    /// Advance by `dt_ms`; returns true once the delay has elapsed.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms += dt_ms.max(0.0);
        self.is_fired()
    }
}
