//! Shrink/lock progression for the date page's decline button.

use crate::constants::{
    DECLINE_BRIGHTNESS_MIN, DECLINE_BRIGHTNESS_STEP, DECLINE_MAX_ATTEMPTS, DECLINE_SCALE_MIN,
    DECLINE_SCALE_STEP,
};

/// Taunt shown after the n-th decline, in order. Counts past the end of the
/// list keep showing the last entry.
pub const DECLINE_MESSAGES: [&str; 4] = [
    "Try again 😏",
    "How dare you 😤",
    "Are you sure? 🥺",
    "Say YES 😈",
];

/// Attempt counter for the date page. Monotone, saturating at the lock
/// threshold; once locked the control stays locked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeclineState {
    attempts: u32,
}

impl DeclineState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Register one decline click. Clicks past the lock threshold are inert.
    pub fn register_decline(&mut self) {
        self.attempts = (self.attempts + 1).min(DECLINE_MAX_ATTEMPTS);
    }

    #[inline]
    pub fn locked(&self) -> bool {
        self.attempts >= DECLINE_MAX_ATTEMPTS
    }

    /// Visual scale for the current attempt count, floored so the button
    /// never vanishes entirely.
    pub fn scale(&self) -> f32 {
        (1.0 - self.attempts as f32 * DECLINE_SCALE_STEP).max(DECLINE_SCALE_MIN)
    }

    /// Brightness filter value for the current attempt count.
    pub fn brightness(&self) -> f32 {
        (1.0 - self.attempts as f32 * DECLINE_BRIGHTNESS_STEP).max(DECLINE_BRIGHTNESS_MIN)
    }

    /// Message for the most recent decline. Meaningful once at least one
    /// decline was registered; out-of-range counts fall back to the last
    /// message.
    pub fn message(&self) -> &'static str {
        let idx = self.attempts.saturating_sub(1) as usize;
        DECLINE_MESSAGES
            .get(idx)
            .copied()
            .unwrap_or(DECLINE_MESSAGES[DECLINE_MESSAGES.len() - 1])
    }
}
