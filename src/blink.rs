//! Blink-click detection from per-eye aspect ratios.
//!
//! Each eye is an independent two-state machine: ready to fire, or cooling
//! down after a click. A click fires when the eye aspect ratio drops below
//! the configured threshold while the cooldown has elapsed. There is no
//! explicit eye-reopened detection, so an eye held closed re-fires every
//! cooldown interval rather than once per physical blink. That matches the
//! behavior this port reproduces; see DESIGN.md before changing it.

use std::time::{Duration, Instant};

/// Mouse button produced by a blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button, fired by the eye on the visual left of the preview
    Left,
    /// Right button, fired by the eye on the visual right of the preview
    Right,
}

/// Per-eye blink state machine with click cooldown
pub struct BlinkDetector {
    ear_threshold: f64,
    cooldown: Duration,
    last_left_click: Option<Instant>,
    last_right_click: Option<Instant>,
}

impl BlinkDetector {
    /// Create a detector with the given EAR threshold and per-eye cooldown
    #[must_use]
    pub const fn new(ear_threshold: f64, cooldown: Duration) -> Self {
        Self {
            ear_threshold,
            cooldown,
            last_left_click: None,
            last_right_click: None,
        }
    }

    /// Feed one frame's eye aspect ratios; returns the clicks to emit.
    ///
    /// Both eyes may fire on the same frame. The returned order is left
    /// before right.
    pub fn update(&mut self, left_ear: f64, right_ear: f64, now: Instant) -> Vec<MouseButton> {
        let mut clicks = Vec::new();

        if Self::should_fire(left_ear, self.ear_threshold, self.cooldown, self.last_left_click, now) {
            self.last_left_click = Some(now);
            clicks.push(MouseButton::Left);
        }
        if Self::should_fire(right_ear, self.ear_threshold, self.cooldown, self.last_right_click, now) {
            self.last_right_click = Some(now);
            clicks.push(MouseButton::Right);
        }

        clicks
    }

    fn should_fire(ear: f64, threshold: f64, cooldown: Duration, last_click: Option<Instant>, now: Instant) -> bool {
        if ear >= threshold {
            return false;
        }
        match last_click {
            None => true,
            Some(last) => now.duration_since(last) > cooldown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: f64 = 0.30;
    const CLOSED: f64 = 0.10;

    fn detector() -> BlinkDetector {
        BlinkDetector::new(0.20, Duration::from_secs(1))
    }

    #[test]
    fn test_open_eyes_never_fire() {
        let mut d = detector();
        let t0 = Instant::now();
        assert!(d.update(OPEN, OPEN, t0).is_empty());
        assert!(d.update(OPEN, OPEN, t0 + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_first_blink_fires_immediately() {
        let mut d = detector();
        let clicks = d.update(CLOSED, OPEN, Instant::now());
        assert_eq!(clicks, vec![MouseButton::Left]);
    }

    #[test]
    fn test_cooldown_suppresses_second_click() {
        let mut d = detector();
        let t0 = Instant::now();
        assert_eq!(d.update(CLOSED, OPEN, t0).len(), 1);
        // Second blink condition 300ms later is within the 1s cooldown
        assert!(d.update(CLOSED, OPEN, t0 + Duration::from_millis(300)).is_empty());
    }

    #[test]
    fn test_held_closed_eye_refires_after_cooldown() {
        let mut d = detector();
        let t0 = Instant::now();
        assert_eq!(d.update(CLOSED, OPEN, t0).len(), 1);
        assert!(d.update(CLOSED, OPEN, t0 + Duration::from_millis(900)).is_empty());
        // No reopen happened, but the cooldown elapsed: fires again
        assert_eq!(d.update(CLOSED, OPEN, t0 + Duration::from_millis(1100)).len(), 1);
    }

    #[test]
    fn test_eyes_are_independent() {
        let mut d = detector();
        let t0 = Instant::now();
        assert_eq!(d.update(CLOSED, OPEN, t0), vec![MouseButton::Left]);
        // Right eye has its own cooldown and can fire right away
        assert_eq!(
            d.update(OPEN, CLOSED, t0 + Duration::from_millis(100)),
            vec![MouseButton::Right]
        );
    }

    #[test]
    fn test_both_eyes_same_frame() {
        let mut d = detector();
        let clicks = d.update(CLOSED, CLOSED, Instant::now());
        assert_eq!(clicks, vec![MouseButton::Left, MouseButton::Right]);
    }
}
