//! Gesture input adapter
//!
//! Converts a continuous one-dimensional drag into a live visual offset
//! and, on release, a single discrete flip trigger when the upward
//! distance crosses the swipe threshold. While the engine is mid-flip all
//! drag input is ignored.

/// Upward drag distance (in points) that triggers a flip on release.
pub const SWIPE_TRIGGER_DISTANCE: f32 = 50.0;

/// Per-tick decay factor for the spring-back animation.
const SPRING_DECAY: f32 = 0.55;

/// Offsets below this magnitude snap to rest.
const REST_EPSILON: f32 = 0.5;

/// Tracks one press-and-move interaction. Negative offsets are upward.
#[derive(Debug, Clone, Default)]
pub struct GestureInputAdapter {
    dragging: bool,
    springing: bool,
    offset: f32,
}

impl GestureInputAdapter {
    /// Press began. Ignored while the engine is busy.
    pub fn begin(&mut self, engine_idle: bool) {
        if !engine_idle {
            return;
        }
        self.dragging = true;
        self.springing = false;
        self.offset = 0.0;
    }

    /// Accumulate a drag delta. Ignored unless a press is active and the
    /// engine is idle.
    pub fn move_by(&mut self, dy: f32, engine_idle: bool) {
        if self.dragging && engine_idle {
            self.offset += dy;
        }
    }

    /// Press released. Returns `true` when the accumulated upward
    /// distance exceeds the threshold and the engine is idle -- the one
    /// discrete trigger of a flip. Otherwise the offset springs back.
    pub fn release(&mut self, engine_idle: bool) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;

        let triggered = engine_idle && -self.offset > SWIPE_TRIGGER_DISTANCE;
        if triggered {
            self.offset = 0.0;
        } else if self.offset != 0.0 {
            self.springing = true;
        }
        triggered
    }

    /// Advance the spring-back animation one tick.
    pub fn tick(&mut self) {
        if !self.springing {
            return;
        }
        self.offset *= SPRING_DECAY;
        if self.offset.abs() < REST_EPSILON {
            self.offset = 0.0;
            self.springing = false;
        }
    }

    /// Current visual offset in points (negative = above rest).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether a press is currently active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_past_threshold_triggers() {
        let mut g = GestureInputAdapter::default();
        g.begin(true);
        g.move_by(-60.0, true);
        assert!(g.release(true));
        assert_eq!(g.offset(), 0.0);
    }

    #[test]
    fn test_short_swipe_springs_back() {
        let mut g = GestureInputAdapter::default();
        g.begin(true);
        g.move_by(-30.0, true);
        assert!(!g.release(true));

        // Offset decays toward rest over ticks
        let before = g.offset().abs();
        g.tick();
        assert!(g.offset().abs() < before);
        for _ in 0..20 {
            g.tick();
        }
        assert_eq!(g.offset(), 0.0);
    }

    #[test]
    fn test_downward_swipe_never_triggers() {
        let mut g = GestureInputAdapter::default();
        g.begin(true);
        g.move_by(80.0, true);
        assert!(!g.release(true));
    }

    #[test]
    fn test_exact_threshold_does_not_trigger() {
        let mut g = GestureInputAdapter::default();
        g.begin(true);
        g.move_by(-SWIPE_TRIGGER_DISTANCE, true);
        assert!(!g.release(true));
    }

    #[test]
    fn test_input_ignored_while_engine_busy() {
        let mut g = GestureInputAdapter::default();
        g.begin(false);
        g.move_by(-100.0, false);
        assert_eq!(g.offset(), 0.0);
        assert!(!g.release(false));
    }

    #[test]
    fn test_release_while_busy_does_not_trigger() {
        let mut g = GestureInputAdapter::default();
        g.begin(true);
        g.move_by(-100.0, true);
        // Engine became busy between move and release
        assert!(!g.release(false));
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut g = GestureInputAdapter::default();
        assert!(!g.release(true));
    }
}
