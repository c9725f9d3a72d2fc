//! Eased scroll animation for nav activation.
//!
//! The animation is a fixed frame count stepped once per runtime tick, so
//! the event loop's tick cadence is the only clock. Each step yields the
//! next scroll offset; the final step lands exactly on the target.

/// Frames a nav-activation scroll takes at the runtime's fast tick.
pub const SCROLL_ANIMATION_FRAMES: u32 = 18;

/// An in-flight scroll transition between two row offsets.
///
/// Starting a new transition replaces any live one; a manual scroll cancels
/// it outright. Both directions are supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: usize,
    target: usize,
    frame: u32,
    frames_total: u32,
}

impl ScrollAnimation {
    /// Starts a transition from `from` to `target` over the default frame
    /// budget.
    pub fn new(from: usize, target: usize) -> Self {
        Self::with_frames(from, target, SCROLL_ANIMATION_FRAMES)
    }

    /// Starts a transition with an explicit frame budget (clamped to at
    /// least one frame).
    pub fn with_frames(from: usize, target: usize, frames_total: u32) -> Self {
        Self {
            from,
            target,
            frame: 0,
            frames_total: frames_total.max(1),
        }
    }

    /// Destination offset of this transition.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Advances one frame and returns the new scroll offset.
    pub fn advance(&mut self) -> usize {
        self.frame = (self.frame + 1).min(self.frames_total);
        if self.frame == self.frames_total {
            return self.target;
        }

        let t = self.frame as f64 / self.frames_total as f64;
        let eased = ease_out_cubic(t);
        let from = self.from as f64;
        let target = self.target as f64;
        (from + (target - from) * eased).round() as usize
    }

    /// Whether the transition has landed on its target.
    pub fn is_finished(&self) -> bool {
        self.frame >= self.frames_total
    }
}

/// Fast start, gentle landing.
fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(mut animation: ScrollAnimation) -> Vec<usize> {
        let mut offsets = Vec::new();
        while !animation.is_finished() {
            offsets.push(animation.advance());
        }
        offsets
    }

    #[test]
    fn lands_exactly_on_target() {
        let offsets = run_to_completion(ScrollAnimation::new(0, 137));
        assert_eq!(offsets.last().copied(), Some(137));
    }

    #[test]
    fn scrolling_down_is_monotonic() {
        let offsets = run_to_completion(ScrollAnimation::new(10, 400));
        for pair in offsets.windows(2) {
            assert!(pair[0] <= pair[1], "offsets regressed: {:?}", pair);
        }
    }

    #[test]
    fn scrolling_up_is_monotonic() {
        let offsets = run_to_completion(ScrollAnimation::new(400, 10));
        for pair in offsets.windows(2) {
            assert!(pair[0] >= pair[1], "offsets regressed: {:?}", pair);
        }
    }

    #[test]
    fn zero_distance_finishes_immediately_on_target() {
        let mut animation = ScrollAnimation::new(50, 50);
        assert_eq!(animation.advance(), 50);
        // A single-frame hop is still a valid transition.
        let mut hop = ScrollAnimation::with_frames(0, 9, 1);
        assert_eq!(hop.advance(), 9);
        assert!(hop.is_finished());
    }

    #[test]
    fn frame_budget_bounds_the_step_count() {
        let offsets = run_to_completion(ScrollAnimation::new(0, 1000));
        assert_eq!(offsets.len(), SCROLL_ANIMATION_FRAMES as usize);
    }
}
