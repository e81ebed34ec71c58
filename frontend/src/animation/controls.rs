use crate::config::DEFAULT_VIEW_AMOUNT;

/// Animation state a block is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pose {
    #[default]
    Hidden,
    Visible,
}

/// How a block reacts to entering and leaving the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewOptions {
    /// Fraction of the block's box that has to be visible, in `0.0..=1.0`.
    pub amount: f64,
    /// Stay visible after the first entrance.
    pub once: bool,
}

impl ViewOptions {
    pub const fn new(amount: f64, once: bool) -> Self {
        Self { amount, once }
    }

    /// Plays once, as soon as any part of the block shows up.
    pub const fn once() -> Self {
        Self::new(0.0, true)
    }

    /// Replays every time any part of the block enters the viewport.
    pub const fn any() -> Self {
        Self::new(0.0, false)
    }

    pub fn clamped_amount(&self) -> f64 {
        if self.amount.is_nan() {
            return 0.0;
        }
        self.amount.clamp(0.0, 1.0)
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_AMOUNT, false)
    }
}

/// Folds intersection observations into the in-view flag and the pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTracker {
    options: ViewOptions,
    in_view: bool,
    seen: bool,
}

impl ViewportTracker {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            options,
            in_view: false,
            seen: false,
        }
    }

    /// Records one observer entry and returns the resulting pose.
    ///
    /// Entering needs `amount` of the block on screen; once in, the block
    /// counts as in view until it stops intersecting altogether.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> Pose {
        let amount = self.options.clamped_amount();
        self.in_view = if !is_intersecting {
            false
        } else if self.in_view {
            true
        } else {
            // the observer reports ratio 0 on the entering edge when amount is 0
            amount == 0.0 || ratio >= amount
        };
        if self.in_view {
            self.seen = true;
        }
        self.pose()
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn pose(&self) -> Pose {
        if self.in_view || (self.options.once && self.seen) {
            Pose::Visible
        } else {
            Pose::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let tracker = ViewportTracker::new(ViewOptions::default());
        assert_eq!(tracker.pose(), Pose::Hidden);
        assert!(!tracker.in_view());
    }

    #[test]
    fn enters_only_past_the_amount() {
        let mut tracker = ViewportTracker::new(ViewOptions::new(0.3, false));
        assert_eq!(tracker.observe(true, 0.1), Pose::Hidden);
        assert!(!tracker.in_view());
        assert_eq!(tracker.observe(true, 0.3), Pose::Visible);
        assert!(tracker.in_view());
    }

    #[test]
    fn leaving_reverts_repeatable_blocks() {
        let mut tracker = ViewportTracker::new(ViewOptions::default());
        tracker.observe(true, 0.9);
        assert_eq!(tracker.observe(false, 0.0), Pose::Hidden);
        assert_eq!(tracker.observe(true, 0.5), Pose::Visible);
    }

    #[test]
    fn dropping_below_amount_keeps_block_visible() {
        let mut tracker = ViewportTracker::new(ViewOptions::default());
        assert_eq!(tracker.observe(true, 0.5), Pose::Visible);
        assert_eq!(tracker.observe(true, 0.2), Pose::Visible);
        assert!(tracker.in_view());
        assert_eq!(tracker.observe(false, 0.0), Pose::Hidden);
        assert_eq!(tracker.observe(true, 0.2), Pose::Hidden);
    }

    #[test]
    fn once_blocks_stay_visible() {
        let mut tracker = ViewportTracker::new(ViewOptions::once());
        assert_eq!(tracker.observe(false, 0.0), Pose::Hidden);
        assert_eq!(tracker.observe(true, 0.0), Pose::Visible);
        assert_eq!(tracker.observe(false, 0.0), Pose::Visible);
        assert!(!tracker.in_view());
    }

    #[test]
    fn zero_amount_needs_an_intersection() {
        let mut tracker = ViewportTracker::new(ViewOptions::any());
        assert_eq!(tracker.observe(false, 0.0), Pose::Hidden);
        assert_eq!(tracker.observe(true, 0.0), Pose::Visible);
    }

    #[test]
    fn amount_is_clamped() {
        assert_eq!(ViewOptions::new(1.5, false).clamped_amount(), 1.0);
        assert_eq!(ViewOptions::new(-0.2, false).clamped_amount(), 0.0);
        assert_eq!(ViewOptions::new(f64::NAN, false).clamped_amount(), 0.0);
    }
}
