use super::Pose;

/// Concrete visual state for one pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
}

impl Frame {
    pub const REST: Frame = Frame {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    const fn offset(opacity: f64, y: f64, scale: f64) -> Self {
        Self { opacity, y, scale }
    }
}

/// Maps a pose to inline style. The visible frame is always `Frame::REST`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub hidden: Frame,
    pub duration: f64,
    pub easing: &'static str,
}

const EASE_OUT: &str = "ease-out";
// overshoots a little, close enough to a damped spring
const SPRING: &str = "cubic-bezier(0.34, 1.3, 0.64, 1)";

impl Variant {
    pub const fn fade_in_out() -> Self {
        Self {
            hidden: Frame::offset(0.0, 20.0, 1.0),
            duration: 0.6,
            easing: EASE_OUT,
        }
    }

    pub const fn mockup() -> Self {
        Self {
            hidden: Frame::offset(0.0, 0.0, 0.8),
            duration: 0.7,
            easing: SPRING,
        }
    }

    pub const fn fade() -> Self {
        Self {
            hidden: Frame::offset(0.0, 0.0, 1.0),
            duration: 0.6,
            easing: EASE_OUT,
        }
    }

    /// Header drop-in from above the viewport.
    pub const fn slide_down() -> Self {
        Self {
            hidden: Frame::offset(1.0, -100.0, 1.0),
            duration: 0.5,
            easing: SPRING,
        }
    }

    pub fn frame(&self, pose: Pose) -> Frame {
        match pose {
            Pose::Hidden => self.hidden,
            Pose::Visible => Frame::REST,
        }
    }

    pub fn style(&self, pose: Pose) -> String {
        self.style_with_delay(pose, 0.0)
    }

    pub fn style_with_delay(&self, pose: Pose, delay: f64) -> String {
        let frame = self.frame(pose);
        let mut style = format!(
            "opacity: {}; transform: translateY({}px) scale({}); transition: opacity {d}s {e}, transform {d}s {e};",
            frame.opacity,
            frame.y,
            frame.scale,
            d = self.duration,
            e = self.easing,
        );
        if delay > 0.0 {
            style.push_str(&format!(" transition-delay: {}s;", round_ms(delay)));
        }
        style
    }
}

/// Per-child delays for a staggered container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub enter_step: f64,
    pub exit_step: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            enter_step: 0.2,
            exit_step: 0.1,
        }
    }
}

impl Stagger {
    /// Delay for child `index` of `len`. Exits run in reverse order.
    pub fn delay(&self, pose: Pose, index: usize, len: usize) -> f64 {
        if len == 0 || index >= len {
            return 0.0;
        }
        let delay = match pose {
            Pose::Visible => index as f64 * self.enter_step,
            Pose::Hidden => (len - 1 - index) as f64 * self.exit_step,
        };
        round_ms(delay)
    }
}

fn round_ms(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_pose_rests_at_full_opacity() {
        for variant in [
            Variant::fade_in_out(),
            Variant::mockup(),
            Variant::fade(),
            Variant::slide_down(),
        ] {
            assert_eq!(variant.frame(Pose::Visible), Frame::REST);
            let style = variant.style(Pose::Visible);
            assert!(style.starts_with("opacity: 1; transform: translateY(0px) scale(1);"));
        }
    }

    #[test]
    fn fade_in_out_hides_below() {
        let style = Variant::fade_in_out().style(Pose::Hidden);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translateY(20px)"));
    }

    #[test]
    fn mockup_hides_scaled_down() {
        let style = Variant::mockup().style(Pose::Hidden);
        assert!(style.contains("scale(0.8)"));
    }

    #[test]
    fn delay_only_emitted_when_positive() {
        let variant = Variant::fade_in_out();
        assert!(!variant.style(Pose::Visible).contains("transition-delay"));
        assert!(variant
            .style_with_delay(Pose::Visible, 0.4)
            .ends_with("transition-delay: 0.4s;"));
    }

    #[test]
    fn stagger_enters_forward_and_exits_backward() {
        let stagger = Stagger::default();
        let enter: Vec<f64> = (0..3).map(|i| stagger.delay(Pose::Visible, i, 3)).collect();
        let exit: Vec<f64> = (0..3).map(|i| stagger.delay(Pose::Hidden, i, 3)).collect();
        assert_eq!(enter, vec![0.0, 0.2, 0.4]);
        assert_eq!(exit, vec![0.2, 0.1, 0.0]);
    }

    #[test]
    fn stagger_out_of_range_has_no_delay() {
        let stagger = Stagger::default();
        assert_eq!(stagger.delay(Pose::Visible, 5, 3), 0.0);
        assert_eq!(stagger.delay(Pose::Hidden, 0, 0), 0.0);
    }
}
