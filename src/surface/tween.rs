//! Time-driven interpolation of a single visual attribute.
//!
//! Times are seconds on a monotonic clock (egui's `InputState::time`).

/// Cubic in-out easing, matching d3's default transition ease.
pub fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// One animated scalar. Retargeting mid-flight starts from the value currently
/// shown, so the most recent target always wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: f64,
    duration: f64,
}

impl Tween {
    /// A tween already resting at `value`.
    pub fn fixed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    pub fn value_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = ((now - self.start) / self.duration) as f32;
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }

    pub fn retarget(&mut self, to: f32, now: f64, duration: f64) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }

    /// Final value of the current transition.
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.duration > 0.0 && now < self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn runs_from_start_to_target() {
        let mut tw = Tween::fixed(0.0);
        tw.retarget(100.0, 10.0, 1.0);
        assert_eq!(tw.value_at(10.0), 0.0);
        assert!((tw.value_at(10.5) - 50.0).abs() < 1e-3);
        assert_eq!(tw.value_at(11.0), 100.0);
        assert!(tw.is_running(10.2));
        assert!(!tw.is_running(11.0));
    }

    #[test]
    fn latest_retarget_wins() {
        let mut tw = Tween::fixed(0.0);
        tw.retarget(100.0, 0.0, 1.0);
        let mid = tw.value_at(0.5);
        tw.retarget(-20.0, 0.5, 1.0);
        assert_eq!(tw.value_at(0.5), mid);
        assert_eq!(tw.value_at(1.5), -20.0);
        assert_eq!(tw.target(), -20.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tw = Tween::fixed(3.0);
        tw.retarget(7.0, 1.0, 0.0);
        assert_eq!(tw.value_at(1.0), 7.0);
        assert!(!tw.is_running(1.0));
    }
}
