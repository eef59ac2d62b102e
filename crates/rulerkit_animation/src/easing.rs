//! Easing functions for scroll animations

/// Easing function type
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Scroll-view style exponential deceleration. The rate is the per-unit
    /// velocity retention factor, in (0, 1); smaller rates stop harder.
    Decelerate(f32),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Decelerate(0.1)
    }
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Decelerate(rate) => {
                let r = rate.clamp(1e-3, 0.999);
                (1.0 - r.powf(t)) / (1.0 - r)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Decelerate(0.1),
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in CURVES {
            assert!((easing.apply(0.0)).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in CURVES {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn decelerate_front_loads_progress() {
        // Most of the travel happens in the first half of the animation
        let d = Easing::Decelerate(0.1);
        assert!(d.apply(0.5) > 0.6);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }
}
