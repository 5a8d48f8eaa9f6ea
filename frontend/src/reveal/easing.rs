//! Easing curves used by section timelines.
//!
//! Every curve maps progress in [0, 1] to eased progress in [0, 1]. The
//! names accepted by [`Easing::from_name`] are the ones written in the
//! section compositions ("power3.out" and friends).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `1 - (1-t)^3`
    Power2Out,
    /// `1 - (1-t)^4`
    #[default]
    Power3Out,
}

impl Easing {
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "none" | "linear" => Some(Easing::Linear),
            "power2.out" => Some(Easing::Power2Out),
            "power3.out" => Some(Easing::Power3Out),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::Power2Out, Easing::Power3Out];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Easing::Power2Out.apply(0.5) > Easing::Linear.apply(0.5));
        assert!(Easing::Power3Out.apply(0.5) > Easing::Power2Out.apply(0.5));
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Power3Out.apply(-2.0), 0.0);
        assert_eq!(Easing::Power3Out.apply(3.0), 1.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Easing::from_name("power3.out"), Some(Easing::Power3Out));
        assert_eq!(Easing::from_name("power2.out"), Some(Easing::Power2Out));
        assert_eq!(Easing::from_name("none"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("elastic"), None);
    }
}
