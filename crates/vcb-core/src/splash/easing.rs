//! Easing curves for the intro animation.

/// A CSS-style cubic Bézier timing function through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Radial reveal curve of the exit animation.
pub const REVEAL: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

/// CSS `ease-out`, used by the staged fade-ins.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(t: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    }

    /// Eased value for linear progress `x`, clamped to `[0, 1]`.
    pub fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x <= 0.0 || x >= 1.0 {
            return x;
        }
        // x(t) is monotonic for control points inside [0, 1].
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        let mut t = x;
        for _ in 0..32 {
            let estimate = Self::component(t, self.x1, self.x2);
            if (estimate - x).abs() < 1e-6 {
                break;
            }
            if estimate < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        Self::component(t, self.y1, self.y2).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for curve in [REVEAL, EASE_OUT] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
            assert_eq!(curve.apply(-3.0), 0.0);
            assert_eq!(curve.apply(7.0), 1.0);
        }
    }

    #[test]
    fn reveal_front_loads_progress() {
        assert!(REVEAL.apply(0.25) > 0.6);
    }

    #[test]
    fn curves_are_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = REVEAL.apply(step as f32 / 100.0);
            assert!(value + 1e-4 >= previous);
            previous = value;
        }
    }

    #[test]
    fn linear_control_points_are_identity() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        assert!((linear.apply(0.4) - 0.4).abs() < 1e-3);
    }
}
