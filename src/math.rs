//! Vector helpers on top of [`glam::Vec2`].
//!
//! `glam` already provides arithmetic, `dot`, `perp` (`(-y, x)`), `perp_dot` and
//! `length`. The solver additionally needs a normalization that never divides by a
//! vanishing length and a rotation by a raw angle, which [`Vec2Ext`] adds.

pub use glam::Vec2;

/// Vectors shorter than this normalize to [`Vec2::ZERO`].
pub const NORMALIZE_EPSILON: f32 = 1e-8;

pub trait Vec2Ext {
    /// Unit vector in the same direction, or the zero vector if the length is below
    /// [`NORMALIZE_EPSILON`].
    fn normalized(self) -> Vec2;

    /// Rotates counter-clockwise by `angle` radians.
    fn rotated(self, angle: f32) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            self * (1.0 / len)
        } else {
            Vec2::ZERO
        }
    }

    fn rotated(self, angle: f32) -> Vec2 {
        let (s, c) = angle.sin_cos();
        Vec2::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalized_tiny_vector_is_zero() {
        assert_eq!(Vec2::new(1e-9, 0.0).normalized(), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn test_normalized_has_unit_length() {
        let n = Vec2::new(3.0, -4.0).normalized();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(n.y, -0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_perp_is_counter_clockwise() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.perp(), Vec2::new(-2.0, 1.0));
        assert_eq!(v.dot(v.perp()), 0.0);
    }

    #[test]
    fn test_rotated_quarter_turn_matches_perp() {
        let v = Vec2::new(0.3, -1.7);
        let r = v.rotated(std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(r.x, v.perp().x, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, v.perp().y, epsilon = 1e-6);
    }
}
