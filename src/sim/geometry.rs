//! Vector helpers used by the entity factories

use glam::Vec2;

/// Displacement from `from` to `to`
#[inline]
pub fn vector_to(from: Vec2, to: Vec2) -> Vec2 {
    to - from
}

/// Euclidean length
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`
///
/// Returns `None` for zero-length or non-finite vectors. Spawn targets are
/// never coincident with spawn origins, so callers only hit `None` for
/// degenerate player clicks.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = magnitude(v);
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// Heading from `from` toward `to`, zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    normalize(vector_to(from, to)).unwrap_or(Vec2::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_to() {
        let v = vector_to(Vec2::new(400.0, 440.0), Vec2::new(200.0, 240.0));
        assert_eq!(v, Vec2::new(-200.0, -200.0));
    }

    #[test]
    fn test_magnitude() {
        assert!((magnitude(Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
        assert_eq!(magnitude(Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(Vec2::new(-60.0, 440.0)).unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.x < 0.0 && n.y > 0.0);
    }

    #[test]
    fn test_normalize_zero_is_none() {
        assert!(normalize(Vec2::ZERO).is_none());
        assert!(normalize(Vec2::new(f32::NAN, 1.0)).is_none());
    }

    #[test]
    fn test_direction_to_coincident_points() {
        let p = Vec2::new(400.0, 440.0);
        assert_eq!(direction_to(p, p), Vec2::ZERO);
    }
}
