//! Geometry primitives shared by the extractor and the renderers.
//!
//! Angles throughout the crate are counter-clockwise degrees, stored as
//! `Option<f64>` where `None` means "no rotation given". The distinction
//! matters: an absent angle is an identity shortcut, not a 0° computation,
//! so the common unrotated case picks up no floating-point noise.

/// Rotates a point counter-clockwise about the origin.
///
/// `angle` is in degrees. `None` returns the point unchanged.
#[must_use]
pub fn rotate(point: (f64, f64), angle: Option<f64>) -> (f64, f64) {
    let Some(degrees) = angle else {
        return point;
    };
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let (x, y) = point;
    (x * cos - y * sin, x * sin + y * cos)
}

/// Parses a decimal attribute value, accepting only finite numbers.
///
/// Returns `None` for non-numeric text, NaN and infinities. Callers wrap
/// the `None` into an attribute error naming the attribute.
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: (f64, f64), b: (f64, f64)) {
        assert!((a.0 - b.0).abs() < 1e-9, "x: {} vs {}", a.0, b.0);
        assert!((a.1 - b.1).abs() < 1e-9, "y: {} vs {}", a.1, b.1);
    }

    #[test]
    fn none_is_identity() {
        assert_eq!(rotate((1.25, -3.5), None), (1.25, -3.5));
    }

    #[test]
    fn quarter_turn_ccw() {
        assert_close(rotate((1.0, 0.0), Some(90.0)), (0.0, 1.0));
        assert_close(rotate((0.0, 1.0), Some(90.0)), (-1.0, 0.0));
    }

    #[test]
    fn half_turn() {
        assert_close(rotate((2.0, 1.0), Some(180.0)), (-2.0, -1.0));
    }

    #[test]
    fn full_turn_is_periodic() {
        let p = (3.0, -4.0);
        let once = rotate(p, Some(37.0));
        let wrapped = rotate(p, Some(37.0 + 360.0));
        assert_close(once, wrapped);
    }

    #[test]
    fn parse_finite_accepts_decimals() {
        assert_eq!(parse_finite("12.5"), Some(12.5));
        assert_eq!(parse_finite(" -0.25 "), Some(-0.25));
    }

    #[test]
    fn parse_finite_rejects_garbage() {
        assert_eq!(parse_finite("abc"), None);
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
    }
}
