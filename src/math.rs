//! Mathematical utilities for the sunrise equation.
//!
//! The equation is stated in degrees throughout, so besides the usual
//! std/libm dispatch this module offers degree-based trigonometry.

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    normalize_into(degrees, 360.0)
}

/// Normalizes a time of day in hours to the range [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    normalize_into(hours, 24.0)
}

fn normalize_into(value: f64, period: f64) -> f64 {
    let normalized = value % period;
    if normalized < 0.0 {
        // -1e-17 % 24.0 + 24.0 rounds up to exactly 24.0
        let wrapped = normalized + period;
        if wrapped >= period { 0.0 } else { wrapped }
    } else {
        normalized
    }
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arc tangent in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Arc cosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_hours_0_to_24() {
        assert_eq!(normalize_hours_0_to_24(0.0), 0.0);
        assert_eq!(normalize_hours_0_to_24(24.0), 0.0);
        assert_eq!(normalize_hours_0_to_24(25.5), 1.5);
        assert_eq!(normalize_hours_0_to_24(-1.5), 22.5);
        assert_eq!(normalize_hours_0_to_24(-1e-17), 0.0);
        assert!(normalize_hours_0_to_24(23.999_999) < 24.0);
    }

    #[test]
    fn test_degree_trigonometry() {
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(180.0) + 1.0).abs() < EPSILON);
        assert!((tan_deg(45.0) - 1.0).abs() < EPSILON);
        assert!((atan_deg(1.0) - 45.0).abs() < EPSILON);
        assert!((acos_deg(0.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(-0.5), -1.0);
        assert_eq!(floor(1.9), 1.0);
    }
}
