use std::f64::consts::{PI, TAU};

/// Converts an angle in degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Wraps an angle in radians into `[0, 2π)`.
///
/// # Example
/// ```
/// use std::f64::consts::{FRAC_PI_2, PI};
///
/// use turtle_logo::turtle::heading::normalize;
///
/// assert!((normalize(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-9);
/// assert!((normalize(5.0 * PI) - PI).abs() < 1e-9);
/// assert_eq!(normalize(0.0), 0.0);
/// ```
#[must_use]
pub fn normalize(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, TAU};

    use super::*;

    const EPSILON: f64 = 0.001;

    #[test]
    fn conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(-90.0) + PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn normalize_stays_in_range() {
        for degrees in [-1080.0, -765.0, -360.0, -1.0, 0.0, 1.0, 359.999, 360.0, 765.0, 1e6] {
            let radians = normalize(degrees_to_radians(degrees));
            assert!((0.0..TAU).contains(&radians), "{degrees} -> {radians}");
        }
        assert!((normalize(degrees_to_radians(765.0)) - FRAC_PI_4).abs() < EPSILON);
        assert!(normalize(-1e-18) < TAU);
    }
}
