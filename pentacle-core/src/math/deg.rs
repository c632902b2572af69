use std::f64::consts::PI;

pub trait Deg {
    /// Radians → degrees.
    fn deg(&self) -> Self;
    /// Degrees → radians.
    fn rad(&self) -> Self;
}

impl Deg for f64 {
    fn deg(&self) -> f64 {
        self * 180.0 / PI
    }
    fn rad(&self) -> f64 {
        self * PI / 180.0
    }
}

/// Bring an angle (in degrees) into `[0, 360)` by repeated addition/subtraction of a full turn.
///
/// Angles of 720° or more in magnitude are first reduced with `rem_euclid`. Non-finite input is
/// returned unchanged.
pub fn normalize(theta: f64) -> f64 {
    if !theta.is_finite() {
        return theta;
    }
    let mut theta = if theta.abs() >= 720. { theta.rem_euclid(360.) } else { theta };
    while theta >= 360. {
        theta -= 360.;
    }
    while theta < 0. {
        theta += 360.;
    }
    // A tiny negative angle plus 360 rounds up to 360.
    if theta >= 360. {
        0.
    } else {
        theta
    }
}

/// `(sin, cos)` of an angle given in degrees.
///
/// Exact multiples of 90° produce exact `0`/`±1`, so points placed on a circle at cardinal
/// angles land exactly on the circle's axis lines.
pub fn sin_cos(theta: f64) -> (f64, f64) {
    let normalized = normalize(theta);
    if normalized == 0. {
        (0., 1.)
    } else if normalized == 90. {
        (1., 0.)
    } else if normalized == 180. {
        (0., -1.)
    } else if normalized == 270. {
        (-1., 0.)
    } else {
        normalized.rad().sin_cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        assert_relative_eq!(PI.deg(), 180.);
        assert_relative_eq!(90f64.rad(), PI / 2.);
        assert_relative_eq!(123.4f64.rad().deg(), 123.4, epsilon = 1e-12);
    }

    #[test]
    fn normalize_into_range() {
        assert_eq!(normalize(-90.), 270.);
        assert_eq!(normalize(360.), 0.);
        assert_eq!(normalize(720. + 18.), 18.);
        assert_eq!(normalize(-720.), 0.);
        assert_eq!(normalize(359.5), 359.5);
        assert!(normalize(f64::NAN).is_nan());
    }

    #[test]
    fn normalize_stays_below_full_turn() {
        assert_eq!(normalize(-1e-300), 0.);
        assert_eq!(normalize(-1e-20), 0.);
        let tiny = normalize(-1e-10);
        assert!((0. ..360.).contains(&tiny), "{}", tiny);
    }

    #[test]
    fn normalize_large_magnitudes() {
        assert_eq!(normalize(1e300), 1e300f64.rem_euclid(360.));
        assert!((0. ..360.).contains(&normalize(1e300)));
        assert!((0. ..360.).contains(&normalize(-1e300)));
        assert!((0. ..360.).contains(&normalize(f64::MAX)));
        assert_eq!(normalize(720. + 18.), 18.);
        assert_eq!(normalize(-3600. - 90.), 270.);
        let (sin, cos) = sin_cos(1e300);
        assert!(sin.is_finite() && cos.is_finite());
    }

    #[test]
    fn cardinal_sin_cos_are_exact() {
        assert_eq!(sin_cos(0.), (0., 1.));
        assert_eq!(sin_cos(90.), (1., 0.));
        assert_eq!(sin_cos(-180.), (0., -1.));
        assert_eq!(sin_cos(-90.), (-1., 0.));
    }

    #[test]
    fn non_cardinal_sin_cos() {
        let (sin, cos) = sin_cos(30.);
        assert_relative_eq!(sin, 0.5, epsilon = 1e-12);
        assert_relative_eq!(cos, 3f64.sqrt() / 2., epsilon = 1e-12);
        let (sin, cos) = sin_cos(342.);
        assert_relative_eq!(sin, -(18f64.rad().sin()), epsilon = 1e-12);
        assert_relative_eq!(cos, 18f64.rad().cos(), epsilon = 1e-12);
    }
}
