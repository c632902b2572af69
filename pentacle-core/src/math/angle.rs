//! Direction and angular-distance primitives, in degrees.
//!
//! Angles follow the screen convention used throughout the crate: x grows rightward, y grows
//! downward, and `atan2(Δy, Δx)` is read directly on that flipped axis. An angle of 90° therefore
//! points "down" the screen.

use crate::{math::deg::{normalize, Deg}, r2::R2};

/// Direction from `p1` to `p2`, in `[0, 360)`.
///
/// Vertical segments are resolved without dividing: 90° when `p2` is below `p1` (larger y), 270°
/// when it is above. Coincident points have no direction and report 0°.
pub fn angle_between_points(p1: &R2<f64>, p2: &R2<f64>) -> f64 {
    let rise = p2.y - p1.y;
    let run = p2.x - p1.x;
    if run == 0. {
        return if rise > 0. {
            90.
        } else if rise < 0. {
            270.
        } else {
            0.
        };
    }
    normalize(rise.atan2(run).deg())
}

/// `a2 − a1`, brought into `[0, 360)` by repeated addition/subtraction of 360.
///
/// A result `>= 180` means `a2` is closer to `a1` going counter-clockwise; `< 180` means the
/// clockwise path is the shorter one.
pub fn angular_distance(a1: f64, a2: f64) -> f64 {
    normalize(a2 - a1)
}

/// Angular distance, seen from `origin`, from the direction towards `p2` to the direction towards
/// `p1`.
pub fn angular_distance_between_lines(origin: &R2<f64>, p1: &R2<f64>, p2: &R2<f64>) -> f64 {
    let angle1 = angle_between_points(origin, p1);
    let angle2 = angle_between_points(origin, p2);
    angular_distance(angle2, angle1)
}
