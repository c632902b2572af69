use std::{f64::consts::PI, fmt::{self, Display, Formatter}};

use serde::{Deserialize, Serialize};

use crate::{error::ConstructionError, math::deg, r2::R2};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub c: R2<f64>,
    pub r: f64,
}

impl Circle {
    pub fn new(c: R2<f64>, r: f64) -> Result<Self, ConstructionError> {
        let circle = Circle { c, r };
        circle.validate()?;
        Ok(circle)
    }

    /// A usable base for shape construction: finite center, finite positive radius.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if !self.c.is_finite() {
            return Err(ConstructionError::NonFiniteCenter(self.c));
        }
        if !self.r.is_finite() || self.r <= 0. {
            return Err(ConstructionError::InvalidRadius(self.r));
        }
        Ok(())
    }

    /// The point on the circle at angle `theta` (degrees, screen convention).
    pub fn point_at(&self, theta: f64) -> R2<f64> {
        let (sin, cos) = deg::sin_cos(theta);
        R2 {
            x: self.c.x + cos * self.r,
            y: self.c.y + sin * self.r,
        }
    }

    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Circle {{ c: {}, r: {:.3} }}", self.c, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_radius() {
        let c = R2::new(0., 0.);
        assert_eq!(Circle::new(c, 0.), Err(ConstructionError::InvalidRadius(0.)));
        assert_eq!(Circle::new(c, -1.), Err(ConstructionError::InvalidRadius(-1.)));
        assert!(matches!(Circle::new(c, f64::NAN), Err(ConstructionError::InvalidRadius(_))));
        assert!(matches!(Circle::new(c, f64::INFINITY), Err(ConstructionError::InvalidRadius(_))));
    }

    #[test]
    fn rejects_non_finite_center() {
        let c = R2::new(f64::NAN, 0.);
        assert!(matches!(Circle::new(c, 1.), Err(ConstructionError::NonFiniteCenter(_))));
    }

    #[test]
    fn points_on_circle() {
        let circle = Circle::new(R2::new(15.5, 15.5), 12.5).unwrap();
        assert_eq!(circle.point_at(270.), R2::new(15.5, 3.));
        assert_eq!(circle.point_at(90.), R2::new(15.5, 28.));
        assert_eq!(circle.point_at(0.), R2::new(28., 15.5));
        let p = circle.point_at(54.);
        assert_relative_eq!((p - circle.c).norm(), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        let circle = Circle::new(R2::new(1., 2.), 3.).unwrap();
        assert_eq!(circle.to_string(), "Circle { c: (1.000, 2.000), r: 3.000 }");
    }
}
