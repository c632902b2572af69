use std::fmt::{self, Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{circle::Circle, error::ConstructionError, math::deg, r2::R2};

/// Three vertices in no particular winding order.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: R2<f64>,
    pub b: R2<f64>,
    pub c: R2<f64>,
}

impl Triangle {
    pub fn new(a: R2<f64>, b: R2<f64>, c: R2<f64>) -> Self {
        Triangle { a, b, c }
    }

    /// Equilateral triangle inscribed in `base`; vertex `i` sits at `90 − 120·i` degrees.
    pub fn inscribed(base: &Circle) -> Result<Self, ConstructionError> {
        base.validate()?;
        let [a, b, c] = std::array::from_fn(|idx| {
            let theta = deg::normalize(90. - 120. * idx as f64);
            let p = base.point_at(theta);
            debug!("Triangle vertex {}: {} degrees, {}", idx, theta, p);
            p
        });
        Ok(Triangle { a, b, c })
    }

    pub fn vertices(&self) -> [R2<f64>; 3] {
        [self.a, self.b, self.c]
    }

    pub fn centroid(&self) -> R2<f64> {
        (self.a + self.b + self.c) / 3.
    }

    /// Unsigned area (shoelace).
    pub fn area(&self) -> f64 {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        (ab.x * ac.y - ab.y * ac.x).abs() / 2.
    }
}

impl Display for Triangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle {{ {} -> {} -> {} }}", self.a, self.b, self.c)
    }
}
