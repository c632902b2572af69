use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::r2::R2;

/// A convex pentagon; vertices in order around the boundary, either winding.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pentagon {
    pub vertices: [R2<f64>; 5],
}

impl Pentagon {
    pub fn new(vertices: [R2<f64>; 5]) -> Self {
        Pentagon { vertices }
    }

    pub fn centroid(&self) -> R2<f64> {
        self.vertices.iter().fold(R2::default(), |acc, v| acc + *v) / 5.
    }

    /// Unsigned area (shoelace).
    pub fn area(&self) -> f64 {
        self.vertices
            .iter()
            .circular_tuple_windows::<(_, _)>()
            .map(|(p, q)| p.x * q.y - q.x * p.y)
            .sum::<f64>()
            .abs()
            / 2.
    }
}

impl Display for Pentagon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Pentagon {{ {} }}", self.vertices.iter().join(" -> "))
    }
}
