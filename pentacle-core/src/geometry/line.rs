use std::fmt::{self, Display, Formatter};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{error::GeometryError, math::is_zero::IsZero, r2::R2};

/// A line through two points. Shapes hold copies of their endpoints, not references.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: R2<f64>,
    pub b: R2<f64>,
}

/// `y = m·x + c`, or `x = x` for lines with no run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LineEquation {
    Sloped { m: f64, c: f64 },
    Vertical { x: f64 },
}

impl Line {
    pub fn new(a: R2<f64>, b: R2<f64>) -> Self {
        Line { a, b }
    }

    pub fn equation(&self) -> Result<LineEquation, GeometryError> {
        let rise = self.b.y - self.a.y;
        let run = self.b.x - self.a.x;
        if run.is_zero() {
            if rise.is_zero() {
                return Err(GeometryError::DegenerateLine(self.a));
            }
            return Ok(LineEquation::Vertical { x: self.a.x });
        }
        let m = rise / run;
        let c = self.a.y - m * self.a.x;
        let equation = LineEquation::Sloped { m, c };
        trace!("Equation for line {} -> {} is {}", self.a, self.b, equation);
        Ok(equation)
    }

    /// Intersection of the two infinite lines through `self` and `o`.
    pub fn intersect(&self, o: &Line) -> Result<R2<f64>, GeometryError> {
        self.equation()?.intersect(&o.equation()?)
    }
}

impl LineEquation {
    /// `y` at the given `x`; `None` for vertical lines.
    pub fn at_x(&self, x: f64) -> Option<f64> {
        match self {
            LineEquation::Sloped { m, c } => Some(m * x + c),
            LineEquation::Vertical { .. } => None,
        }
    }

    pub fn intersect(&self, o: &LineEquation) -> Result<R2<f64>, GeometryError> {
        use LineEquation::*;
        let p = match (*self, *o) {
            (Sloped { m: m1, c: c1 }, Sloped { m: m2, c: c2 }) => {
                if (m2 - m1).is_zero() {
                    return Err(if (c2 - c1).is_zero() {
                        GeometryError::Coincident
                    } else {
                        GeometryError::Parallel { m: m1 }
                    });
                }
                R2 {
                    x: (c1 - c2) / (m2 - m1),
                    y: (m1 * c2 - m2 * c1) / (m1 - m2),
                }
            }
            (Vertical { x }, Sloped { m, c }) | (Sloped { m, c }, Vertical { x }) => R2 { x, y: m * x + c },
            (Vertical { x: x1 }, Vertical { x: x2 }) => {
                return Err(if x1 == x2 {
                    GeometryError::Coincident
                } else {
                    GeometryError::Parallel { m: f64::INFINITY }
                });
            }
        };
        if !p.is_finite() {
            return Err(GeometryError::NonFinite(p));
        }
        Ok(p)
    }
}

impl Display for LineEquation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LineEquation::Sloped { m, c } => write!(f, "y = {:.2}x + {:.2}", m, c),
            LineEquation::Vertical { x } => write!(f, "x = {:.2}", x),
        }
    }
}
