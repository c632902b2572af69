//! Five-pointed star inscribed in a circle.
//!
//! Outer point `i` sits on the base circle at `72·i − 90` degrees (the first one at the top of the
//! screen), star line `i` joins outer point `i` to outer point `i + 2`, and inner point `i` is where
//! star lines `i` and `i + 4` cross. The arm ("point triangle") `j` is spanned by outer point `j`
//! and inner points `j` and `j + 4`; all indices are mod 5.

#[cfg(test)]
mod tests;

use log::{debug, trace};
use serde::Serialize;

use crate::{
    circle::Circle,
    contains::Contains,
    error::ConstructionError,
    line::Line,
    math::deg,
    pentagon::Pentagon,
    r2::R2,
    triangle::Triangle,
};

/// Number of points on the star.
pub const POINTS: usize = 5;

/// Classification code for points outside every arm.
pub const OUTSIDE: u8 = 0;

/// Fully-constructed pentagram. Built in one pass by [`Pentagram::new`], immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pentagram {
    base: Circle,
    outer: [R2<f64>; POINTS],
    lines: [Line; POINTS],
    inner: [R2<f64>; POINTS],
}

impl Pentagram {
    pub fn new(base: Circle) -> Result<Self, ConstructionError> {
        base.validate()?;
        debug!("Pentagram from base {}", base);

        let outer: [R2<f64>; POINTS] = std::array::from_fn(|idx| {
            let theta = Self::outer_angle(idx);
            let p = base.point_at(theta);
            debug!("Pentagram, outer {}: {} degrees, {}", idx, theta, p);
            p
        });

        let lines: [Line; POINTS] = std::array::from_fn(|idx| {
            let line = Line::new(outer[idx], outer[(idx + 2) % POINTS]);
            debug!("Pentagram, line {}: {} -> {}", idx, line.a, line.b);
            line
        });

        let mut inner = [R2::default(); POINTS];
        for (idx, p) in inner.iter_mut().enumerate() {
            *p = lines[idx]
                .intersect(&lines[(idx + 4) % POINTS])
                .map_err(|source| ConstructionError::Intersection { idx, source })?;
            debug!("Pentagram, inner {}: {}", idx, p);
        }

        Ok(Pentagram { base, outer, lines, inner })
    }

    /// Angle (degrees, in `[0, 360)`) of outer point `idx` around the base circle's center.
    pub fn outer_angle(idx: usize) -> f64 {
        deg::normalize(360. / POINTS as f64 * idx as f64 - 90.)
    }

    pub fn base(&self) -> &Circle {
        &self.base
    }

    pub fn outer(&self) -> &[R2<f64>; POINTS] {
        &self.outer
    }

    pub fn lines(&self) -> &[Line; POINTS] {
        &self.lines
    }

    pub fn inner(&self) -> &[R2<f64>; POINTS] {
        &self.inner
    }

    /// Arm `j`: outer point `j` with inner points `j` and `j + 4`.
    ///
    /// Panics if `j >= POINTS`.
    pub fn point_triangle(&self, j: usize) -> Triangle {
        Triangle::new(self.outer[j], self.inner[j], self.inner[(j + 4) % POINTS])
    }

    pub fn point_triangles(&self) -> [Triangle; POINTS] {
        std::array::from_fn(|j| self.point_triangle(j))
    }

    /// The pentagon at the star's center, bounded by the five inner points.
    pub fn inner_pentagon(&self) -> Pentagon {
        Pentagon::new(self.inner)
    }

    /// `j + 1` for the first arm `j` (in index order) containing `p`, [`OUTSIDE`] if none does.
    ///
    /// Arms are tested in order 0..5, so if rounding ever made two of them overlap the lower
    /// index wins.
    pub fn classify(&self, p: &R2<f64>) -> u8 {
        first_containing(p, &self.point_triangles()).map_or(OUTSIDE, |j| j as u8 + 1)
    }
}

/// Index of the first triangle containing `p`; earlier triangles win where they overlap.
pub fn first_containing(p: &R2<f64>, triangles: &[Triangle]) -> Option<usize> {
    triangles.iter().position(|triangle| {
        let inside = triangle.contains(p);
        trace!("{} inside {}: {}", p, triangle, inside);
        inside
    })
}

/// Whole-star membership: any arm, or the inner pentagon.
impl Contains<R2<f64>> for Pentagram {
    fn contains(&self, p: &R2<f64>) -> bool {
        self.classify(p) != OUTSIDE || self.inner_pentagon().contains(p)
    }
}

pub fn build_pentagram(center: R2<f64>, radius: f64) -> Result<Pentagram, ConstructionError> {
    Pentagram::new(Circle::new(center, radius)?)
}

pub fn classify_point(p: &R2<f64>, pentagram: &Pentagram) -> u8 {
    pentagram.classify(p)
}
