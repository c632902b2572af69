use itertools::Itertools;
use log::trace;

use crate::{
    circle::Circle,
    distance::Distance,
    math::angle::angular_distance_between_lines,
    pentagon::Pentagon,
    r2::R2,
    shape::Shape,
    triangle::Triangle,
};

pub trait Contains<O> {
    fn contains(&self, o: &O) -> bool;
}

/// Clockwise-angle-sweep membership test for a convex polygon (≥ 3 vertices, either winding).
///
/// The winding is read from the sign of the shoelace sum (positive is counter-clockwise on screen,
/// y down) and the polygon is walked in reverse when needed. Degenerate (zero-area) polygons fall
/// back to the angle at the first vertex. Then, for every oriented edge `start → end`,
/// the direction to `p` (seen from `start`) must be at most 180° counter-clockwise of the
/// direction to `end`.
///
/// A point on an edge's line, behind the edge's start vertex, measures exactly 180° and passes
/// that edge; it always lies outside a neighboring edge of a non-degenerate polygon, so the result
/// is unaffected. Points exactly on the boundary may go either way under rounding.
///
/// Panics if fewer than 3 vertices are given.
pub fn sweep_contains(p: &R2<f64>, vertices: &[R2<f64>]) -> bool {
    let n = vertices.len();
    assert!(n >= 3, "Convex polygon must have at least 3 vertices, got {}", n);
    let twice_area: f64 = vertices
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    let clockwise = if twice_area != 0. {
        twice_area < 0.
    } else {
        angular_distance_between_lines(&vertices[0], &vertices[1], &vertices[n - 1]) <= 180.
    };
    if !clockwise {
        trace!("sweep_contains: reversed for clockwise");
    }
    let vertex = |idx: usize| if clockwise || idx == 0 { vertices[idx] } else { vertices[n - idx] };
    (0..n)
        .map(vertex)
        .circular_tuple_windows::<(_, _)>()
        .enumerate()
        .all(|(idx, (start, end))| {
            let theta = angular_distance_between_lines(&start, &end, p);
            trace!("sweep_contains: edge {} ({} -> {}) theta={}", idx, start, end, theta);
            theta <= 180.
        })
}

/// Boundary-inclusive distance test.
impl Contains<R2<f64>> for Circle {
    fn contains(&self, p: &R2<f64>) -> bool {
        p.distance(&self.c) <= self.r
    }
}

impl Contains<R2<f64>> for Triangle {
    fn contains(&self, p: &R2<f64>) -> bool {
        sweep_contains(p, &self.vertices())
    }
}

impl Contains<R2<f64>> for Pentagon {
    fn contains(&self, p: &R2<f64>) -> bool {
        sweep_contains(p, &self.vertices)
    }
}

impl Contains<R2<f64>> for Shape {
    fn contains(&self, p: &R2<f64>) -> bool {
        match self {
            Shape::Circle(c) => c.contains(p),
            Shape::Triangle(t) => t.contains(p),
            Shape::Pentagon(pentagon) => pentagon.contains(p),
        }
    }
}
