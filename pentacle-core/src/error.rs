use crate::r2::R2;

/// Geometry that has no well-defined answer: zero-length lines, parallel or coincident lines,
/// intersections outside the representable range.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Degenerate line: both endpoints at {0}")]
    DegenerateLine(R2<f64>),

    #[error("Lines are parallel (slope {m}), no intersection")]
    Parallel { m: f64 },

    #[error("Lines are coincident, intersection is not a single point")]
    Coincident,

    #[error("Intersection is not finite: {0}")]
    NonFinite(R2<f64>),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("Base circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Base circle center must be finite, got {0}")]
    NonFiniteCenter(R2<f64>),

    #[error("Inner point {idx}: {source}")]
    Intersection {
        idx: usize,
        #[source]
        source: GeometryError,
    },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Grid of side {side} needs {expected} cells, got {actual}")]
    CellCount {
        side: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Grid of side {side} has more cells than can be allocated")]
    TooLarge { side: usize },

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
