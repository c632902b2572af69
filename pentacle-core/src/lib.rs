//! Pentagram ("pentacle") geometry: build a five-pointed star inside a circle and classify points
//! by the star arm that contains them.

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod analysis;
pub mod geometry;
pub mod math;

pub mod error;

// Re-exports for flat paths
pub use geometry::circle;
pub use geometry::line;
pub use geometry::pentagon;
pub use geometry::pentagram;
pub use geometry::r2;
pub use geometry::shape;
pub use geometry::triangle;

pub use analysis::contains;
pub use analysis::distance;
pub use analysis::grid;

pub use math::angle;
pub use math::deg;

// Re-export key types for external use
pub use circle::Circle;
pub use contains::Contains;
pub use error::{ConstructionError, GeometryError, GridError};
pub use grid::Grid;
pub use line::{Line, LineEquation};
pub use pentagon::Pentagon;
pub use pentagram::{build_pentagram, classify_point, Pentagram};
pub use r2::R2;
pub use shape::Shape;
pub use triangle::Triangle;

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
