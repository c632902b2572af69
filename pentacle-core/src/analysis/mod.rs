pub mod contains;
pub mod distance;
pub mod grid;
