pub mod angle;
pub mod deg;
pub mod is_zero;
