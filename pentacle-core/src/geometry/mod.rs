pub mod circle;
pub mod line;
pub mod pentagon;
pub mod pentagram;
pub mod r2;
pub mod shape;
pub mod triangle;
