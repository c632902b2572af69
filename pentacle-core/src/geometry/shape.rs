use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::{circle::Circle, pentagon::Pentagon, triangle::Triangle};

#[derive(Debug, Display, Clone, Copy, From, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    Pentagon(Pentagon),
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Triangle(t) => t.area(),
            Shape::Pentagon(p) => p.area(),
        }
    }
}
