pub mod box_shape;
pub mod circle;

pub use box_shape::BoxShape;
pub use circle::Circle;

/// Geometric shape of a rigid body. The set is closed; collision code matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Box(BoxShape),
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.area(),
            Shape::Box(rect) => rect.area(),
        }
    }
}
