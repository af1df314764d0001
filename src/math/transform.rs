use super::vec2::Vec2;

/// A rigid placement: rotation about the origin followed by a translation.
/// The sine and cosine are computed once so that transforming many vertices stays cheap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub sin: f64,
    pub cos: f64,
}

impl Transform {
    pub fn new(position: Vec2, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { position, sin, cos }
    }

    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            sin: 0.0,
            cos: 1.0,
        }
    }

    /// Rotates `point`, then translates it.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x * self.cos - point.y * self.sin + self.position.x,
            point.x * self.sin + point.y * self.cos + self.position.y,
        )
    }
}
