use crate::math::vec2::Vec2;

use super::contacts::ContactPoints;
use super::detection::Intersection;

/// Contact geometry for one colliding pair during one sub-step. Never kept across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    /// Index of the first body in the world's body list.
    pub body_a_idx: usize,
    /// Index of the second body in the world's body list.
    pub body_b_idx: usize,
    /// Unit normal pointing from body A toward body B.
    pub normal: Vec2,
    /// Penetration depth along `normal`.
    pub depth: f64,
    pub contact1: Vec2,
    pub contact2: Vec2,
    /// Number of valid contact points: 0, 1 or 2.
    pub contact_count: usize,
}

impl Manifold {
    pub fn new(
        body_a_idx: usize,
        body_b_idx: usize,
        intersection: Intersection,
        contacts: ContactPoints,
    ) -> Self {
        Self {
            body_a_idx,
            body_b_idx,
            normal: intersection.normal,
            depth: intersection.depth,
            contact1: contacts.contact1,
            contact2: contacts.contact2,
            contact_count: contacts.count,
        }
    }

    /// The valid contact points, in order.
    pub fn contacts(&self) -> impl Iterator<Item = Vec2> {
        [self.contact1, self.contact2].into_iter().take(self.contact_count)
    }
}
