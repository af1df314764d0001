//! Contact point extraction for pairs already known to overlap.

use crate::math::{nearly_equal, Vec2};
use crate::objects::rigid_body::RigidBody;
use crate::shapes::Shape;

/// Up to two world-space contact points. Only the first `count` points are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactPoints {
    pub contact1: Vec2,
    pub contact2: Vec2,
    pub count: usize,
}

impl ContactPoints {
    fn single(point: Vec2) -> Self {
        Self {
            contact1: point,
            contact2: Vec2::ZERO,
            count: 1,
        }
    }
}

/// Closest point to `p` on segment `a -> b`, with its squared distance to `p`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> (Vec2, f64) {
    let ab = b - a;
    let ap = p - a;

    let t = (ap.dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
    let closest = a + ab * t;

    (closest, p.distance_squared(closest))
}

/// Tracks the nearest vertex-to-edge points seen so far. A second point at (nearly) the
/// same distance but a different place makes the contact a two-point edge contact.
struct NearestPoints {
    min_distance_sq: f64,
    points: ContactPoints,
}

impl NearestPoints {
    fn new() -> Self {
        Self {
            min_distance_sq: f64::MAX,
            points: ContactPoints::default(),
        }
    }

    fn offer(&mut self, point: Vec2, distance_sq: f64) {
        if nearly_equal(distance_sq, self.min_distance_sq) {
            if !point.nearly_equal(self.points.contact1) {
                self.points.contact2 = point;
                self.points.count = 2;
            }
        } else if distance_sq < self.min_distance_sq {
            self.min_distance_sq = distance_sq;
            self.points.contact1 = point;
            self.points.count = 1;
        }
    }

    /// Tests every vertex of `vertices` against every edge of `polygon`.
    fn scan(&mut self, vertices: &[Vec2], polygon: &[Vec2]) {
        let n = polygon.len();
        for &p in vertices {
            for j in 0..n {
                let (closest, distance_sq) = point_segment_distance(p, polygon[j], polygon[(j + 1) % n]);
                self.offer(closest, distance_sq);
            }
        }
    }
}

fn circles_contact(center_a: Vec2, radius_a: f64, center_b: Vec2) -> Vec2 {
    center_a + (center_b - center_a).normalize() * radius_a
}

fn circle_polygon_contact(circle_center: Vec2, vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    let mut min_distance_sq = f64::MAX;
    let mut contact = Vec2::ZERO;

    for i in 0..n {
        let (closest, distance_sq) = point_segment_distance(circle_center, vertices[i], vertices[(i + 1) % n]);
        if distance_sq < min_distance_sq {
            min_distance_sq = distance_sq;
            contact = closest;
        }
    }
    contact
}

fn polygons_contacts(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> ContactPoints {
    let mut nearest = NearestPoints::new();
    nearest.scan(vertices_a, vertices_b);
    nearest.scan(vertices_b, vertices_a);
    nearest.points
}

/// Contact points for a pair that `collide` reported as overlapping.
/// Depends only on the current geometry, not on the normal or depth.
pub fn find_contact_points(body_a: &RigidBody, body_b: &RigidBody) -> ContactPoints {
    match (body_a.shape(), body_b.shape()) {
        (Shape::Box(_), Shape::Box(_)) => {
            match (body_a.transformed_vertices(), body_b.transformed_vertices()) {
                (Some(va), Some(vb)) => polygons_contacts(&va, &vb),
                _ => ContactPoints::default(),
            }
        }
        (Shape::Box(_), Shape::Circle(_)) => body_a
            .transformed_vertices()
            .map(|va| ContactPoints::single(circle_polygon_contact(body_b.position(), &va)))
            .unwrap_or_default(),
        (Shape::Circle(_), Shape::Box(_)) => body_b
            .transformed_vertices()
            .map(|vb| ContactPoints::single(circle_polygon_contact(body_a.position(), &vb)))
            .unwrap_or_default(),
        (Shape::Circle(circle_a), Shape::Circle(_)) => ContactPoints::single(circles_contact(
            body_a.position(),
            circle_a.radius,
            body_b.position(),
        )),
    }
}
