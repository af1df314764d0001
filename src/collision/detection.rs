use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::Shape;

/// Result of a positive narrow-phase test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Unit separation axis, pointing from the first shape toward the second.
    pub normal: Vec2,
    /// Penetration along `normal`; always positive.
    pub depth: f64,
}

impl Intersection {
    /// Minimum translation vector: moving the second shape by this separates the pair.
    pub fn mtv(&self) -> Vec2 {
        self.normal * self.depth
    }
}

/// Running minimum over the candidate axes of one SAT test.
struct AxisScan {
    normal: Vec2,
    depth: f64,
}

impl AxisScan {
    fn new() -> Self {
        Self {
            normal: Vec2::ZERO,
            depth: f64::MAX,
        }
    }

    /// Feeds one axis with both projection intervals.
    /// Returns `false` when the intervals are disjoint, i.e. `axis` separates the shapes.
    fn test(&mut self, axis: Vec2, (min_a, max_a): (f64, f64), (min_b, max_b): (f64, f64)) -> bool {
        if min_a >= max_b || min_b >= max_a {
            return false;
        }

        let axis_depth = (max_b - min_a).min(max_a - min_b);
        // Strictly less: on equal depth the earlier axis wins.
        if axis_depth < self.depth {
            self.depth = axis_depth;
            self.normal = axis;
        }
        true
    }

    /// Orients the winning axis along `direction` (first shape toward second).
    fn finish(self, direction: Vec2) -> Intersection {
        let normal = if direction.dot(self.normal) < 0.0 {
            -self.normal
        } else {
            self.normal
        };
        Intersection {
            normal,
            depth: self.depth,
        }
    }
}

/// Outward unit normal of every edge `(v[i], v[i + 1])`, wrapping around.
fn edge_normals(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| {
        let edge = vertices[(i + 1) % n] - vertices[i];
        edge.perpendicular().normalize()
    })
}

fn project_vertices(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;

    for v in vertices {
        let projection = v.dot(axis);
        if projection < min {
            min = projection;
        }
        if projection > max {
            max = projection;
        }
    }
    (min, max)
}

fn project_circle(center: Vec2, radius: f64, axis: Vec2) -> (f64, f64) {
    let offset = axis.normalize() * radius;
    let p1 = (center + offset).dot(axis);
    let p2 = (center - offset).dot(axis);

    if p1 > p2 {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

/// Mean of the vertex positions; the centroid for the boxes this engine builds.
pub(crate) fn arithmetic_mean(vertices: &[Vec2]) -> Vec2 {
    let mut sum = Vec2::ZERO;
    for v in vertices {
        sum += *v;
    }
    sum / vertices.len() as f64
}

fn closest_vertex(center: Vec2, vertices: &[Vec2]) -> Vec2 {
    let mut closest = vertices[0];
    let mut min_distance = f64::MAX;

    for v in vertices {
        let distance = v.distance(center);
        if distance < min_distance {
            min_distance = distance;
            closest = *v;
        }
    }
    closest
}

/// Circle-circle overlap. Touching circles (`distance == radii`) do not collide.
pub fn intersect_circles(
    center_a: Vec2,
    radius_a: f64,
    center_b: Vec2,
    radius_b: f64,
) -> Option<Intersection> {
    let distance = center_a.distance(center_b);
    let radii = radius_a + radius_b;

    if distance >= radii {
        return None;
    }

    Some(Intersection {
        normal: (center_b - center_a).normalize(),
        depth: radii - distance,
    })
}

/// SAT over the edge normals of two convex polygons, `a`'s edges first.
/// The normal points from `a`'s vertex mean toward `b`'s.
pub fn intersect_polygons(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> Option<Intersection> {
    let mut scan = AxisScan::new();

    for axis in edge_normals(vertices_a).chain(edge_normals(vertices_b)) {
        let interval_a = project_vertices(vertices_a, axis);
        let interval_b = project_vertices(vertices_b, axis);
        if !scan.test(axis, interval_a, interval_b) {
            return None;
        }
    }

    let direction = arithmetic_mean(vertices_b) - arithmetic_mean(vertices_a);
    Some(scan.finish(direction))
}

/// SAT between a circle and a convex polygon: the polygon's edge normals plus the axis
/// from the circle center to the nearest polygon vertex, which covers the corner region.
/// The normal points from the circle toward the polygon.
pub fn intersect_circle_polygon(
    circle_center: Vec2,
    circle_radius: f64,
    vertices: &[Vec2],
) -> Option<Intersection> {
    let mut scan = AxisScan::new();

    let vertex_axis = (closest_vertex(circle_center, vertices) - circle_center).normalize();

    for axis in edge_normals(vertices).chain(std::iter::once(vertex_axis)) {
        let interval_poly = project_vertices(vertices, axis);
        let interval_circle = project_circle(circle_center, circle_radius, axis);
        if !scan.test(axis, interval_poly, interval_circle) {
            return None;
        }
    }

    let direction = arithmetic_mean(vertices) - circle_center;
    Some(scan.finish(direction))
}

/// Narrow-phase test for a body pair. On a hit, the normal points from `body_a` toward
/// `body_b` whatever the shape combination.
pub fn collide(body_a: &RigidBody, body_b: &RigidBody) -> Option<Intersection> {
    match (body_a.shape(), body_b.shape()) {
        (Shape::Box(_), Shape::Box(_)) => {
            let va = body_a.transformed_vertices()?;
            let vb = body_b.transformed_vertices()?;
            intersect_polygons(&va, &vb)
        }
        (Shape::Box(_), Shape::Circle(circle)) => {
            let va = body_a.transformed_vertices()?;
            // Shared routine runs circle-first; flip so the normal still reads A -> B.
            intersect_circle_polygon(body_b.position(), circle.radius, &va).map(|hit| {
                Intersection {
                    normal: -hit.normal,
                    depth: hit.depth,
                }
            })
        }
        (Shape::Circle(circle), Shape::Box(_)) => {
            let vb = body_b.transformed_vertices()?;
            intersect_circle_polygon(body_a.position(), circle.radius, &vb)
        }
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => intersect_circles(
            body_a.position(),
            circle_a.radius,
            body_b.position(),
            circle_b.radius,
        ),
    }
}
