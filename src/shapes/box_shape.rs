use crate::math::vec2::Vec2;

/// Triangle index list that fills a box from its four corners.
pub const BOX_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// A rectangle centered on the body's origin, axis-aligned in local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub width: f64,
    pub height: f64,
}

impl BoxShape {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The four local-space corners, clockwise from the top-left.
    /// Edge normals built with `Vec2::perpendicular` point outward for this winding.
    pub fn local_vertices(&self) -> [Vec2; 4] {
        let left = -self.width / 2.0;
        let right = left + self.width;
        let bottom = -self.height / 2.0;
        let top = bottom + self.height;

        [
            Vec2::new(left, top),
            Vec2::new(right, top),
            Vec2::new(right, bottom),
            Vec2::new(left, bottom),
        ]
    }

    pub fn triangles(&self) -> [usize; 6] {
        BOX_TRIANGLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_box_area() {
        assert!((BoxShape::new(2.0, 3.0).area() - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_box_local_vertices() {
        let v = BoxShape::new(2.0, 1.0).local_vertices();
        assert_eq!(v[0], Vec2::new(-1.0, 0.5));
        assert_eq!(v[1], Vec2::new(1.0, 0.5));
        assert_eq!(v[2], Vec2::new(1.0, -0.5));
        assert_eq!(v[3], Vec2::new(-1.0, -0.5));
    }

    #[test]
    fn test_box_edge_normals_point_outward() {
        let v = BoxShape::new(2.0, 2.0).local_vertices();
        for i in 0..v.len() {
            let a = v[i];
            let b = v[(i + 1) % v.len()];
            let normal = (b - a).perpendicular().normalize();
            let midpoint = (a + b) / 2.0;
            // The box is centered on the origin, so an outward normal agrees with the edge midpoint.
            assert!(normal.dot(midpoint) > 0.0, "edge {} normal {:?} points inward", i, normal);
        }
    }

    #[test]
    fn test_box_triangles_cover_all_corners() {
        let tris = BoxShape::new(1.0, 1.0).triangles();
        for corner in 0..4 {
            assert!(tris.contains(&corner));
        }
    }
}
