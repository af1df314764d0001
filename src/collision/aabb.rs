// Axis-aligned bounding box used by the broad phase.

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        AABB { min, max }
    }

    /// Half-open overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }

    /// Smallest box containing every point. `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for point in rest {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }
        Some(AABB::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f64, y: f64) -> AABB {
        AABB::new(Vec2::new(x, y), Vec2::new(x + 1.0, y + 1.0))
    }

    #[test]
    fn test_overlapping_boxes() {
        assert!(unit_at(0.0, 0.0).overlaps(&unit_at(0.5, 0.5)));
        assert!(unit_at(0.5, 0.5).overlaps(&unit_at(0.0, 0.0)));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        assert!(!unit_at(0.0, 0.0).overlaps(&unit_at(1.0, 0.0)));
        assert!(!unit_at(0.0, 0.0).overlaps(&unit_at(0.0, 1.0)));
        assert!(!unit_at(1.0, 0.0).overlaps(&unit_at(0.0, 0.0)));
    }

    #[test]
    fn test_separated_boxes() {
        assert!(!unit_at(0.0, 0.0).overlaps(&unit_at(5.0, 0.0)));
        assert!(!unit_at(0.0, 0.0).overlaps(&unit_at(0.5, -3.0)));
    }

    #[test]
    fn test_from_points() {
        let aabb = AABB::from_points(&[
            Vec2::new(1.0, -2.0),
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec2::new(-3.0, -2.0));
        assert_eq!(aabb.max, Vec2::new(1.0, 4.0));
        assert!(AABB::from_points(&[]).is_none());
    }
}
