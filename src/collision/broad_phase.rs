use crate::objects::rigid_body::RigidBody;

/// Collects every index pair `(i, j)`, `i < j`, whose bounding boxes overlap, in ascending
/// order. Pairs of two static bodies are skipped. `pairs` is cleared first.
///
/// This is a plain O(n^2) sweep over all pairs.
pub fn find_candidate_pairs(bodies: &[RigidBody], pairs: &mut Vec<(usize, usize)>) {
    pairs.clear();

    for i in 0..bodies.len() {
        let body_a = &bodies[i];
        let aabb_a = body_a.aabb();

        for (j, body_b) in bodies.iter().enumerate().skip(i + 1) {
            if body_a.is_static() && body_b.is_static() {
                continue;
            }

            if !aabb_a.overlaps(&body_b.aabb()) {
                continue;
            }

            pairs.push((i, j));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;

    fn circle(x: f64, y: f64, is_static: bool) -> RigidBody {
        RigidBody::create_circle(1.0, Vec2::new(x, y), 1.0, is_static, 0.5).unwrap()
    }

    #[test]
    fn test_separated_bodies_yield_no_pairs() {
        let bodies = vec![circle(0.0, 0.0, false), circle(100.0, 0.0, false)];
        let mut pairs = Vec::new();
        find_candidate_pairs(&bodies, &mut pairs);
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_overlapping_bounds_yield_pair() {
        // Circles do not touch, but their bounding boxes do.
        let bodies = vec![circle(0.0, 0.0, false), circle(1.8, 1.8, false)];
        let mut pairs = Vec::new();
        find_candidate_pairs(&bodies, &mut pairs);
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn test_static_pairs_are_skipped() {
        let bodies = vec![
            circle(0.0, 0.0, true),
            circle(0.5, 0.0, true),
            circle(1.0, 0.0, false),
        ];
        let mut pairs = Vec::new();
        find_candidate_pairs(&bodies, &mut pairs);
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_pairs_are_in_ascending_order_and_buffer_is_reset() {
        let bodies = vec![
            circle(0.0, 0.0, false),
            circle(0.5, 0.0, false),
            circle(1.0, 0.0, false),
        ];
        let mut pairs = vec![(7, 9)];
        find_candidate_pairs(&bodies, &mut pairs);
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_touching_bounds_are_not_candidates() {
        let bodies = vec![circle(0.0, 0.0, false), circle(2.0, 0.0, false)];
        let mut pairs = Vec::new();
        find_candidate_pairs(&bodies, &mut pairs);
        assert!(pairs.is_empty());
    }
}
