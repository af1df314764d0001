pub mod transform;
pub mod vec2;

pub use transform::Transform;
pub use vec2::Vec2;

/// Tolerance used by the near-equality comparators.
pub const VERY_SMALL_AMOUNT: f64 = 0.0005;

/// True when `a` and `b` differ by less than `VERY_SMALL_AMOUNT`.
pub fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < VERY_SMALL_AMOUNT
}

/// Compares an already squared distance against the squared tolerance.
pub(crate) fn nearly_equal_sq(distance_squared: f64) -> bool {
    distance_squared < VERY_SMALL_AMOUNT * VERY_SMALL_AMOUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(1.0, 1.0));
        assert!(nearly_equal(1.0, 1.0004));
        assert!(!nearly_equal(1.0, 1.0006));
        assert!(!nearly_equal(-1.0, 1.0));
    }
}
