//! Engine-wide limits and world settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Smallest accepted body area (a 0.01 x 0.01 square).
pub const MIN_BODY_SIZE: f64 = 0.01 * 0.01;
/// Largest accepted body area (a 64 x 64 square).
pub const MAX_BODY_SIZE: f64 = 64.0 * 64.0;

/// Density bounds in g/cm^3, roughly balsa wood through osmium.
pub const MIN_DENSITY: f64 = 0.2;
pub const MAX_DENSITY: f64 = 22.6;

/// Bounds on the number of sub-steps a single `PhysicsWorld::step` may run.
pub const MIN_ITERATIONS: usize = 1;
pub const MAX_ITERATIONS: usize = 128;

pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: -9.81 };

/// Tunable settings for a `PhysicsWorld`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Acceleration applied to every dynamic body, in units per second squared.
    pub gravity: Vec2,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
        }
    }
}

/// Clamps a requested sub-step count into `[MIN_ITERATIONS, MAX_ITERATIONS]`.
pub fn clamp_iterations(iterations: usize) -> usize {
    iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.gravity, Vec2::new(0.0, -9.81));
    }

    #[test]
    fn test_body_size_limits() {
        assert!((MIN_BODY_SIZE - 0.0001).abs() < 1e-12);
        assert_eq!(MAX_BODY_SIZE, 4096.0);
    }

    #[test]
    fn test_clamp_iterations() {
        assert_eq!(clamp_iterations(0), 1);
        assert_eq!(clamp_iterations(1), 1);
        assert_eq!(clamp_iterations(40), 40);
        assert_eq!(clamp_iterations(128), 128);
        assert_eq!(clamp_iterations(1000), 128);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let cfg: WorldConfig = serde_json::from_str(r#"{ "gravity": { "x": 0.0, "y": -20.0 } }"#)
            .expect("valid config");
        assert_eq!(cfg.gravity, Vec2::new(0.0, -20.0));

        let empty: WorldConfig = serde_json::from_str("{}").expect("defaults fill in");
        assert_eq!(empty, WorldConfig::default());
    }
}
