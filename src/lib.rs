pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{ContactPoints, Intersection, Manifold, AABB};
pub use common::{BodyError, WorldConfig};
pub use math::vec2::Vec2;
pub use objects::rigid_body::RigidBody;
pub use shapes::{BoxShape, Circle, Shape};
pub use world::{BodyId, PhysicsWorld};
