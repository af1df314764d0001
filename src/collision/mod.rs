pub mod aabb;
pub mod broad_phase;
pub mod contacts;
pub mod detection;
pub mod manifold;

pub use aabb::AABB;
pub use broad_phase::find_candidate_pairs;
pub use contacts::{find_contact_points, ContactPoints};
pub use detection::{collide, Intersection};
pub use manifold::Manifold;
