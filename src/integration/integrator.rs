use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Advances one body by `dt` using semi-implicit Euler: velocity first, then position
/// from the updated velocity. The force accumulator is consumed by the sub-step.
/// Static bodies are left untouched, including their accumulated force.
pub fn integrate(body: &mut RigidBody, gravity: Vec2, dt: f64) {
    if body.is_static() {
        return;
    }

    let acceleration = body.force() / body.mass() + gravity;
    body.linear_velocity += acceleration * dt;

    let displacement = body.linear_velocity * dt;
    body.move_by(displacement);

    body.clear_force();
}
