use crate::{
    collision::{self, Manifold},
    common::config::{clamp_iterations, WorldConfig},
    integration::integrator,
    math::vec2::Vec2,
    objects::rigid_body::RigidBody,
};

/// Stable handle for a body added to a `PhysicsWorld`. Never reused within one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u64);

/// Owns every body and advances them in fixed sub-steps.
///
/// Pairs are detected and resolved one at a time in ascending body-index order, and each
/// resolution is applied before the next pair is tested. Stacks of three or more touching
/// bodies therefore depend on insertion order.
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    ids: Vec<BodyId>,
    next_id: u64,
    gravity: Vec2,
    // Reused between sub-steps to avoid reallocating.
    contact_pairs: Vec<(usize, usize)>,
}

impl PhysicsWorld {
    /// Creates an empty world with the default configuration.
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            bodies: Vec::new(),
            ids: Vec::new(),
            next_id: 0,
            gravity: config.gravity,
            contact_pairs: Vec::new(),
        }
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Appends a body and returns its handle. The body's index is `body_count() - 1`.
    pub fn add_body(&mut self, body: RigidBody) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;

        log::debug!("adding body {:?} at index {}", id, self.bodies.len());
        self.bodies.push(body);
        self.ids.push(id);
        id
    }

    /// Removes a body, keeping the remaining bodies in their relative order.
    /// Returns `false` if the handle is not (or no longer) in this world.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.bodies.remove(index);
                self.ids.remove(index);
                log::debug!("removed body {:?} from index {}", id, index);
                true
            }
            None => false,
        }
    }

    pub fn get_body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    pub fn get_body_mut(&mut self, index: usize) -> Option<&mut RigidBody> {
        self.bodies.get_mut(index)
    }

    pub fn body_id(&self, index: usize) -> Option<BodyId> {
        self.ids.get(index).copied()
    }

    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.ids.iter().position(|&other| other == id)
    }

    /// Bodies in index order.
    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.iter()
    }

    /// Advances the simulation by `dt` seconds, split into `iterations` equal sub-steps.
    /// `iterations` is clamped into `[MIN_ITERATIONS, MAX_ITERATIONS]`.
    pub fn step(&mut self, dt: f64, iterations: usize) {
        let iterations = clamp_iterations(iterations);
        let sub_dt = dt / iterations as f64;

        for _ in 0..iterations {
            self.step_bodies(sub_dt);
            self.broad_phase();
            self.narrow_phase();
        }
    }

    fn step_bodies(&mut self, dt: f64) {
        for body in self.bodies.iter_mut() {
            integrator::integrate(body, self.gravity, dt);
        }
    }

    fn broad_phase(&mut self) {
        collision::find_candidate_pairs(&self.bodies, &mut self.contact_pairs);
    }

    fn narrow_phase(&mut self) {
        for k in 0..self.contact_pairs.len() {
            let (i, j) = self.contact_pairs[k];
            let (body_a, body_b) = body_pair_mut(&mut self.bodies, i, j);

            let Some(hit) = collision::collide(body_a, body_b) else {
                continue;
            };

            separate_bodies(body_a, body_b, hit.mtv());

            let contacts = collision::find_contact_points(body_a, body_b);
            let manifold = Manifold::new(i, j, hit, contacts);

            log::trace!(
                "contact {}-{}: normal={:?} depth={:.4} points={}",
                i,
                j,
                manifold.normal,
                manifold.depth,
                manifold.contact_count
            );

            resolve_collision(body_a, body_b, &manifold);
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable references to two distinct bodies. Requires `idx_a < idx_b`.
fn body_pair_mut(bodies: &mut [RigidBody], idx_a: usize, idx_b: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(idx_a < idx_b, "body pair must be ordered");
    let (head, tail) = bodies.split_at_mut(idx_b);
    (&mut head[idx_a], &mut tail[0])
}

/// Pushes the pair apart along the minimum translation vector. A static body never moves;
/// two dynamic bodies each take half.
fn separate_bodies(body_a: &mut RigidBody, body_b: &mut RigidBody, mtv: Vec2) {
    if body_a.is_static() {
        body_b.move_by(mtv);
    } else if body_b.is_static() {
        body_a.move_by(-mtv);
    } else {
        body_a.move_by(-mtv / 2.0);
        body_b.move_by(mtv / 2.0);
    }
}

/// Single linear impulse along the contact normal. Rotation and friction are not modelled.
fn resolve_collision(body_a: &mut RigidBody, body_b: &mut RigidBody, manifold: &Manifold) {
    let normal = manifold.normal;
    let relative_velocity = body_b.linear_velocity - body_a.linear_velocity;
    let velocity_along_normal = relative_velocity.dot(normal);

    // Already separating.
    if velocity_along_normal > 0.0 {
        return;
    }

    let e = body_a.restitution().min(body_b.restitution());

    let j = -(1.0 + e) * velocity_along_normal / (body_a.inv_mass() + body_b.inv_mass());
    let impulse = normal * j;

    body_a.linear_velocity -= impulse * body_a.inv_mass();
    body_b.linear_velocity += impulse * body_b.inv_mass();
}
