use std::cell::Cell;

use crate::collision::AABB;
use crate::common::config::{MAX_BODY_SIZE, MAX_DENSITY, MIN_BODY_SIZE, MIN_DENSITY};
use crate::common::BodyError;
use crate::math::{Transform, Vec2};
use crate::shapes::{BoxShape, Circle, Shape};

/// A single-shape rigid body.
///
/// Mass properties are fixed at construction. World-space geometry (box corners and the
/// bounding box) is cached and rebuilt on the next read after any move or rotation.
#[derive(Debug, Clone)]
pub struct RigidBody {
    shape: Shape,

    position: Vec2,
    rotation: f64,
    pub linear_velocity: Vec2,
    force: Vec2,

    density: f64,
    mass: f64,
    inv_mass: f64,
    restitution: f64,
    area: f64,
    is_static: bool,

    // Box corners around the origin; `None` for circles.
    local_vertices: Option<[Vec2; 4]>,

    transformed_vertices: Cell<[Vec2; 4]>,
    transform_dirty: Cell<bool>,
    aabb: Cell<AABB>,
    aabb_dirty: Cell<bool>,
}

impl RigidBody {
    /// Builds a circle body after validating its area and density.
    pub fn create_circle(
        radius: f64,
        position: Vec2,
        density: f64,
        is_static: bool,
        restitution: f64,
    ) -> Result<Self, BodyError> {
        Self::create(Shape::Circle(Circle::new(radius)), position, density, is_static, restitution)
    }

    /// Builds a box body after validating its area and density.
    pub fn create_box(
        width: f64,
        height: f64,
        position: Vec2,
        density: f64,
        is_static: bool,
        restitution: f64,
    ) -> Result<Self, BodyError> {
        Self::create(
            Shape::Box(BoxShape::new(width, height)),
            position,
            density,
            is_static,
            restitution,
        )
    }

    fn create(
        shape: Shape,
        position: Vec2,
        density: f64,
        is_static: bool,
        restitution: f64,
    ) -> Result<Self, BodyError> {
        let area = shape.area();

        if !(MIN_BODY_SIZE..=MAX_BODY_SIZE).contains(&area) {
            log::debug!("rejecting {:?}: area {} out of range", shape, area);
            return Err(BodyError::AreaOutOfRange {
                area,
                min: MIN_BODY_SIZE,
                max: MAX_BODY_SIZE,
            });
        }

        if !(MIN_DENSITY..=MAX_DENSITY).contains(&density) {
            log::debug!("rejecting {:?}: density {} out of range", shape, density);
            return Err(BodyError::DensityOutOfRange {
                density,
                min: MIN_DENSITY,
                max: MAX_DENSITY,
            });
        }

        let mass = area * density;
        let inv_mass = if is_static { 0.0 } else { 1.0 / mass };

        let local_vertices = match shape {
            Shape::Circle(_) => None,
            Shape::Box(rect) => Some(rect.local_vertices()),
        };

        Ok(Self {
            shape,
            position,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            density,
            mass,
            inv_mass,
            restitution: restitution.clamp(0.0, 1.0),
            area,
            is_static,
            local_vertices,
            transformed_vertices: Cell::new([Vec2::ZERO; 4]),
            transform_dirty: Cell::new(true),
            aabb: Cell::new(AABB::new(position, position)),
            aabb_dirty: Cell::new(true),
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// `1 / mass` for dynamic bodies, `0` for static ones.
    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Radius for circle bodies.
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Circle(circle) => Some(circle.radius),
            Shape::Box(_) => None,
        }
    }

    /// Index list for drawing a box as two triangles over `transformed_vertices`.
    pub fn triangles(&self) -> Option<[usize; 6]> {
        match self.shape {
            Shape::Circle(_) => None,
            Shape::Box(rect) => Some(rect.triangles()),
        }
    }

    /// Translates the body by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
        self.invalidate_geometry();
    }

    /// Places the body at `position`.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.invalidate_geometry();
    }

    /// Adds `angle` radians to the body's rotation.
    pub fn rotate(&mut self, angle: f64) {
        self.rotation += angle;
        self.invalidate_geometry();
    }

    /// Accumulates a force to be applied on the next integration sub-step.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    fn invalidate_geometry(&self) {
        self.transform_dirty.set(true);
        self.aabb_dirty.set(true);
    }

    /// World-space corners of a box body, rebuilt only when stale. `None` for circles.
    pub fn transformed_vertices(&self) -> Option<[Vec2; 4]> {
        let local = self.local_vertices?;

        if self.transform_dirty.get() {
            let transform = Transform::new(self.position, self.rotation);
            self.transformed_vertices.set(local.map(|v| transform.apply(v)));
            self.transform_dirty.set(false);
        }

        Some(self.transformed_vertices.get())
    }

    /// World-space bounding box, rebuilt only when stale.
    pub fn aabb(&self) -> AABB {
        if self.aabb_dirty.get() {
            let aabb = match self.shape {
                Shape::Circle(circle) => {
                    let extent = Vec2::new(circle.radius, circle.radius);
                    AABB::new(self.position - extent, self.position + extent)
                }
                Shape::Box(_) => self
                    .transformed_vertices()
                    .and_then(|vertices| AABB::from_points(&vertices))
                    .unwrap_or_else(|| AABB::new(self.position, self.position)),
            };
            self.aabb.set(aabb);
            self.aabb_dirty.set(false);
        }

        self.aabb.get()
    }
}
