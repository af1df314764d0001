//! Headless run of a small scene: random circles and boxes dropped onto a static ground,
//! with the first body pushed to the right every frame. Bodies leaving the view wrap around.
//!
//! `cargo run --example falling_bodies`

use std::error::Error;

use impulse2d::{PhysicsWorld, RigidBody, Vec2};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simple_logger::SimpleLogger;

const BODY_COUNT: usize = 10;
const FRAMES: usize = 600;
const ITERATIONS: usize = 20;
const PUSH_FORCE: f64 = 48.0;

// View rectangle the bodies live in, in world units.
const VIEW_MIN: Vec2 = Vec2 { x: -32.0, y: -18.0 };
const VIEW_MAX: Vec2 = Vec2 { x: 32.0, y: 18.0 };

fn random_body(rng: &mut StdRng) -> Result<RigidBody, Box<dyn Error>> {
    let position = Vec2::new(
        rng.gen_range(VIEW_MIN.x + 4.0..VIEW_MAX.x - 4.0),
        rng.gen_range(0.0..VIEW_MAX.y - 2.0),
    );
    let restitution = rng.gen_range(0.2..0.8);

    let body = if rng.gen_bool(0.5) {
        RigidBody::create_circle(1.0, position, 2.0, false, restitution)?
    } else {
        let mut body = RigidBody::create_box(2.0, 2.0, position, 2.0, false, restitution)?;
        body.rotate(rng.gen_range(0.0..std::f64::consts::TAU));
        body
    };
    Ok(body)
}

/// Moves a body that left the view to the opposite side.
fn wrap_screen(body: &mut RigidBody) {
    let mut position = body.position();
    let width = VIEW_MAX.x - VIEW_MIN.x;
    let height = VIEW_MAX.y - VIEW_MIN.y;

    if position.x < VIEW_MIN.x {
        position.x += width;
    } else if position.x > VIEW_MAX.x {
        position.x -= width;
    }
    if position.y < VIEW_MIN.y {
        position.y += height;
    } else if position.y > VIEW_MAX.y {
        position.y -= height;
    }

    if position != body.position() {
        body.move_to(position);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let mut rng = StdRng::seed_from_u64(7);
    let mut world = PhysicsWorld::new();

    for _ in 0..BODY_COUNT {
        world.add_body(random_body(&mut rng)?);
    }

    let ground_width = (VIEW_MAX.x - VIEW_MIN.x) * 0.9;
    let ground = RigidBody::create_box(ground_width, 3.0, Vec2::new(0.0, VIEW_MIN.y + 3.0), 1.0, true, 0.5)?;
    world.add_body(ground);

    info!("simulating {} bodies for {} frames", world.body_count(), FRAMES);

    let dt = 1.0 / 60.0;
    for frame in 0..FRAMES {
        if let Some(player) = world.get_body_mut(0) {
            player.add_force(Vec2::new(PUSH_FORCE, 0.0));
        }

        world.step(dt, ITERATIONS);

        for index in 0..world.body_count() {
            if let Some(body) = world.get_body_mut(index) {
                if !body.is_static() {
                    wrap_screen(body);
                }
            }
        }

        if frame % 60 == 0 {
            for (index, body) in world.bodies().enumerate() {
                info!(
                    "frame {:4} body {:2}: position=({:.3}, {:.3}) velocity=({:.3}, {:.3})",
                    frame,
                    index,
                    body.position().x,
                    body.position().y,
                    body.linear_velocity.x,
                    body.linear_velocity.y
                );
            }
        }
    }

    Ok(())
}
