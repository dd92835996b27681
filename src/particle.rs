/*
 * Particle Module
 *
 * This module defines the Particle struct: a single animated point of the
 * background field. Size and opacity are fixed when the particle is created;
 * position and velocity are advanced by the physics step.
 *
 * Coordinates are canvas coordinates: origin at the top-left corner,
 * y growing downward.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            opacity,
        }
    }

    /// Create a particle at a uniformly random position inside the canvas.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, params: &FieldParams) -> Self {
        let speed = params.max_initial_speed;

        let position = vec2(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height));
        let velocity = vec2(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed));

        Self {
            position,
            velocity,
            size: rng.gen_range(params.min_size..=params.max_size),
            opacity: rng.gen_range(params.min_opacity..=params.max_opacity),
        }
    }
}
