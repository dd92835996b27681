/*
 * Physics Module
 *
 * Advances every particle of the field by one simulation tick:
 * 1. Mouse interaction: an impulse towards (or away from) the pointer that
 *    fades linearly to zero at the influence radius
 * 2. Explicit Euler integration of position
 * 3. Isotropic friction on velocity
 * 4. Elastic reflection off the canvas edges
 *
 * Particles do not interact with each other physically.
 */

use nannou::prelude::*;

use crate::params::FieldParams;
use crate::particle::Particle;
use crate::settings::InteractionMode;

/// Everything a single tick reads besides the particles themselves.
#[derive(Debug, Clone, Copy)]
pub struct StepInput<'a> {
    pub mouse: Option<Vec2>,
    pub width: f32,
    pub height: f32,
    pub mode: InteractionMode,
    pub params: &'a FieldParams,
}

// Advance all particles by one tick
pub fn step(particles: &mut [Particle], input: &StepInput) {
    for particle in particles.iter_mut() {
        step_particle(particle, input);
    }
}

pub fn step_particle(particle: &mut Particle, input: &StepInput) {
    let params = input.params;

    if let Some(mouse) = input.mouse {
        particle.velocity += mouse_impulse(particle.position, mouse, input.mode, params);
    }

    particle.position += particle.velocity;
    particle.velocity *= params.friction;

    reflect(particle, input.width, input.height);
}

/// Velocity change caused by the pointer at `mouse` on a particle at `position`.
pub fn mouse_impulse(position: Vec2, mouse: Vec2, mode: InteractionMode, params: &FieldParams) -> Vec2 {
    let offset = mouse - position;
    let distance = offset.length();
    let radius = params.influence_radius;

    // Zero distance has no direction to push along
    if distance <= 0.0 || distance >= radius {
        return Vec2::ZERO;
    }

    let strength = (radius - distance) / radius * params.attraction_force;
    let impulse = offset / distance * strength;

    match mode {
        InteractionMode::Attract => impulse,
        InteractionMode::Repulse => -impulse,
    }
}

// Bounce off the canvas edges, keeping the particle inside [0, width] x [0, height]
fn reflect(particle: &mut Particle, width: f32, height: f32) {
    if particle.position.x <= 0.0 || particle.position.x >= width {
        particle.velocity.x = -particle.velocity.x;
        particle.position.x = particle.position.x.clamp(0.0, width.max(0.0));
    }

    if particle.position.y <= 0.0 || particle.position.y >= height {
        particle.velocity.y = -particle.velocity.y;
        particle.position.y = particle.position.y.clamp(0.0, height.max(0.0));
    }
}
