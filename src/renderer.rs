/*
 * Renderer Module
 *
 * This module paints the particle field onto a drawing Surface:
 * - Clears the canvas
 * - Draws every particle as a filled circle in the accent color
 * - Draws connection lines between nearby particles, fading with distance
 *
 * Connection lines use a pairwise scan over the whole store, which is fine
 * at the particle counts used here (at most a few hundred).
 */

use nannou::color::Srgb;
use nannou::prelude::*;

use crate::params::FieldParams;
use crate::particle::Particle;

/// A 2D drawing target in canvas coordinates.
pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Srgb<u8>, alpha: f32);
    fn stroke_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Srgb<u8>, alpha: f32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles_drawn: usize,
    pub lines_drawn: usize,
}

/// Opacity of the line between two particles `distance` apart, or `None` if
/// they are too far apart to be connected.
pub fn line_opacity(distance: f32, params: &FieldParams) -> Option<f32> {
    if distance < params.connection_distance {
        Some((1.0 - distance / params.connection_distance) * params.max_line_opacity)
    } else {
        None
    }
}

// Every pair closer than the connection distance, each pair reported once
pub fn connections(particles: &[Particle], params: &FieldParams) -> Vec<Connection> {
    let mut found = Vec::new();

    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let distance = a.position.distance(b.position);
            if let Some(opacity) = line_opacity(distance, params) {
                found.push(Connection { from: i, to: j, opacity });
            }
        }
    }

    found
}

// Paint one frame of the field
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    accent: Srgb<u8>,
    reduced_motion: bool,
    params: &FieldParams,
) -> FrameStats {
    surface.clear();

    for particle in particles {
        surface.fill_circle(particle.position, particle.size, accent, particle.opacity);
    }

    let mut stats = FrameStats {
        particles_drawn: particles.len(),
        lines_drawn: 0,
    };

    // Connection lines are motion-heavy; leave them out under reduced motion
    if !reduced_motion {
        for connection in connections(particles, params) {
            surface.stroke_line(
                particles[connection.from].position,
                particles[connection.to].position,
                params.line_width,
                accent,
                connection.opacity,
            );
            stats.lines_drawn += 1;
        }
    }

    stats
}
