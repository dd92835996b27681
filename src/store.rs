/*
 * Particle Store Module
 *
 * Owns the current generation of particles together with the canvas size
 * they were created for. The store is rebuilt wholesale on every resize;
 * old particles are never rescaled or carried over.
 */

use rand::Rng;

use crate::params::FieldParams;
use crate::particle::Particle;

#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every particle with a fresh random generation sized for the canvas.
    pub fn initialize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, params: &FieldParams, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        // A collapsed canvas (e.g. minimized window) holds nothing
        let count = if self.width > 0.0 && self.height > 0.0 {
            params.particle_count(self.width)
        } else {
            0
        };

        self.particles = (0..count)
            .map(|_| Particle::random(&mut *rng, self.width, self.height, params))
            .collect();

        log::debug!(
            "initialized {} particles for {}x{} canvas",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn count_depends_on_width() {
        let params = FieldParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut store = ParticleStore::new();

        store.initialize(500.0, 800.0, &params, &mut rng);
        assert_eq!(store.len(), 50);

        store.initialize(1024.0, 800.0, &params, &mut rng);
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn resize_regenerates_instead_of_rescaling() {
        let params = FieldParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut store = ParticleStore::new();

        store.initialize(1024.0, 800.0, &params, &mut rng);
        let before: Vec<Particle> = store.particles().to_vec();

        store.initialize(500.0, 800.0, &params, &mut rng);
        assert_eq!(store.len(), 50);
        assert_eq!(store.width(), 500.0);

        for p in store.particles() {
            assert!(p.position.x <= 500.0);
            // A rescale would map old positions by 500/1024; fresh ones don't line up
            assert!(!before.contains(p));
        }
    }

    #[test]
    fn collapsed_canvas_is_empty() {
        let params = FieldParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut store = ParticleStore::new();

        store.initialize(0.0, 600.0, &params, &mut rng);
        assert!(store.is_empty());
    }
}
