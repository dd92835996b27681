/*
 * Simulator Module
 *
 * ParticleField ties the store, the physics step and the renderer into a
 * frame loop with two states: Running (exactly one frame requested) and
 * Stopped (nothing requested). Pointer and resize events only mutate state
 * owned by the field; the next tick observes them.
 */

use nannou::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::params::FieldParams;
use crate::physics::{self, StepInput};
use crate::renderer::{self, FrameStats, Surface};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::settings::{AccentColor, InteractionMode};
use crate::store::ParticleStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct ParticleField {
    store: ParticleStore,
    params: FieldParams,
    rng: ChaCha8Rng,
    mouse: Option<Vec2>,
    interaction: InteractionMode,
    accent: AccentColor,
    reduced_motion: bool,
    pending: Option<FrameHandle>,
    last_stats: FrameStats,
}

impl ParticleField {
    pub fn new(params: FieldParams, rng: ChaCha8Rng) -> Self {
        Self {
            store: ParticleStore::new(),
            params,
            rng,
            mouse: None,
            interaction: InteractionMode::default(),
            accent: AccentColor::default(),
            reduced_motion: false,
            pending: None,
            last_stats: FrameStats::default(),
        }
    }

    pub fn seeded(params: FieldParams, seed: u64) -> Self {
        Self::new(params, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_interaction(mut self, mode: InteractionMode) -> Self {
        self.interaction = mode;
        self
    }

    pub fn with_accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Populate the field for the canvas and request the first frame.
    pub fn mount<S: FrameScheduler + ?Sized>(&mut self, width: f32, height: f32, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }

        self.resize(width, height);
        self.pending = Some(scheduler.request_frame());

        log::info!("particle field mounted with {} particles", self.store.len());
    }

    /// Cancel the outstanding frame and stop the loop.
    pub fn unmount<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
            log::info!("particle field unmounted");
        }
    }

    pub fn state(&self) -> LoopState {
        if self.pending.is_some() {
            LoopState::Running
        } else {
            LoopState::Stopped
        }
    }

    /// Run one frame for `handle`: step the physics, paint onto `surface` and
    /// request the next frame.
    ///
    /// Returns `None` when the tick is ignored because the loop is stopped or
    /// the handle is not the outstanding one. Without a surface the frame is
    /// skipped but the loop keeps going.
    pub fn tick<S: FrameScheduler + ?Sized>(
        &mut self,
        handle: FrameHandle,
        scheduler: &mut S,
        surface: Option<&mut dyn Surface>,
    ) -> Option<FrameStats> {
        if self.pending != Some(handle) {
            log::trace!("ignoring stale frame {}", handle.id());
            return None;
        }

        let stats = match surface {
            Some(surface) => {
                self.step();
                let stats = renderer::render_frame(
                    surface,
                    self.store.particles(),
                    self.accent.rgb(),
                    self.reduced_motion,
                    &self.params,
                );
                self.last_stats = stats;
                stats
            }
            None => FrameStats::default(),
        };

        self.pending = Some(scheduler.request_frame());
        Some(stats)
    }

    /// Advance the physics by one tick unless reduced motion is active.
    pub fn step(&mut self) {
        if self.reduced_motion {
            return;
        }

        let input = StepInput {
            mouse: self.mouse,
            width: self.store.width(),
            height: self.store.height(),
            mode: self.interaction,
            params: &self.params,
        };
        physics::step(self.store.particles_mut(), &input);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("resizing particle field to {width}x{height}");
        self.store.initialize(width, height, &self.params, &mut self.rng);
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.mouse = Some(position);
    }

    pub fn pointer_left(&mut self) {
        self.mouse = None;
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    pub fn set_interaction(&mut self, mode: InteractionMode) {
        self.interaction = mode;
    }

    pub fn set_accent(&mut self, accent: AccentColor) {
        self.accent = accent;
    }

    /// Replace the tuning parameters. Physics picks them up on the next tick;
    /// counts and creation ranges apply from the next resize.
    pub fn set_params(&mut self, params: FieldParams) {
        self.params = params;
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn mouse(&self) -> Option<Vec2> {
        self.mouse
    }

    pub fn interaction(&self) -> InteractionMode {
        self.interaction
    }

    pub fn accent(&self) -> AccentColor {
        self.accent
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}
