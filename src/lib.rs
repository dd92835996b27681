/*
 * Particle Field - Module Definitions
 *
 * This file defines the module structure for the particle background.
 * The simulation core (store, physics, renderer, frame loop) is independent
 * of the window; the app, input and ui modules host it in a nannou window.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use frame::{DrawCommand, FrameRecording};
pub use params::{FieldParams, ParamsError};
pub use particle::Particle;
pub use renderer::{Connection, FrameStats, Surface};
pub use scheduler::{FrameHandle, FrameScheduler, FrameSlot};
pub use settings::{AccentColor, InteractionMode, Settings, SettingsError};
pub use simulator::{LoopState, ParticleField};
pub use store::ParticleStore;

// Define modules
pub mod app;
pub mod cli;
pub mod debug;
pub mod frame;
pub mod input;
pub mod params;
pub mod particle;
pub mod physics;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod simulator;
pub mod store;
pub mod ui;
