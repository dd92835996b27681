/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame metrics
 * shown in the settings panel:
 * - FPS (frames per second)
 * - Frame time
 * - Particles and connection lines drawn in the last frame
 * - Whether the frame loop is running
 */

use std::time::Duration;

use crate::renderer::FrameStats;
use crate::simulator::LoopState;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particles_drawn: usize,
    pub lines_drawn: usize,
    pub loop_state: LoopState,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            particles_drawn: 0,
            lines_drawn: 0,
            loop_state: LoopState::Stopped,
        }
    }
}

impl DebugInfo {
    pub fn record_frame(&mut self, stats: FrameStats, loop_state: LoopState) {
        self.particles_drawn = stats.particles_drawn;
        self.lines_drawn = stats.lines_drawn;
        self.loop_state = loop_state;
    }
}
