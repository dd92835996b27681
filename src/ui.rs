/*
 * UI Module
 *
 * This module contains the settings panel drawn with nannou_egui. It offers
 * the toggles of the portfolio's particle background: effect on/off,
 * interaction mode, accent color and reduced motion, plus frame metrics.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::settings::{AccentColor, InteractionMode, Settings};
use crate::simulator::LoopState;

// Draw the panel and report whether any setting changed
pub fn update_ui(egui: &mut Egui, settings: &mut Settings, debug_info: &DebugInfo) -> bool {
    let ctx = egui.begin_frame();
    settings_panel(&ctx, settings, debug_info)
}

pub fn settings_panel(ctx: &egui::CtxRef, settings: &mut Settings, debug_info: &DebugInfo) -> bool {
    let before = settings.clone();

    egui::Window::new("Particle Background")
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            ui.checkbox(&mut settings.enabled, "Show particle effect");
            ui.checkbox(&mut settings.reduced_motion, "Reduce motion");

            ui.separator();
            ui.label("Mode");
            ui.horizontal(|ui| {
                for mode in [InteractionMode::Attract, InteractionMode::Repulse] {
                    ui.radio_value(&mut settings.interaction, mode, mode.label());
                }
            });

            ui.separator();
            ui.label("Color");
            ui.horizontal(|ui| {
                for color in AccentColor::ALL {
                    let rgb = color.rgb();
                    ui.colored_label(egui::Color32::from_rgb(rgb.red, rgb.green, rgb.blue), "●");
                    ui.selectable_value(&mut settings.accent, color, color.name())
                        .on_hover_text(color.hex());
                }
            });

            ui.collapsing("Debug Info", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Particles: {}", debug_info.particles_drawn));
                ui.label(format!("Connections: {}", debug_info.lines_drawn));
                let state = match debug_info.loop_state {
                    LoopState::Running => "running",
                    LoopState::Stopped => "stopped",
                };
                ui.label(format!("Loop: {state}"));
            });
        });

    *settings != before
}
