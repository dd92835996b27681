/*
 * Application Module
 *
 * This module defines the nannou host for the particle field. The host owns
 * the window, the frame slot the field schedules into and the recording the
 * field renders into. Each nannou update delivers the due frame to the field;
 * the view replays the recorded frame and draws the settings panel on top.
 */

use std::path::PathBuf;

use nannou::color::Srgb;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::cli;
use crate::debug::DebugInfo;
use crate::frame::FrameRecording;
use crate::input;
use crate::renderer::Surface;
use crate::scheduler::FrameSlot;
use crate::settings::Settings;
use crate::simulator::{LoopState, ParticleField};
use crate::ui;

// Page background behind the field
fn background() -> Srgb<u8> {
    Srgb::new(10, 10, 10)
}

pub struct Model {
    pub field: ParticleField,
    pub frames: FrameSlot,
    pub recording: FrameRecording,
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub show_panel: bool,
    // Set by --reduced-motion; never written back to the settings file
    pub force_reduced_motion: bool,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let args = cli::args();

    let settings = Settings::load_or_default(&args.settings);

    let window_id = app
        .new_window()
        .title("Particle Field")
        .size(args.width, args.height)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .mouse_exited(input::mouse_exited)
        .resized(input::resized)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build window");

    let window = app.window(window_id).expect("window vanished after creation");
    let egui = Egui::from_window(&window);
    let window_rect = window.rect();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("particle seed {seed}");

    let field = ParticleField::seeded(settings.field, seed)
        .with_interaction(settings.interaction)
        .with_accent(settings.accent)
        .with_reduced_motion(settings.reduced_motion || args.reduced_motion);

    let mut model = Model {
        field,
        frames: FrameSlot::new(),
        recording: FrameRecording::new(),
        settings,
        settings_path: args.settings.clone(),
        egui,
        debug_info: DebugInfo::default(),
        show_panel: true,
        force_reduced_motion: args.reduced_motion,
    };

    if model.settings.enabled {
        model
            .field
            .mount(window_rect.w(), window_rect.h(), &mut model.frames);
    }

    model
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    if model.show_panel {
        model.egui.set_elapsed_time(update.since_start);
        let previous = model.settings.clone();
        if ui::update_ui(&mut model.egui, &mut model.settings, &model.debug_info) {
            apply_settings(app, model, &previous);
        }
    }

    if let Some(handle) = model.frames.take_due() {
        let window_rect = app.window_rect();

        // A collapsed window has nothing to draw on
        let surface = if window_rect.w() > 0.0 && window_rect.h() > 0.0 {
            Some(&mut model.recording as &mut dyn Surface)
        } else {
            None
        };

        if let Some(stats) = model.field.tick(handle, &mut model.frames, surface) {
            model.debug_info.record_frame(stats, model.field.state());
        }
    }
}

/// Push changed settings into the field and persist them.
pub fn apply_settings(app: &App, model: &mut Model, previous: &Settings) {
    sync_field(
        &mut model.field,
        &mut model.frames,
        &mut model.recording,
        &model.settings,
        previous,
        model.force_reduced_motion,
        app.window_rect(),
    );
    model.debug_info.loop_state = model.field.state();

    if let Err(err) = model.settings.save(&model.settings_path) {
        log::warn!("could not save settings: {err}");
    }
}

pub fn sync_field(
    field: &mut ParticleField,
    frames: &mut FrameSlot,
    recording: &mut FrameRecording,
    settings: &Settings,
    previous: &Settings,
    force_reduced_motion: bool,
    window_rect: Rect,
) {
    field.set_interaction(settings.interaction);
    field.set_accent(settings.accent);
    field.set_reduced_motion(settings.reduced_motion || force_reduced_motion);

    if settings.field != previous.field {
        field.set_params(settings.field);
        // Counts and creation ranges only take effect on a fresh generation
        if field.state() == LoopState::Running {
            field.resize(window_rect.w(), window_rect.h());
        }
    }

    if settings.enabled != previous.enabled {
        if settings.enabled {
            field.mount(window_rect.w(), window_rect.h(), frames);
        } else {
            field.unmount(frames);
            recording.reset();
        }
    }
}

// Replay the field's last frame and draw the panel
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    if model.recording.commands().is_empty() {
        draw.background().color(background());
    } else {
        model.recording.replay(&draw, app.window_rect(), background());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to render frame: {err:?}");
    }

    if model.show_panel {
        if let Err(err) = model.egui.draw_to_frame(&frame) {
            log::error!("failed to draw settings panel: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FieldParams;
    use crate::settings::{AccentColor, InteractionMode};

    fn setup() -> (ParticleField, FrameSlot, FrameRecording) {
        let mut frames = FrameSlot::new();
        let mut field = ParticleField::seeded(FieldParams::default(), 21);
        field.mount(800.0, 600.0, &mut frames);
        (field, frames, FrameRecording::new())
    }

    #[test]
    fn disabling_stops_loop_and_clears_recording() {
        let (mut field, mut frames, mut recording) = setup();
        let handle = frames.take_due().unwrap();
        field.tick(handle, &mut frames, Some(&mut recording));
        assert!(!recording.commands().is_empty());

        let previous = Settings::default();
        let settings = Settings {
            enabled: false,
            ..Settings::default()
        };
        sync_field(&mut field, &mut frames, &mut recording, &settings, &previous, false, Rect::from_w_h(800.0, 600.0));

        assert_eq!(field.state(), LoopState::Stopped);
        assert_eq!(frames.pending(), None);
        assert!(recording.commands().is_empty());
    }

    #[test]
    fn enabling_remounts_for_window_size() {
        let (mut field, mut frames, mut recording) = setup();
        field.unmount(&mut frames);

        let previous = Settings {
            enabled: false,
            ..Settings::default()
        };
        let settings = Settings::default();
        sync_field(&mut field, &mut frames, &mut recording, &settings, &previous, false, Rect::from_w_h(500.0, 400.0));

        assert_eq!(field.state(), LoopState::Running);
        assert_eq!(field.store().len(), 50);
    }

    #[test]
    fn appearance_changes_reach_field() {
        let (mut field, mut frames, mut recording) = setup();
        let previous = Settings::default();
        let settings = Settings {
            interaction: InteractionMode::Repulse,
            accent: AccentColor::Mint,
            reduced_motion: true,
            ..Settings::default()
        };

        sync_field(&mut field, &mut frames, &mut recording, &settings, &previous, false, Rect::from_w_h(800.0, 600.0));

        assert_eq!(field.interaction(), InteractionMode::Repulse);
        assert_eq!(field.accent(), AccentColor::Mint);
        assert!(field.reduced_motion());
        assert_eq!(field.state(), LoopState::Running);
    }

    #[test]
    fn param_changes_regenerate_running_field() {
        let (mut field, mut frames, mut recording) = setup();
        assert_eq!(field.store().len(), 100);

        let previous = Settings::default();
        let mut settings = Settings::default();
        settings.field.desktop_count = 30;
        settings.field.friction = 0.95;
        sync_field(&mut field, &mut frames, &mut recording, &settings, &previous, false, Rect::from_w_h(800.0, 600.0));

        assert_eq!(field.params(), &settings.field);
        assert_eq!(field.store().len(), 30);
        assert_eq!(field.state(), LoopState::Running);
    }

    #[test]
    fn param_changes_wait_for_mount_when_stopped() {
        let (mut field, mut frames, mut recording) = setup();
        field.unmount(&mut frames);

        let previous = Settings {
            enabled: false,
            ..Settings::default()
        };
        let mut settings = previous.clone();
        settings.field.desktop_count = 30;
        sync_field(&mut field, &mut frames, &mut recording, &settings, &previous, false, Rect::from_w_h(800.0, 600.0));

        assert_eq!(field.params().desktop_count, 30);
        assert_eq!(field.state(), LoopState::Stopped);
        assert_eq!(frames.pending(), None);
    }

    #[test]
    fn forced_reduced_motion_stays_out_of_settings() {
        let (mut field, mut frames, mut recording) = setup();
        let previous = Settings::default();
        let settings = Settings {
            accent: AccentColor::Sky,
            ..Settings::default()
        };

        sync_field(&mut field, &mut frames, &mut recording, &settings, &previous, true, Rect::from_w_h(800.0, 600.0));

        assert!(field.reduced_motion());
        assert!(!settings.reduced_motion);
        assert!(!settings.to_toml().unwrap().contains("reduced_motion = true"));
    }
}
