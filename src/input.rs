/*
 * Input Module
 *
 * This module forwards window events to the particle field:
 * - Pointer movement (converted to canvas coordinates)
 * - Pointer leaving the window
 * - Window resize, which regenerates the field
 * - Keyboard shortcuts for the panel and interaction mode
 */

use nannou::prelude::*;

use crate::app::{apply_settings, Model};
use crate::frame::window_to_canvas;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.field.pointer_moved(window_to_canvas(pos, app.window_rect()));
}

// Mouse left the window; particles drift freely again
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.field.pointer_left();
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if model.settings.enabled {
        model.field.resize(size.x, size.y);
    }
}

// H hides the panel, M flips between pulling and pushing
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::H => model.show_panel = !model.show_panel,
        Key::M => {
            let previous = model.settings.clone();
            model.settings.interaction = model.settings.interaction.toggled();
            apply_settings(app, model, &previous);
        }
        _ => {}
    }
}

// Pass raw events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
