/*
 * Frame Recording Module
 *
 * FrameRecording is a Surface that stores draw commands instead of
 * executing them. The simulator renders into it during update and the
 * window's view replays the recording onto nannou's Draw, converting canvas
 * coordinates (top-left origin, y down) to window coordinates (centered,
 * y up).
 */

use nannou::color::{Srgb, Srgba};
use nannou::prelude::*;

use crate::renderer::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Srgb<u8>,
        alpha: f32,
    },
    Line {
        start: Vec2,
        end: Vec2,
        width: f32,
        color: Srgb<u8>,
        alpha: f32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct FrameRecording {
    commands: Vec<DrawCommand>,
}

impl FrameRecording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded frame onto `draw` for a window of the given rect.
    pub fn replay(&self, draw: &Draw, window_rect: Rect, background: Srgb<u8>) {
        for command in &self.commands {
            match *command {
                DrawCommand::Clear => {
                    draw.background().color(background);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    alpha,
                } => {
                    draw.ellipse()
                        .xy(canvas_to_window(center, window_rect))
                        .radius(radius)
                        .color(with_alpha(color, alpha));
                }
                DrawCommand::Line {
                    start,
                    end,
                    width,
                    color,
                    alpha,
                } => {
                    draw.line()
                        .start(canvas_to_window(start, window_rect))
                        .end(canvas_to_window(end, window_rect))
                        .weight(width)
                        .color(with_alpha(color, alpha));
                }
            }
        }
    }
}

impl Surface for FrameRecording {
    // Clearing drops everything recorded so far; the frame starts over
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Srgb<u8>, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Srgb<u8>, alpha: f32) {
        self.commands.push(DrawCommand::Line {
            start,
            end,
            width,
            color,
            alpha,
        });
    }
}

// Convert canvas coordinates to nannou window coordinates
pub fn canvas_to_window(point: Vec2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}

// Convert nannou window coordinates to canvas coordinates
pub fn window_to_canvas(point: Point2, window_rect: Rect) -> Vec2 {
    vec2(point.x - window_rect.left(), window_rect.top() - point.y)
}

fn with_alpha(color: Srgb<u8>, alpha: f32) -> Srgba {
    srgba(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_previous_frame() {
        let mut frame = FrameRecording::new();
        frame.fill_circle(Vec2::ZERO, 1.0, rgb(0, 0, 0), 1.0);
        frame.clear();
        assert_eq!(frame.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn coordinate_conversion_round_trips_corners() {
        let rect = Rect::from_w_h(800.0, 600.0);

        assert_eq!(canvas_to_window(vec2(0.0, 0.0), rect), pt2(-400.0, 300.0));
        assert_eq!(canvas_to_window(vec2(800.0, 600.0), rect), pt2(400.0, -300.0));
        assert_eq!(window_to_canvas(pt2(0.0, 0.0), rect), vec2(400.0, 300.0));
    }
}
