/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct that holds every tuning constant
 * of the particle field: particle counts, creation ranges, mouse influence,
 * friction and connection-line settings. Parameters can be overridden from the
 * `[field]` table of the settings file and are validated before use.
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected parameter combinations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("max_line_opacity must be in [0, 1], got {0}")]
    LineOpacity(f32),

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("friction must be in (0, 1], got {0}")]
    Friction(f32),

    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
}

// Tuning parameters for the particle field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    // Canvas widths below this use the mobile particle count
    pub mobile_breakpoint: f32,
    pub mobile_count: usize,
    pub desktop_count: usize,

    // Creation ranges
    pub max_initial_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,

    // Physics
    pub influence_radius: f32,
    pub attraction_force: f32,
    pub friction: f32,

    // Connection lines
    pub connection_distance: f32,
    pub max_line_opacity: f32,
    pub line_width: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            mobile_count: 50,
            desktop_count: 100,
            max_initial_speed: 0.25,
            min_size: 1.0,
            max_size: 3.0,
            min_opacity: 0.2,
            max_opacity: 0.7,
            influence_radius: 150.0,
            attraction_force: 0.01,
            friction: 0.99,
            connection_distance: 100.0,
            max_line_opacity: 0.2,
            line_width: 0.5,
        }
    }
}

impl FieldParams {
    /// Number of particles to generate for a canvas of the given width.
    pub fn particle_count(&self, width: f32) -> usize {
        if width < self.mobile_breakpoint {
            self.mobile_count
        } else {
            self.desktop_count
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name, value });
            }
        }

        non_negative("mobile_breakpoint", self.mobile_breakpoint)?;
        non_negative("attraction_force", self.attraction_force)?;

        positive("influence_radius", self.influence_radius)?;
        positive("connection_distance", self.connection_distance)?;
        positive("line_width", self.line_width)?;

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ParamsError::Friction(self.friction));
        }

        // Speed is used symmetrically, so only its sign matters
        ordered("initial speed", 0.0, self.max_initial_speed)?;
        ordered("size", self.min_size, self.max_size)?;
        ordered("opacity", self.min_opacity, self.max_opacity)?;

        if !(0.0..=1.0).contains(&self.max_line_opacity) {
            return Err(ParamsError::LineOpacity(self.max_line_opacity));
        }

        Ok(())
    }

    fn float_fields(&self) -> [(&'static str, f32); 12] {
        [
            ("mobile_breakpoint", self.mobile_breakpoint),
            ("max_initial_speed", self.max_initial_speed),
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("min_opacity", self.min_opacity),
            ("max_opacity", self.max_opacity),
            ("influence_radius", self.influence_radius),
            ("attraction_force", self.attraction_force),
            ("friction", self.friction),
            ("connection_distance", self.connection_distance),
            ("max_line_opacity", self.max_line_opacity),
            ("line_width", self.line_width),
        ]
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParamsError::Negative { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), ParamsError> {
    if min <= max {
        Ok(())
    } else {
        Err(ParamsError::InvertedRange { name, min, max })
    }
}
