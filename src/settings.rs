/*
 * Settings Module
 *
 * Local user settings for the particle background: whether the effect is
 * shown, how the pointer interacts with particles, the accent color and the
 * reduced-motion preference. Settings are stored as a TOML file and may
 * carry a `[field]` table overriding the tuning parameters.
 */

use std::io;
use std::path::{Path, PathBuf};

use nannou::color::Srgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::{FieldParams, ParamsError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid field parameters: {0}")]
    Invalid(#[from] ParamsError),
}

/// How the pointer perturbs nearby particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Pull particles towards the pointer.
    #[default]
    Attract,
    /// Push particles away from the pointer.
    Repulse,
}

impl InteractionMode {
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Attract => InteractionMode::Repulse,
            InteractionMode::Repulse => InteractionMode::Attract,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Attract => "Pull Towards",
            InteractionMode::Repulse => "Push Away",
        }
    }
}

/// The fixed palette the accent color is picked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccentColor {
    #[default]
    #[serde(rename = "#3b82f6")]
    Blue,
    #[serde(rename = "#00c896")]
    Emerald,
    #[serde(rename = "#00e1a9")]
    Mint,
    #[serde(rename = "#009fdb")]
    Sky,
    #[serde(rename = "#00f0ff")]
    Cyan,
}

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Blue,
        AccentColor::Emerald,
        AccentColor::Mint,
        AccentColor::Sky,
        AccentColor::Cyan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AccentColor::Blue => "Blue",
            AccentColor::Emerald => "Emerald",
            AccentColor::Mint => "Mint",
            AccentColor::Sky => "Sky",
            AccentColor::Cyan => "Cyan",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            AccentColor::Blue => "#3b82f6",
            AccentColor::Emerald => "#00c896",
            AccentColor::Mint => "#00e1a9",
            AccentColor::Sky => "#009fdb",
            AccentColor::Cyan => "#00f0ff",
        }
    }

    pub fn rgb(self) -> Srgb<u8> {
        let (r, g, b) = match self {
            AccentColor::Blue => (0x3b, 0x82, 0xf6),
            AccentColor::Emerald => (0x00, 0xc8, 0x96),
            AccentColor::Mint => (0x00, 0xe1, 0xa9),
            AccentColor::Sky => (0x00, 0x9f, 0xdb),
            AccentColor::Cyan => (0x00, 0xf0, 0xff),
        };
        Srgb::new(r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub enabled: bool,
    pub interaction: InteractionMode,
    pub accent: AccentColor,
    pub reduced_motion: bool,
    pub field: FieldParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            interaction: InteractionMode::default(),
            accent: AccentColor::default(),
            reduced_motion: false,
            field: FieldParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings file at {path:?}, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_owned(),
                    source,
                })
            }
        };

        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.field.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = self.to_toml()?;
        let io_err = |source| SettingsError::Io {
            path: path.to_owned(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, text).map_err(io_err)?;

        log::debug!("saved settings to {path:?}");
        Ok(())
    }

    /// Load settings, logging any failure and falling back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}; falling back to default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_keeps_choices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.interaction = InteractionMode::Repulse;
        settings.accent = AccentColor::Cyan;
        settings.reduced_motion = true;
        settings.field.friction = 0.95;
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let settings = Settings::from_toml(
            r##"
            interaction = "repulse"
            accent = "#009fdb"

            [field]
            attraction_force = 0.02
            "##,
        )
        .unwrap();

        assert!(settings.enabled);
        assert_eq!(settings.interaction, InteractionMode::Repulse);
        assert_eq!(settings.accent, AccentColor::Sky);
        assert_eq!(settings.field.attraction_force, 0.02);
        assert_eq!(settings.field.friction, 0.99);
    }

    #[test]
    fn rejects_unknown_colors_and_bad_params() {
        assert!(matches!(
            Settings::from_toml(r##"accent = "#ff0000""##),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_toml("[field]\nfriction = 2.0"),
            Err(SettingsError::Invalid(ParamsError::Friction(_)))
        ));
    }

    #[test]
    fn rejects_non_finite_field_values() {
        assert!(matches!(
            Settings::from_toml("[field]\nmax_size = inf"),
            Err(SettingsError::Invalid(ParamsError::NotFinite { name: "max_size", .. }))
        ));
        assert!(matches!(
            Settings::from_toml("[field]\nattraction_force = nan"),
            Err(SettingsError::Invalid(ParamsError::NotFinite { name: "attraction_force", .. }))
        ));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "enabled = [").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn palette_hex_matches_rgb() {
        for color in AccentColor::ALL {
            let rgb = color.rgb();
            let hex = format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
            assert_eq!(hex, color.hex());
        }
        assert_eq!(InteractionMode::Attract.toggled(), InteractionMode::Repulse);
    }
}
