use anyhow::{bail, Context, Result};
use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::camera::{NavigationMode, RigidFrame};
use crate::cli::Cli;
use crate::error::CameraError;

/// Application settings, read from an optional JSON file and the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: NavigationMode,
    pub speed: f32,
    pub world_up: [f32; 3],
    pub eye: [f32; 3],
    pub center: [f32; 3],
    pub fovy_degrees: f32,
    pub width: u32,
    pub height: u32,
    pub texture: Option<PathBuf>,
    pub show_ui: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: NavigationMode::Trackball,
            speed: 1.0,
            world_up: [0.0, 1.0, 0.0],
            eye: [0.0, 0.0, 3.0],
            center: [0.0, 0.0, 0.0],
            fovy_degrees: 45.0,
            width: 1280,
            height: 720,
            texture: None,
            show_ui: true,
        }
    }
}

impl Settings {
    /// Parse a settings file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings file (if any) with command-line overrides applied, validated
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(mode) = cli.mode {
            settings.mode = mode;
        }
        if let Some(speed) = cli.speed {
            settings.speed = speed;
        }
        if let Some(width) = cli.width {
            settings.width = width;
        }
        if let Some(height) = cli.height {
            settings.height = height;
        }
        if let Some(texture) = &cli.texture {
            settings.texture = Some(texture.clone());
        }
        if cli.no_ui {
            settings.show_ui = false;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            bail!("speed must be a non-negative number, got {}", self.speed);
        }
        if self.width == 0 || self.height == 0 {
            bail!("window size must be non-zero, got {}x{}", self.width, self.height);
        }
        if self.world_up_axis().length_squared() == 0.0 {
            bail!("world up axis must be non-zero");
        }
        self.initial_frame()
            .context("Initial eye/center/up do not form a camera frame")?;
        Ok(())
    }

    pub fn world_up_axis(&self) -> Vec3 {
        Vec3::from_array(self.world_up)
    }

    pub fn initial_frame(&self) -> Result<RigidFrame, CameraError> {
        RigidFrame::new(
            Vec3::from_array(self.eye),
            Vec3::from_array(self.center),
            self.world_up_axis(),
        )
    }
}
