use crate::color::{Color, ColorPair};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSecondsWithFrac, serde_as};
use std::f64::consts::PI;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_LINE_WIDTH: f64 = 4.0;
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250);
pub const DEFAULT_START_ANGLE: f64 = -PI / 2.0;
pub const DEFAULT_END_ANGLE: f64 = 3.0 * PI / 2.0;

/// Style of a pie. Angles are radians, swept from `start_angle` towards
/// `end_angle`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    pub line_width: f64,
    #[serde_as(as = "DurationSecondsWithFrac<f64>")]
    pub animation_duration: Duration,
    pub start_angle: f64,
    pub end_angle: f64,
    pub active_colors: ColorPair,
    pub inactive_colors: ColorPair,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            active_colors: ColorPair::new(
                Color::new(0.2, 0.6, 0.35, 1.0),
                Color::new(0.15, 0.45, 0.25, 1.0),
            ),
            inactive_colors: ColorPair::new(
                Color::new(0.15, 0.15, 0.15, 0.5),
                Color::new(0.25, 0.25, 0.25, 0.85),
            ),
        }
    }
}

impl Configuration {
    pub fn sanitized(mut self) -> Self {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            log::warn!(
                "Line width {} is not positive, using {}",
                self.line_width,
                DEFAULT_LINE_WIDTH
            );
            self.line_width = DEFAULT_LINE_WIDTH;
        }

        let angles_ok = self.start_angle.is_finite()
            && self.end_angle.is_finite()
            && self.start_angle < self.end_angle;
        if !angles_ok {
            log::warn!(
                "Sweep {}..{} is empty or reversed, using a full circle",
                self.start_angle,
                self.end_angle
            );
            self.start_angle = DEFAULT_START_ANGLE;
            self.end_angle = DEFAULT_END_ANGLE;
        }
        self
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "pie", "pie-view").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Reads the config file (if any) with `PIE_*` environment overrides on top,
/// e.g. `PIE_LINE_WIDTH=6` or `PIE_ACTIVE_COLORS__FILL=#ff0000`.
pub fn load_config_from(path: PathBuf) -> Result<Configuration, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("PIE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let configuration: Configuration = s.try_deserialize()?;
    Ok(configuration.sanitized())
}

pub fn load_config() -> Result<Configuration, ConfigError> {
    load_config_from(get_config_path()?)
}

pub fn load_or_default() -> Configuration {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Configuration::default()
        }
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
