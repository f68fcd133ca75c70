use crate::error::ArenaError;
use log::{info, warn};
use macroquad::color::Color;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub population: PopulationConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub agents: AgentsConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Seed for macroquad's PRNG; the wall clock when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Arena size in pixels; 0 means "use the window size"
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ArenaConfig {
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PopulationConfig {
    #[serde(default = "default_structures")]
    pub structures: usize,
    #[serde(default = "default_agents")]
    pub agents: usize,
    #[serde(default = "default_player_rays")]
    pub player_rays: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerConfig {
    #[serde(default = "default_half_fov_degrees")]
    pub half_fov_degrees: f32,
    /// Sweep the whole circle instead of a bounded field of view
    #[serde(default)]
    pub full_circle: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AgentsConfig {
    /// Max per-axis jitter per frame, pixels
    #[serde(default = "default_wander")]
    pub wander: f32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default)]
    pub background_r: u8,
    #[serde(default)]
    pub background_g: u8,
    #[serde(default)]
    pub background_b: u8,
    /// Fraction of screen height filled by a wall at zero distance in the 3D view
    #[serde(default = "default_strip_height_ratio")]
    pub strip_height_ratio: f32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OptionsConfig {
    #[serde(default = "default_randomize_at_start")]
    pub randomize_at_start: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_command_log")]
    pub enable_command_log: bool,
}

// Default values
fn default_structures() -> usize { 10 }
fn default_agents() -> usize { 100 }
fn default_player_rays() -> usize { 100 }
fn default_half_fov_degrees() -> f32 { 30.0 }
fn default_wander() -> f32 { 1.0 }
fn default_window_title() -> String { "RayArena - 2D Raycasting".to_string() }
fn default_strip_height_ratio() -> f32 { 0.7 }
fn default_randomize_at_start() -> bool { true }
fn default_enable_command_log() -> bool { true }

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            structures: default_structures(),
            agents: default_agents(),
            player_rays: default_player_rays(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            half_fov_degrees: default_half_fov_degrees(),
            full_circle: false,
        }
    }
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            wander: default_wander(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: 0,
            background_g: 0,
            background_b: 0,
            strip_height_ratio: default_strip_height_ratio(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            randomize_at_start: default_randomize_at_start(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_command_log: default_enable_command_log(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            population: PopulationConfig::default(),
            player: PlayerConfig::default(),
            agents: AgentsConfig::default(),
            visual: VisualConfig::default(),
            options: OptionsConfig::default(),
            logging: LoggingConfig::default(),
            seed: None,
        }
    }
}

impl VisualConfig {
    pub fn background(&self) -> Color {
        Color::from_rgba(self.background_r, self.background_g, self.background_b, 255)
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ArenaError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ArenaError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from `path`, or use defaults if it is missing or broken
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No {} found, using default configuration", path.display());
            return Config::default();
        }

        match Self::from_path(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                warn!("Using default configuration");
                Config::default()
            }
        }
    }

    /// Window title from the config at `path`, without logging.
    ///
    /// The window is configured before the logger is installed, so any
    /// problem with the file is reported later by `load_from`.
    pub fn window_title_at(path: &Path) -> String {
        Self::from_path(path).unwrap_or_default().visual.window_title
    }
}
