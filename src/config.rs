//! Configuration management for vanadis.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::colormaps::{SliceSpec, DEFAULT_GAMMA, DEFAULT_RESOLUTION};
use crate::error::{ColormapError, Result};

/// Command-line arguments for vanadis
#[derive(Parser, Debug)]
#[command(name = "vanadis")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Colormaps to concatenate, left to right: palette files, `.json`
    /// breakpoint tables, or `builtin:<name>`
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Keep only the breakpoints selected by `start:stop[:step]`
    #[arg(short, long, allow_hyphen_values = true)]
    pub slice: Option<String>,

    /// Spread breakpoints evenly over [0, 1]
    #[arg(short, long)]
    pub uniform: bool,

    /// Write a colorbar PNG to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the resulting breakpoint table as JSON to this path
    #[arg(short, long)]
    pub dump: Option<PathBuf>,

    /// Colorbar width in pixels
    #[arg(short = 'W', long, env = "VANADIS_WIDTH")]
    pub width: Option<u32>,

    /// Colorbar height in pixels
    #[arg(short = 'H', long, env = "VANADIS_HEIGHT")]
    pub height: Option<u32>,

    /// Number of lookup-table samples
    #[arg(short, long, env = "VANADIS_RESOLUTION")]
    pub resolution: Option<usize>,

    /// Gamma exponent applied when sampling
    #[arg(short, long, env = "VANADIS_GAMMA")]
    pub gamma: Option<f64>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "VANADIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "VANADIS_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Colorbar rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Colorbar width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Colorbar height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

/// Parameters given to every colormap the tool produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColormapConfig {
    /// Number of lookup-table samples
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Gamma exponent
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Colormap parameters
    #[serde(default)]
    pub colormap: ColormapConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// What a single run of the tool should do
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub inputs: Vec<String>,
    pub slice: Option<SliceSpec>,
    pub uniform: bool,
    pub output: Option<PathBuf>,
    pub dump: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Job)> {
        Self::from_args(Args::parse())
    }

    /// Resolve parsed arguments against the config file and defaults
    pub fn from_args(args: Args) -> Result<(Self, Job)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(width) = args.width {
            config.render.width = width;
        }
        if let Some(height) = args.height {
            config.render.height = height;
        }
        if let Some(resolution) = args.resolution {
            config.colormap.resolution = resolution;
        }
        if let Some(gamma) = args.gamma {
            config.colormap.gamma = gamma;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        let slice = args.slice.as_deref().map(SliceSpec::parse).transpose()?;

        let job = Job {
            inputs: args.inputs,
            slice,
            uniform: args.uniform,
            output: args.output,
            dump: args.dump,
        };

        Ok((config, job))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.render = other.render;
        self.colormap = other.colormap;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.render.width == 0 || self.render.height == 0 {
            return Err(ColormapError::Config {
                message: format!(
                    "Colorbar size must be non-zero, got {}x{}",
                    self.render.width, self.render.height
                ),
            });
        }

        if self.colormap.resolution == 0 {
            return Err(ColormapError::Config {
                message: "Colormap resolution cannot be 0".to_string(),
            });
        }

        if !self.colormap.gamma.is_finite() || self.colormap.gamma <= 0.0 {
            return Err(ColormapError::Config {
                message: format!(
                    "Gamma must be a finite positive number, got {}",
                    self.colormap.gamma
                ),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ColormapError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            colormap: ColormapConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for ColormapConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            gamma: default_gamma(),
        }
    }
}

// Default value functions for serde
fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    80
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

fn default_log_level() -> String {
    "info".to_string()
}
