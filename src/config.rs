//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! moon-config.toml file. It provides a centralized way to configure the
//! terminal display options without rebuilding.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from moon-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Terminal display configuration
    pub display: DisplayConfig,
}

/// Terminal display and rendering configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Whether to draw the shaded ASCII moon below the data panel
    pub show_moon_art: bool,
    /// Width-to-height ratio of a terminal character cell, used to keep
    /// the moon disc round. 0.5 suits most monospace fonts.
    pub moon_aspect: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig {
                show_moon_art: true,
                moon_aspect: 0.5,
            },
        }
    }
}

impl Config {
    /// Load configuration from the moon-config.toml file.
    /// Falls back to default configuration if the file doesn't exist or
    /// is invalid.
    pub fn load() -> Self {
        Self::load_from_path("moon-config.toml")
    }

    /// Load configuration from the specified path.
    /// Falls back to default configuration if the file doesn't exist or
    /// is invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default display configuration");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save the current configuration to moon-config.toml.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("moon-config.toml", contents)?;
        Ok(())
    }
}
