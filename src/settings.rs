//! Runtime configuration
//!
//! Loaded from a JSON file next to the binary; missing or malformed files
//! fall back to defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::CELL_COUNT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Grid cell budget; the grid is floor(sqrt(cell_count)) cells per side
    pub cell_count: usize,
    /// Doping seed; derived from the wall clock when absent
    pub seed: Option<u64>,
    /// Frames the headless demo runs before exiting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_count: CELL_COUNT,
            seed: None,
            demo_frames: 600,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
