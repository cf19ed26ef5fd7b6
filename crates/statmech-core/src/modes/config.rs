use super::rot::{Geometry, RigidRotor};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Declarative rotational-mode definition for one species.
///
/// This is the explicit-parameter construction path: geometry and rotational
/// temperatures are stated in the data file rather than derived from a
/// structure. Species whose parameters should be derived are constructed in
/// code via [`RigidRotor::from_structure`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RotModeConfig {
    pub symmetry_number: u32,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub rot_temperatures: Option<Vec<f64>>,
}

impl RotModeConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn build(self) -> Result<RigidRotor, ConfigError> {
        let geometry = self
            .geometry
            .ok_or(ConfigError::MissingParameter("geometry"))?;
        let rot_temperatures = self
            .rot_temperatures
            .ok_or(ConfigError::MissingParameter("rot_temperatures"))?;
        Ok(RigidRotor::from_rot_temperatures(
            self.symmetry_number,
            geometry,
            rot_temperatures,
        ))
    }
}
