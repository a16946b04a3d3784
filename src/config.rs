//! Tunables for the particle field.
//!
//! A `FieldConfig` is built once (defaults or a JSON file) and handed to
//! `ParticleField`/`Sketch` at construction. Nothing mutates it afterwards.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::letter::MIN_PATH_POINTS;

/// Finer grids put millions of particles on an ordinary window.
pub const MIN_GRID_SIZE: f32 = 1.0;
/// Upper bound on the pointer trail length.
pub const MAX_PATH_LEN: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Spacing between home positions in the grid.
    pub grid_size: f32,
    /// Particles closer than this to the path are pulled towards it.
    pub interaction_radius: f32,
    /// Diameter of a drawn particle.
    pub particle_size: f32,
    pub attraction_force: f32,
    pub return_force: f32,
    /// Velocity multiplier applied every integration step.
    pub damping: f32,
    /// Pointer inactivity after which the path is cleared and particles
    /// start heading home.
    pub idle_threshold_ms: u64,
    /// Oldest path points are dropped beyond this many.
    pub max_path_len: usize,
    /// Paths shorter than this are never classified.
    pub min_classify_len: usize,
    pub particle_color: [u8; 3],
    pub background_color: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid_size: 10.0,
            interaction_radius: 30.0,
            particle_size: 2.0,
            attraction_force: 0.8,
            return_force: 0.5,
            damping: 0.9,
            idle_threshold_ms: 1000,
            max_path_len: 50,
            min_classify_len: MIN_PATH_POINTS,
            particle_color: [255, 255, 255],
            background_color: [0, 0, 0],
        }
    }
}

impl FieldConfig {
    pub fn idle_threshold(&self) -> Duration {
        Duration::from_millis(self.idle_threshold_ms)
    }

    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.grid_size.is_finite() && self.grid_size >= MIN_GRID_SIZE) {
            return Err(Error::InvalidConfig(format!(
                "grid_size must be at least {MIN_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if !(0.0_f32..=1.0).contains(&self.damping) {
            return Err(Error::InvalidConfig(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if !(1..=MAX_PATH_LEN).contains(&self.max_path_len) {
            return Err(Error::InvalidConfig(format!(
                "max_path_len must be within [1, {MAX_PATH_LEN}], got {}",
                self.max_path_len
            )));
        }

        let non_negative = [
            ("interaction_radius", self.interaction_radius),
            ("particle_size", self.particle_size),
            ("attraction_force", self.attraction_force),
            ("return_force", self.return_force),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.idle_threshold(), Duration::from_millis(1000));
        assert_eq!(config.max_path_len, 50);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FieldConfig =
            serde_json::from_str(r#"{ "grid_size": 20.0, "damping": 0.5 }"#).unwrap();
        assert_eq!(config.grid_size, 20.0);
        assert_eq!(config.damping, 0.5);
        assert_eq!(config.interaction_radius, 30.0);
        assert_eq!(config.particle_color, [255, 255, 255]);
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_grid = FieldConfig {
            grid_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(zero_grid.validate(), Err(Error::InvalidConfig(_))));

        let wild_damping = FieldConfig {
            damping: 1.5,
            ..Default::default()
        };
        assert!(wild_damping.validate().is_err());

        let negative_force = FieldConfig {
            return_force: -1.0,
            ..Default::default()
        };
        assert!(negative_force.validate().is_err());

        let tiny_grid = FieldConfig {
            grid_size: 1e-9,
            ..Default::default()
        };
        assert!(matches!(tiny_grid.validate(), Err(Error::InvalidConfig(_))));

        let empty_path = FieldConfig {
            max_path_len: 0,
            ..Default::default()
        };
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_rejects_huge_path_len() {
        let config: FieldConfig =
            serde_json::from_str(r#"{ "max_path_len": 18446744073709551615 }"#).unwrap();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let at_limit = FieldConfig {
            max_path_len: MAX_PATH_LEN,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_grid_size_lower_bound() {
        let at_limit = FieldConfig {
            grid_size: MIN_GRID_SIZE,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_classify_len_default_matches_classifier() {
        assert_eq!(FieldConfig::default().min_classify_len, MIN_PATH_POINTS);
    }

    #[test]
    fn test_load_missing_file() {
        let result = FieldConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "letter_particles_config_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "interaction_radius": 45.0 }"#).unwrap();

        let config = FieldConfig::load(&path).unwrap();
        assert_eq!(config.interaction_radius, 45.0);

        fs::remove_file(&path).unwrap();
    }
}
