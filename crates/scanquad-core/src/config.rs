// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editing-screen configuration, passed explicitly to the edit surface at
// construction. There is no process-wide capture state.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Result, ScanQuadError};

/// Settings for one scanning/editing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Fractional inset of the default quadrilateral on each side
    /// (0.05 gives the 5%..95% rectangle).
    pub default_inset: f64,
    /// Fixed rotation from sensor orientation to the portrait preview, in degrees.
    pub sensor_rotation_degrees: f64,
    /// Draw live detector quads with animation.
    pub animate_detections: bool,
    /// Whether the four edge-midpoint handles take part in hit-testing.
    pub edge_handles_enabled: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_inset: 0.05,
            sensor_rotation_degrees: 90.0,
            animate_detections: true,
            edge_handles_enabled: true,
        }
    }
}

impl ScanConfig {
    /// Check field ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..0.5).contains(&self.default_inset) {
            return Err(ScanQuadError::InvalidConfig(format!(
                "default_inset must be in [0, 0.5), got {}",
                self.default_inset
            )));
        }
        if !self.sensor_rotation_degrees.is_finite() {
            return Err(ScanQuadError::InvalidConfig(
                "sensor_rotation_degrees must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Sensor rotation in radians.
    pub fn sensor_rotation_radians(&self) -> f64 {
        self.sensor_rotation_degrees.to_radians()
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        debug!(?config, "Scan configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ScanConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.default_inset, 0.05);
        assert!((config.sensor_rotation_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = ScanConfig::from_json_str(r#"{ "animate_detections": false }"#)
            .expect("parse partial config");
        assert!(!config.animate_detections);
        assert!(config.edge_handles_enabled);
        assert_eq!(config.sensor_rotation_degrees, 90.0);
    }

    #[test]
    fn out_of_range_inset_is_rejected() {
        let err = ScanConfig::from_json_str(r#"{ "default_inset": 0.5 }"#)
            .expect_err("inset of one half leaves no area");
        assert!(matches!(err, ScanQuadError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ScanConfig::from_json_str("{ not json").expect_err("malformed");
        assert!(matches!(err, ScanQuadError::Serialization(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "default_inset": 0.1, "edge_handles_enabled": false }}"#)
            .expect("write config");
        let config = ScanConfig::from_json_file(file.path()).expect("load config");
        assert_eq!(config.default_inset, 0.1);
        assert!(!config.edge_handles_enabled);
    }
}
