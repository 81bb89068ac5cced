//! Global configuration for graph loading and report rendering.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PpiError, Result};

/// Configuration for PPI graph loading and the reporting surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpiConfig {
    /// Minimum normalized confidence an interaction needs to enter the graph.
    pub threshold: f64,
    /// Diameter-sweep progress cadence, in processed vertices.
    pub progress_interval: usize,
    /// How many neighbors the search report lists before truncating.
    pub neighbor_preview: usize,
    /// Default protein-info file offered by the interactive menu.
    pub info_path: PathBuf,
    /// Default interaction-links file offered by the interactive menu.
    pub links_path: PathBuf,
}

impl Default for PpiConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            progress_interval: 100,
            neighbor_preview: 10,
            info_path: PathBuf::from("data/9606.protein.info.v12.0.txt"),
            links_path: PathBuf::from("data/9606.protein.links.v12.0.txt"),
        }
    }
}

impl PpiConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(PpiError::Config(format!(
                "threshold must lie in [0, 1], got {}",
                self.threshold
            )));
        }
        if self.progress_interval == 0 {
            return Err(PpiError::Config(
                "progress_interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PpiConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let config = PpiConfig {
            threshold: 1.5,
            ..PpiConfig::default()
        };
        assert!(matches!(config.validate(), Err(PpiError::Config(_))));
    }
}
