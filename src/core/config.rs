//! Edit session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Per-user editing policy: change budget, history depth and write modes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Maximum distinct coordinates one session may touch. `None` = unbounded.
    pub max_changed_blocks: Option<usize>,
    /// Number of completed sessions kept for undo.
    pub history_size: usize,
    /// Whether new sessions defer fragile blocks into placement queues.
    pub queue_enabled: bool,
    /// Skip per-write neighbour updates and fix up once at flush.
    pub fast_mode: bool,
    /// Largest radius accepted by shape and fill operations. `None` = unbounded.
    pub max_radius: Option<f64>,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            max_changed_blocks: None,
            history_size: 15,
            queue_enabled: true,
            fast_mode: false,
            max_radius: None,
        }
    }
}

impl EditConfig {
    /// Reject a radius above the configured ceiling.
    pub fn check_radius(&self, radius: f64) -> Result<()> {
        match self.max_radius {
            Some(max) if radius > max => Err(Error::invalid(format!(
                "radius {} exceeds the configured maximum of {}",
                radius, max
            ))),
            _ => Ok(()),
        }
    }

    /// Save as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::debug!("Loaded edit config from {}", path.display());
        Ok(config)
    }
}
