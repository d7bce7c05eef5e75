//! Run configuration file handling.
//!
//! A `RunConfig` records how many terms to generate, which renderers to run
//! and where their output goes. It is stored as JSON and can be overridden
//! field by field from the command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::sequence::MAX_TERMS;
use crate::types::RenderBackend;

/// Tallest pixel image the pixel renderer will allocate
pub const PIXEL_HEIGHT_LIMIT: u32 = 4096;

/// Largest chart dimension accepted for SVG output
pub const CHART_SIZE_LIMIT: u32 = 8192;

/// Configuration for one fibprime run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of terms; `None` means ask on stdin
    pub terms: Option<i64>,
    /// Directory all renderers write into
    pub output_dir: PathBuf,
    /// Renderers to run, in order
    pub backends: Vec<RenderBackend>,
    /// Pixel image height cap; taller sequences are scaled down
    pub max_height: u32,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            terms: None,
            output_dir: PathBuf::from("."),
            backends: vec![RenderBackend::Pixel],
            max_height: 1024,
            chart_width: 1024,
            chart_height: 768,
        }
    }
}

impl RunConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(terms) = self.terms {
            if terms > MAX_TERMS as i64 {
                anyhow::bail!(
                    "terms must be at most {} (got {}); larger terms overflow 64-bit integers",
                    MAX_TERMS,
                    terms
                );
            }
        }

        if self.output_dir.as_os_str().is_empty() {
            anyhow::bail!("output_dir must not be empty");
        }

        if self.max_height == 0 || self.max_height > PIXEL_HEIGHT_LIMIT {
            anyhow::bail!("max_height must be between 1 and {}", PIXEL_HEIGHT_LIMIT);
        }

        for (name, value) in [
            ("chart_width", self.chart_width),
            ("chart_height", self.chart_height),
        ] {
            if !(64..=CHART_SIZE_LIMIT).contains(&value) {
                anyhow::bail!("{} must be between 64 and {}", name, CHART_SIZE_LIMIT);
            }
        }

        let mut seen = Vec::with_capacity(self.backends.len());
        for backend in &self.backends {
            if seen.contains(backend) {
                anyhow::bail!("backend '{}' is listed more than once", backend);
            }
            seen.push(*backend);
        }

        Ok(())
    }
}
