//! TOML quote files.
//!
//! A quote file holds the request under `[request]` and, optionally,
//! overrides of the pipeline constants under `[config]`:
//!
//! ```toml
//! [request]
//! job_type = "construction"
//! pool_shape = "rectangular"
//! waste_factor = 0.10
//! margin_rate = 0.20
//! tax_rate = 0.21
//!
//! [request.dimensions]
//! length = 10
//! width = 5
//! avg_depth = 1.5
//!
//! [request.labor]
//! auto_compute = true
//! hourly_rate = 2000
//! area_per_hour = 2.5
//!
//! [[request.materials]]
//! id = "ceramic"
//! name = "Ceramic tile"
//! pricing_mode = "per_area"
//! price_per_area = 50
//! active = true
//!
//! [config]
//! permit_surcharge_rate = 0.05
//! ```

use std::path::Path;

use pool_core::{QuoteConfig, QuoteError, QuoteRequest};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a quote file.
#[derive(Debug, Error)]
pub enum RequestLoadError {
    #[error("cannot read quote file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid [config] section: {0}")]
    InvalidConfig(#[from] QuoteError),
}

/// Contents of a quote file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteFile {
    pub request: QuoteRequest,

    #[serde(default)]
    pub config: QuoteConfig,
}

impl QuoteFile {
    /// Parses a quote file and validates its `[config]` section.
    pub fn parse(input: &str) -> Result<Self, RequestLoadError> {
        let file: QuoteFile = toml::from_str(input)?;
        file.config.validate()?;
        Ok(file)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, RequestLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }
}
