//! # Configuration
//!
//! Tunables for the scanner, the refresh policy and the outline style.
//!
//! Every field has a compiled-in default, so an empty JSON object (or no file at all) yields
//! the stock behaviour: quartz ore within 32 blocks, nether only, white outlines.
//!
//! ```json
//! {
//!     "range": 48,
//!     "target_block": "ancient_debris",
//!     "restrict_dimension": null,
//!     "outline_color": { "r": 1.0, "g": 0.4, "b": 0.1, "a": 1.0 }
//! }
//! ```

use std::{fs, io, path::Path};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::highlighter_state::{
    rendering::vertex::Rgba,
    voxels::{block::block_type::BlockType, position::DimensionId},
};

/// Default scan radius in blocks.
pub const DEFAULT_RANGE: u32 = 32;
/// Default ticks between time-based refreshes.
pub const DEFAULT_REFRESH_INTERVAL_TICKS: u64 = 20;
/// Default squared observer displacement that forces a refresh (8 blocks).
pub const DEFAULT_MOVE_THRESHOLD_SQUARED: f64 = 64.0;
/// Default line width of the outlines.
pub const DEFAULT_OUTLINE_THICKNESS: f32 = 2.0;
/// Default outward expansion of each outline box.
pub const DEFAULT_OUTLINE_EPSILON: f64 = 0.002;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON for `HighlighterConfig`.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All tunables of the highlighter.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlighterConfig {
    /// Scan radius in blocks.
    pub range: u32,
    /// The block type to highlight.
    pub target_block: BlockType,
    /// Only scan and render in this dimension. `None` disables the restriction.
    pub restrict_dimension: Option<DimensionId>,
    /// Colour shared by every outline vertex.
    pub outline_color: Rgba,
    /// Line width of the outlines.
    pub outline_thickness: f32,
    /// How far each outline box is pushed out past the block's faces.
    pub outline_epsilon: f64,
    /// A refresh is due once more than this many ticks have passed.
    pub refresh_interval_ticks: u64,
    /// A refresh is due once the observer has moved further than this (squared).
    pub move_threshold_squared: f64,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        HighlighterConfig {
            range: DEFAULT_RANGE,
            target_block: BlockType::NetherQuartzOre,
            restrict_dimension: Some(DimensionId::nether()),
            outline_color: Rgba::new(1.0, 1.0, 1.0, 0.9),
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
            outline_epsilon: DEFAULT_OUTLINE_EPSILON,
            refresh_interval_ticks: DEFAULT_REFRESH_INTERVAL_TICKS,
            move_threshold_squared: DEFAULT_MOVE_THRESHOLD_SQUARED,
        }
    }
}

impl HighlighterConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: HighlighterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Loads `path` if it exists, falling back to the defaults.
    ///
    /// A missing file is normal and logged at info. A file that exists but cannot be used
    /// is logged as a warning, and the defaults apply.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Checks every value against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range == 0 {
            return Err(ConfigError::Invalid("range must be positive".into()));
        }
        if !(self.outline_thickness.is_finite() && self.outline_thickness > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "outline_thickness must be positive, got {}",
                self.outline_thickness
            )));
        }
        if !(self.outline_epsilon.is_finite() && self.outline_epsilon >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "outline_epsilon must be non-negative, got {}",
                self.outline_epsilon
            )));
        }
        if !self.outline_color.is_normalized() {
            return Err(ConfigError::Invalid(
                "outline_color components must be within [0, 1]".into(),
            ));
        }
        if !(self.move_threshold_squared.is_finite() && self.move_threshold_squared >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "move_threshold_squared must be non-negative, got {}",
                self.move_threshold_squared
            )));
        }
        Ok(())
    }
}
