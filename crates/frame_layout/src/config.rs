//! Layout configuration

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Padding used between items, between rows and around a frame's border
pub const DEFAULT_PADDING: f32 = 50.0;

/// How child frame sizes feed into their parent's row metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    /// Row metrics and the sibling cursor use each child frame's size as
    /// stored before that child is laid out. A freshly built tree needs one
    /// pass per nesting level before it stops changing.
    #[default]
    Literal,
    /// Child frames are measured before their row, so a single pass settles.
    Settled,
}

/// Configuration for frame layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Uniform padding in layout units
    pub padding: f32,
    /// Sizing mode for nested frames
    pub sizing: SizingMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            sizing: SizingMode::Literal,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_sizing(mut self, sizing: SizingMode) -> Self {
        self.sizing = sizing;
        self
    }

    /// Check that the padding is a finite, non-negative number
    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "padding must be finite and non-negative, got {}",
                self.padding
            )));
        }
        Ok(())
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
