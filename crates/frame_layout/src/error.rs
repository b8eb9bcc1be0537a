//! Error types for frame layout

use thiserror::Error;

/// A problem found while validating an item tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Item {id} has invalid width: {value}")]
    InvalidWidth { id: String, value: f32 },

    #[error("Item {id} has invalid height: {value}")]
    InvalidHeight { id: String, value: f32 },

    #[error("Frame {id} exceeds maximum nesting depth of {max}")]
    NestingTooDeep { id: String, max: usize },

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid item tree: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown item variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
