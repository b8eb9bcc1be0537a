//! Item tree validation
//!
//! Layout accepts any tree. These checks are opt-in, for callers that would
//! rather fail fast than lay out a tree with nonsensical sizes.

use crate::{Item, Result, ValidationError};
use std::collections::HashSet;

/// Maximum frame nesting depth accepted by validation
pub const MAX_FRAME_NESTING_DEPTH: usize = 64;

/// Check every item in the tree, returning the first problem found.
///
/// Rejects negative or non-finite sizes, frames nested deeper than
/// [`MAX_FRAME_NESTING_DEPTH`], and ids that appear more than once.
pub fn validate_items(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        validate_item(item, 0, &mut seen)?;
    }
    Ok(())
}

fn validate_item<'a>(item: &'a Item, depth: usize, seen: &mut HashSet<&'a str>) -> Result<()> {
    let id = item.id();

    if !is_valid_size(item.width()) {
        return Err(ValidationError::InvalidWidth {
            id: id.to_string(),
            value: item.width(),
        }
        .into());
    }
    if !is_valid_size(item.height()) {
        return Err(ValidationError::InvalidHeight {
            id: id.to_string(),
            value: item.height(),
        }
        .into());
    }
    if !seen.insert(id) {
        return Err(ValidationError::DuplicateId(id.to_string()).into());
    }

    if let Item::Frame(frame) = item {
        let depth = depth + 1;
        if depth > MAX_FRAME_NESTING_DEPTH {
            return Err(ValidationError::NestingTooDeep {
                id: id.to_string(),
                max: MAX_FRAME_NESTING_DEPTH,
            }
            .into());
        }
        for child in frame.children() {
            validate_item(child, depth, seen)?;
        }
    }

    Ok(())
}

fn is_valid_size(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
