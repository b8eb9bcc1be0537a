//! Row measurement

use crate::Item;

/// Aggregate size of one row
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowMetrics {
    /// Sum of item widths plus padding between neighbours
    pub width: f32,
    /// Tallest item in the row
    pub height: f32,
}

/// Measure a row using each item's currently stored size.
///
/// Padding goes between consecutive items only, so an empty row measures
/// zero in both directions.
pub fn row_metrics(row: &[Item], padding: f32) -> RowMetrics {
    if row.is_empty() {
        return RowMetrics::default();
    }

    let gaps = (row.len() - 1) as f32 * padding;
    let width = row.iter().map(Item::width).sum::<f32>() + gaps;
    let height = row.iter().map(Item::height).fold(0.0, f32::max);

    RowMetrics { width, height }
}
