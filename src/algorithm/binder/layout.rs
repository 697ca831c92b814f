//! Table-layout detection for scanned pages
//!
//! Tabular pages (medication charts, billing tables) place many unrelated
//! cells near a date anchor. The binder tightens its candidate set on such
//! pages to avoid pulling in neighboring table cells as evidence.

use crate::models::TextBlock;

/// Minimum block count before a page can look tabular
const MIN_TABLE_BLOCKS: usize = 6;

/// Fraction of consecutive same-row pairs that marks a page as tabular
const ROW_ALIGNMENT_RATIO: f64 = 0.3;

/// Detect a table-like page layout
///
/// Blocks are sorted by vertical center; when more than 30% of consecutive
/// pairs sit within the row tolerance of each other, the page reads as rows
/// of aligned cells.
#[must_use]
pub fn is_table_like(blocks: &[&TextBlock], row_tolerance: f64) -> bool {
    if blocks.len() < MIN_TABLE_BLOCKS {
        return false;
    }

    let mut centers: Vec<f64> = blocks.iter().map(|b| b.bbox.center_y()).collect();
    centers.sort_by(|a, b| a.total_cmp(b));

    let aligned_pairs = centers
        .windows(2)
        .filter(|pair| (pair[1] - pair[0]).abs() < row_tolerance)
        .count();

    let ratio = aligned_pairs as f64 / (centers.len() - 1) as f64;
    ratio > ROW_ALIGNMENT_RATIO
}
