//! Row geometry: usable width, width-fraction validation, cell widths and offsets.
//!
//! Nothing here touches a document.  The row helpers in [`crate::rows`] compute a [`RowLayout`]
//! first and only then start drawing, so invalid rows never leave partial output behind.

use crate::error::{Error, Result};

/// Tolerance applied when checking that width fractions sum to 1.
pub const WIDTH_SUM_TOLERANCE: f64 = 1e-9;

/// Page width minus the left and right margins.
pub fn usable_width(page_width: f64, margin: f64) -> f64 {
    page_width - margin * 2.0
}

/// Checks that `fractions` are finite, non-negative and sum to 1 within [`WIDTH_SUM_TOLERANCE`].
pub fn validate_fractions(fractions: &[f64]) -> Result<()> {
    if fractions.is_empty() {
        return Err(Error::InvalidRow("a row needs at least one cell".to_owned()));
    }

    let sum: f64 = fractions.iter().sum();
    let well_formed = fractions.iter().all(|f| f.is_finite() && *f >= 0.0);
    if !well_formed || (sum - 1.0).abs() > WIDTH_SUM_TOLERANCE {
        return Err(Error::InvalidCellWidths {
            widths: fractions.to_vec(),
            sum,
        });
    }

    Ok(())
}

/// Multiplies the usable width by every fraction.
pub fn cell_widths(usable: f64, fractions: &[f64]) -> Vec<f64> {
    fractions.iter().map(|fraction| usable * fraction).collect()
}

/// Returns the x position of every cell, starting at `left` and accumulating prior widths.
pub fn cell_offsets(left: f64, widths: &[f64]) -> Vec<f64> {
    widths
        .iter()
        .scan(left, |x, width| {
            let offset = *x;
            *x += width;
            Some(offset)
        })
        .collect()
}

/// Computed placement of one row of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// Top edge of the row.
    pub y: f64,
    /// Absolute width of every cell.
    pub widths: Vec<f64>,
    /// Left edge of every cell.
    pub offsets: Vec<f64>,
    /// Height of the tallest cell once drawn; equal to the cell height until then.
    pub height: f64,
}

impl RowLayout {
    /// Validates `fractions` and computes the row geometry.
    pub fn compute(
        fractions: &[f64],
        page_width: f64,
        margin: f64,
        left: f64,
        y: f64,
        cell_height: f64,
    ) -> Result<Self> {
        validate_fractions(fractions)?;
        let widths = cell_widths(usable_width(page_width, margin), fractions);
        let offsets = cell_offsets(left, &widths);
        Ok(Self {
            y,
            widths,
            offsets,
            height: cell_height,
        })
    }

    /// Right edge of the last cell.
    pub fn right(&self) -> f64 {
        match (self.offsets.last(), self.widths.last()) {
            (Some(offset), Some(width)) => offset + width,
            _ => 0.0,
        }
    }

    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
