//! Showcase document exercising every row helper.
//!
//! The sheet walks through one to five cell rows in each alignment, then borderless and filled
//! rows, enough rows to overflow the first page, and two extra pages.

use std::path::Path;

use log::info;

use crate::document::{DocumentOptions, EzPdf};
use crate::error::Result;
use crate::rows::{CellSpec, RowOptions};
use crate::style::{Alignment, Border, Rgb};

/// Fill color used by the highlighted rows.
pub const HIGHLIGHT: Rgb = Rgb::new(195, 223, 236);

/// Number of rows appended to overflow the first page.
const OVERFLOW_ROWS: usize = 10;

fn alignment_label(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "Align Left",
        Alignment::Center => "Align Center",
        Alignment::Right => "Align Right",
    }
}

fn cells<const N: usize>(align: Alignment) -> [CellSpec; N] {
    std::array::from_fn(|index| {
        CellSpec::new(format!(
            "Add {} Cell Row - Cell {} - {}",
            N,
            index + 1,
            alignment_label(align)
        ))
        .with_align(align)
    })
}

fn add_alignment_block(pdf: &mut EzPdf, align: Alignment, options: &RowOptions) -> Result<()> {
    info!("Adding 1-5 cell rows ({})", alignment_label(align));
    pdf.add_one_cell_row(
        CellSpec::new(format!("Add 1 Cell Row - {}", alignment_label(align))).with_align(align),
        options,
    )?;
    pdf.add_two_cell_row(cells::<2>(align), options)?;
    pdf.add_three_cell_row(cells::<3>(align), options)?;
    pdf.add_four_cell_row(cells::<4>(align), options)?;
    pdf.add_five_cell_row(cells::<5>(align), options)?;
    Ok(())
}

/// Builds the showcase document with the given creation options.
pub fn build_showcase(options: DocumentOptions) -> Result<EzPdf> {
    let mut pdf = EzPdf::new(options);
    let rows = RowOptions::default();

    pdf.add_page(None);
    for align in [Alignment::Center, Alignment::Left, Alignment::Right] {
        add_alignment_block(&mut pdf, align, &rows)?;
    }

    info!("Adding empty row");
    pdf.add_empty_row(None)?;

    let borderless = rows.with_border(Border::NONE);
    pdf.add_one_cell_row("Creating row without border", &borderless)?;
    pdf.add_one_cell_row(
        CellSpec::new("Creating row without border and with fill").with_fill(true),
        &borderless.with_fill_color(HIGHLIGHT),
    )?;

    let text = "Creating 3 row with border, and first cell is filled";
    pdf.add_three_cell_row(
        [
            CellSpec::new(text).with_fill(true),
            CellSpec::new(text),
            CellSpec::new(text),
        ],
        &rows.with_fill_color(HIGHLIGHT),
    )?;

    info!("Attempting to overfill page by adding {} rows", OVERFLOW_ROWS);
    for row in 1..=OVERFLOW_ROWS {
        pdf.add_one_cell_row(
            format!("Add 1 Cell Row - Align Center - Row {}", row),
            &rows,
        )?;
    }

    for _ in 0..2 {
        info!("Adding new page");
        pdf.add_page(None);
        pdf.add_three_cell_row(cells::<3>(Alignment::Center), &rows)?;
    }

    Ok(pdf)
}

/// Renders the showcase document to `path`.
pub fn run(path: impl AsRef<Path>, options: DocumentOptions) -> Result<usize> {
    let pdf = build_showcase(options)?;
    let pages = pdf.page_count();
    pdf.export(path)?;
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_overflows_onto_extra_pages() {
        let pdf = build_showcase(DocumentOptions::default()).unwrap();
        // Overflow rows spill onto a second page ahead of the two explicit pages.
        assert!(pdf.page_count() >= 3);
    }

    #[test]
    fn cell_labels_name_their_position() {
        let row = cells::<4>(Alignment::Right);
        assert_eq!(row[3].text(), "Add 4 Cell Row - Cell 4 - Align Right");
        assert_eq!(row[0].align(), Alignment::Right);
    }
}
