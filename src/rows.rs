//! Row helpers laying out one to five cells across the usable page width.
//!
//! Every row starts at the left margin on the current line.  Cell widths are fractions of the
//! usable width (page width minus both margins) and must add up to 1; a row with invalid fractions
//! is rejected before anything is drawn.
//!
//! ```no_run
//! use ez_pdf::{CellSpec, EzPdf, RowOptions};
//! use ez_pdf::style::Alignment;
//!
//! # fn main() -> ez_pdf::Result<()> {
//! let mut pdf = EzPdf::default();
//! pdf.add_page(None);
//! pdf.add_one_cell_row(CellSpec::new("Quarterly summary"), &RowOptions::default())?;
//! pdf.add_two_cell_row(
//!     [
//!         CellSpec::new("Region").with_align(Alignment::Left).with_width(0.3),
//!         CellSpec::new("Revenue").with_align(Alignment::Right).with_width(0.7),
//!     ],
//!     &RowOptions::default(),
//! )?;
//! pdf.export("summary.pdf")?;
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};

use crate::document::{CellOptions, EzPdf};
use crate::error::Result;
use crate::layout::RowLayout;
use crate::style::{Alignment, Border, LineBreak, Rgb};

/// Default height of a row, in user units.
pub const DEFAULT_CELL_HEIGHT: f64 = 0.5;

/// Default height of [`EzPdf::add_empty_row`], in user units.
pub const DEFAULT_EMPTY_ROW_HEIGHT: f64 = 0.5;

/// Content and per-cell styling of one cell in a row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellSpec {
    text: String,
    align: Alignment,
    fill: bool,
    width: Option<f64>,
}

impl CellSpec {
    /// Creates a centered, unfilled cell that takes an equal share of the row.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn align(&self) -> Alignment {
        self.align
    }

    pub fn is_filled(&self) -> bool {
        self.fill
    }

    /// Returns the explicit width fraction, if one was set.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Sets the text alignment and returns the updated cell.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Fills the cell with the row's fill color.
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the width as a fraction of the usable page width.
    pub fn with_width(mut self, fraction: f64) -> Self {
        self.width = Some(fraction);
        self
    }
}

impl From<&str> for CellSpec {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CellSpec {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Row-wide settings shared by every cell of a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowOptions {
    /// Page width used for the usable width. `None` uses the current page.
    pub page_width: Option<f64>,
    /// Margin subtracted from both sides. `None` uses the document's left margin.
    pub margin: Option<f64>,
    pub border: Border,
    /// Continue on the next line after the row instead of to its right.
    pub new_line: bool,
    pub cell_height: f64,
    /// Applied when at least one cell of the row is filled.
    pub fill_color: Rgb,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            page_width: None,
            margin: None,
            border: Border::ALL,
            new_line: true,
            cell_height: DEFAULT_CELL_HEIGHT,
            fill_color: Rgb::BLACK,
        }
    }
}

impl RowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_width(mut self, page_width: f64) -> Self {
        self.page_width = Some(page_width);
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_border(mut self, border: impl Into<Border>) -> Self {
        self.border = border.into();
        self
    }

    pub fn with_new_line(mut self, new_line: bool) -> Self {
        self.new_line = new_line;
        self
    }

    pub fn with_cell_height(mut self, cell_height: f64) -> Self {
        self.cell_height = cell_height;
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<Rgb>) -> Self {
        self.fill_color = color.into();
        self
    }
}

impl EzPdf {
    /// Adds an empty, borderless line of `height` and moves to the next line.
    pub fn add_empty_row(&mut self, height: Option<f64>) -> Result<()> {
        let height = height.unwrap_or(DEFAULT_EMPTY_ROW_HEIGHT);
        let options = CellOptions::new()
            .with_border(Border::NONE)
            .with_line_break(LineBreak::NextLine);
        self.multi_cell(0.0, height, "", &options)
    }

    /// Sets the fill color used by filled cells.
    pub fn set_cell_fill_color(&mut self, r: u8, g: u8, b: u8) {
        self.set_fill_color(r, g, b);
    }

    /// Adds a single-line cell spanning the full usable width.
    ///
    /// The text is not wrapped. An explicit width fraction on `cell` is ignored.
    pub fn add_one_cell_row(
        &mut self,
        cell: impl Into<CellSpec>,
        options: &RowOptions,
    ) -> Result<RowLayout> {
        let cell = cell.into();
        if cell.fill {
            self.apply_fill_color(options.fill_color);
        }

        let (page_width, margin) = self.row_frame(options);
        let left = self.left_margin();
        self.break_page_if_needed(options.cell_height);
        let layout = RowLayout::compute(
            &[1.0],
            page_width,
            margin,
            left,
            self.y(),
            options.cell_height,
        )?;

        self.set_xy(left, layout.y);
        let cell_options = CellOptions {
            border: options.border,
            align: cell.align,
            fill: cell.fill,
            line_break: options.new_line.into(),
        };
        self.cell(layout.widths[0], options.cell_height, &cell.text, &cell_options)?;
        Ok(layout)
    }

    /// Adds a row of two cells. Default widths are one half each.
    pub fn add_two_cell_row(
        &mut self,
        cells: [CellSpec; 2],
        options: &RowOptions,
    ) -> Result<RowLayout> {
        self.add_row(&cells, options)
    }

    /// Adds a row of three cells. Default widths are one third each.
    pub fn add_three_cell_row(
        &mut self,
        cells: [CellSpec; 3],
        options: &RowOptions,
    ) -> Result<RowLayout> {
        self.add_row(&cells, options)
    }

    /// Adds a row of four cells. Default widths are one quarter each.
    pub fn add_four_cell_row(
        &mut self,
        cells: [CellSpec; 4],
        options: &RowOptions,
    ) -> Result<RowLayout> {
        self.add_row(&cells, options)
    }

    /// Adds a row of five cells. Default widths are one fifth each.
    pub fn add_five_cell_row(
        &mut self,
        cells: [CellSpec; 5],
        options: &RowOptions,
    ) -> Result<RowLayout> {
        self.add_row(&cells, options)
    }

    /// Adds a row of any number of wrapping cells.
    ///
    /// Cells without an explicit width get `1 / cells.len()`. The fractions must add up to 1,
    /// otherwise [`Error::InvalidCellWidths`](crate::Error::InvalidCellWidths) is returned and
    /// nothing is drawn. The whole row is moved to a new page when it does not fit on the current
    /// one. With `new_line` set, drawing continues below the tallest cell.
    pub fn add_row(&mut self, cells: &[CellSpec], options: &RowOptions) -> Result<RowLayout> {
        if cells.iter().any(|cell| cell.fill) {
            self.apply_fill_color(options.fill_color);
        }

        let default_fraction = 1.0 / cells.len().max(1) as f64;
        let fractions: Vec<f64> = cells
            .iter()
            .map(|cell| cell.width.unwrap_or(default_fraction))
            .collect();

        let (page_width, margin) = self.row_frame(options);
        let left = self.left_margin();
        let mut layout = RowLayout::compute(
            &fractions,
            page_width,
            margin,
            left,
            self.y(),
            options.cell_height,
        )?;

        let row_height = self.wrapped_row_height(cells, &layout.widths, options.cell_height);
        // A row taller than a fresh page cannot be kept together; it breaks inside its cells.
        let at_page_top = self.y() <= self.top_margin();
        if self.page_count() > 0 && !at_page_top && self.break_page_if_needed(row_height) {
            warn!("Row of {} cells moved to page {}", cells.len(), self.page_count());
            layout.y = self.y();
        }
        debug!(
            "Row of {} cells at y={:.3}: widths {:?}",
            cells.len(),
            layout.y,
            layout.widths
        );

        let start_page = self.page_count();
        let mut bottom = layout.y + options.cell_height;
        for (index, cell) in cells.iter().enumerate() {
            let is_last = index + 1 == cells.len();
            let line_break = if is_last && options.new_line {
                LineBreak::NextLine
            } else {
                LineBreak::Below
            };
            let cell_options = CellOptions {
                border: options.border,
                align: cell.align,
                fill: cell.fill,
                line_break,
            };

            self.set_xy(layout.offsets[index], layout.y);
            self.multi_cell(
                layout.widths[index],
                options.cell_height,
                &cell.text,
                &cell_options,
            )?;
            if self.page_count() == start_page {
                bottom = bottom.max(self.y());
            } else {
                bottom = self.y();
            }
        }

        layout.height = bottom - layout.y;
        if options.new_line {
            self.set_xy(self.left_margin(), bottom);
        } else {
            self.set_xy(layout.right(), layout.y);
        }

        Ok(layout)
    }

    /// Height of the row once every cell is wrapped to its width.
    fn wrapped_row_height(&self, cells: &[CellSpec], widths: &[f64], cell_height: f64) -> f64 {
        let padding = 2.0 * self.cell_margin();
        let lines = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| self.wrap_lines(&cell.text, width - padding).len())
            .max()
            .unwrap_or(1)
            .max(1);
        lines as f64 * cell_height
    }

    fn apply_fill_color(&mut self, color: Rgb) {
        self.set_cell_fill_color(color.r, color.g, color.b);
    }

    fn row_frame(&self, options: &RowOptions) -> (f64, f64) {
        let page_width = options.page_width.unwrap_or_else(|| self.page_width());
        let margin = options.margin.unwrap_or_else(|| self.left_margin());
        (page_width, margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentOptions, Margins};
    use crate::error::Error;

    fn document() -> EzPdf {
        let mut pdf = EzPdf::new(DocumentOptions::new().with_margins(Margins::uniform(0.5)));
        pdf.add_page(None);
        pdf
    }

    #[test]
    fn one_cell_row_spans_usable_width() {
        let mut pdf = document();
        let layout = pdf
            .add_one_cell_row("Add 1 Cell Row - Align Center", &RowOptions::default())
            .unwrap();
        assert_eq!(layout.widths, vec![7.5]);
        assert_eq!(layout.offsets, vec![0.5]);
        assert_eq!((pdf.x(), pdf.y()), (0.5, 1.0));
    }

    #[test]
    fn one_cell_row_honours_explicit_page_width_and_margin() {
        let mut pdf = document();
        let options = RowOptions::new().with_page_width(8.0).with_margin(1.0);
        let layout = pdf.add_one_cell_row("narrow", &options).unwrap();
        assert_eq!(layout.widths, vec![6.0]);
    }

    #[test]
    fn one_cell_row_without_new_line_stays_on_the_line() {
        let mut pdf = document();
        let options = RowOptions::new().with_new_line(false);
        pdf.add_one_cell_row("first", &options).unwrap();
        assert_eq!((pdf.x(), pdf.y()), (8.0, 0.5));
    }

    #[test]
    fn three_equal_cells_are_accepted() {
        let mut pdf = document();
        let layout = pdf
            .add_three_cell_row(
                [CellSpec::new("a"), CellSpec::new("b"), CellSpec::new("c")],
                &RowOptions::default(),
            )
            .unwrap();
        assert_eq!(layout.len(), 3);
        assert!((layout.widths[1] - 2.5).abs() < 1e-9);
        assert!((layout.offsets[2] - 5.5).abs() < 1e-9);
        assert_eq!(pdf.x(), 0.5);
        assert!((pdf.y() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_widths_are_rejected_without_drawing() {
        let mut pdf = document();
        let err = pdf
            .add_two_cell_row(
                [
                    CellSpec::new("a").with_width(0.6),
                    CellSpec::new("b").with_width(0.6),
                ],
                &RowOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCellWidths { .. }));
        assert_eq!((pdf.x(), pdf.y()), (0.5, 0.5));
    }

    #[test]
    fn custom_widths_set_offsets() {
        let mut pdf = document();
        let layout = pdf
            .add_four_cell_row(
                [
                    CellSpec::new("a").with_width(0.1),
                    CellSpec::new("b").with_width(0.2),
                    CellSpec::new("c").with_width(0.3),
                    CellSpec::new("d").with_width(0.4),
                ],
                &RowOptions::default(),
            )
            .unwrap();
        let expected_offsets = [0.5, 1.25, 2.75, 5.0];
        for (offset, expected) in layout.offsets.iter().zip(expected_offsets) {
            assert!((offset - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn row_height_follows_tallest_wrapped_cell() {
        let mut pdf = document();
        let long = "word ".repeat(60);
        let layout = pdf
            .add_two_cell_row(
                [CellSpec::new(long), CellSpec::new("short")],
                &RowOptions::default().with_cell_height(0.25),
            )
            .unwrap();
        assert!(layout.height > 0.25);
        assert!((pdf.y() - (0.5 + layout.height)).abs() < 1e-9);
    }

    #[test]
    fn row_without_new_line_continues_to_the_right() {
        let mut pdf = document();
        let options = RowOptions::new().with_new_line(false);
        pdf.add_five_cell_row(
            [
                CellSpec::new("1"),
                CellSpec::new("2"),
                CellSpec::new("3"),
                CellSpec::new("4"),
                CellSpec::new("5"),
            ],
            &options,
        )
        .unwrap();
        assert!((pdf.x() - 8.0).abs() < 1e-9);
        assert_eq!(pdf.y(), 0.5);
    }

    #[test]
    fn filled_cell_applies_row_fill_color() {
        let mut pdf = document();
        let options = RowOptions::new().with_fill_color((195, 223, 236));
        pdf.add_three_cell_row(
            [
                CellSpec::new("filled").with_fill(true),
                CellSpec::new("plain"),
                CellSpec::new("plain"),
            ],
            &options,
        )
        .unwrap();
        assert_eq!(pdf.fill_color(), Rgb::new(195, 223, 236));
    }

    #[test]
    fn unfilled_row_keeps_fill_color() {
        let mut pdf = document();
        pdf.set_cell_fill_color(10, 20, 30);
        pdf.add_one_cell_row("plain", &RowOptions::new().with_fill_color((1, 2, 3)))
            .unwrap();
        assert_eq!(pdf.fill_color(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn row_crossing_the_page_break_moves_as_a_whole() {
        let mut pdf = document();
        pdf.set_y(pdf.page_break_trigger() - 0.1);
        let layout = pdf
            .add_two_cell_row([CellSpec::new("a"), CellSpec::new("b")], &RowOptions::default())
            .unwrap();
        assert_eq!(pdf.page_count(), 2);
        assert_eq!(layout.y, 0.5);
        assert_eq!(pdf.y(), 1.0);
    }

    #[test]
    fn wrapped_row_near_the_page_break_moves_with_its_full_height() {
        let mut pdf = document();
        pdf.set_y(pdf.page_break_trigger() - 0.6);
        let long = "word ".repeat(80);
        let layout = pdf
            .add_two_cell_row(
                [CellSpec::new(long), CellSpec::new("short")],
                &RowOptions::default(),
            )
            .unwrap();

        assert_eq!(pdf.page_count(), 2);
        assert_eq!(layout.y, 0.5);
        assert!(layout.height > 0.5, "row height {}", layout.height);
        assert!((pdf.y() - (layout.y + layout.height)).abs() < 1e-9);
    }

    #[test]
    fn row_taller_than_a_page_is_not_moved_from_the_page_top() {
        let mut pdf = document();
        let long = "word ".repeat(2000);
        pdf.add_two_cell_row(
            [CellSpec::new(long), CellSpec::new("short")],
            &RowOptions::default(),
        )
        .unwrap();

        // Only the overflowing cell continues onto later pages.
        assert!(pdf.page_count() > 1);
    }

    #[test]
    fn empty_row_advances_by_its_height() {
        let mut pdf = document();
        pdf.add_empty_row(None).unwrap();
        assert_eq!((pdf.x(), pdf.y()), (0.5, 1.0));
        pdf.add_empty_row(Some(0.25)).unwrap();
        assert_eq!(pdf.y(), 1.25);
    }

    #[test]
    fn empty_cell_list_is_rejected() {
        let mut pdf = document();
        assert!(matches!(
            pdf.add_row(&[], &RowOptions::default()),
            Err(Error::InvalidRow(_))
        ));
    }
}
