//! Cursor-based document wrapper over `printpdf`.
//!
//! [`EzPdf`] keeps a current position, margins, a current font and the fill/draw/text colors, and
//! exposes the classic cell primitives on top of `printpdf`'s absolute drawing API.  Coordinates are
//! measured from the top-left corner of the page in the document's [`Unit`].

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::{debug, trace, warn};
use printpdf::{Line, PdfDocument, PdfDocumentReference, PdfLayerReference, Point};

use crate::error::{Error, Result};
use crate::fonts::{FontCache, FontFamily, FontSpec, FontStyle};
use crate::page::{Orientation, PageFormat};
use crate::style::{Alignment, Border, LineBreak, Rgb};
use crate::units::Unit;

/// Default page margin in points (1 cm).
const DEFAULT_MARGIN_PT: f64 = 28.35;

/// Default border line width in points (0.2 mm).
const DEFAULT_LINE_WIDTH_PT: f64 = 0.567;

const DEFAULT_TITLE: &str = "ez_pdf document";

/// Creation options for an [`EzPdf`] document.
#[derive(Clone, Debug)]
pub struct DocumentOptions {
    title: String,
    unit: Unit,
    format: PageFormat,
    orientation: Orientation,
    font: FontSpec,
    margins: Option<Margins>,
    auto_page_break: bool,
    bottom_margin: Option<f64>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            unit: Unit::default(),
            format: PageFormat::default(),
            orientation: Orientation::default(),
            font: FontSpec::default(),
            margins: None,
            auto_page_break: true,
            bottom_margin: None,
        }
    }
}

impl DocumentOptions {
    /// Creates options with the default settings: inches, Legal, portrait, Times 8 pt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the user unit for all coordinates.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the default page format used by [`EzPdf::add_page`].
    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the page orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the initial font family.
    pub fn with_font(mut self, family: FontFamily) -> Self {
        self.font.family = family;
        self
    }

    /// Sets the initial font style.
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font.style = style;
        self
    }

    /// Sets the initial font size in points.
    pub fn with_font_size(mut self, size: u8) -> Self {
        self.font.size = size;
        self
    }

    /// Sets the page margins in user units.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Enables or disables the automatic page break.
    ///
    /// `bottom_margin` defaults to twice the default page margin.
    pub fn with_auto_page_break(mut self, enabled: bool, bottom_margin: Option<f64>) -> Self {
        self.auto_page_break = enabled;
        self.bottom_margin = bottom_margin;
        self
    }
}

/// Left, top and right page margins in user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
}

impl Margins {
    /// Creates margins with separate values for every side.
    pub fn new(left: f64, top: f64, right: f64) -> Self {
        Self { left, top, right }
    }

    /// Uses the same margin on every side.
    pub fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin)
    }
}

/// Options for a single [`EzPdf::cell`] or [`EzPdf::multi_cell`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellOptions {
    pub border: Border,
    pub align: Alignment,
    pub fill: bool,
    pub line_break: LineBreak,
}

impl CellOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }
}

struct CurrentPage {
    layer: PdfLayerReference,
    format: PageFormat,
    width: f64,
    height: f64,
}

/// A PDF document under construction with a drawing cursor.
pub struct EzPdf {
    document: PdfDocumentReference,
    fonts: FontCache,
    unit: Unit,
    default_format: PageFormat,
    orientation: Orientation,
    page: Option<CurrentPage>,
    page_count: usize,
    x: f64,
    y: f64,
    left_margin: f64,
    top_margin: f64,
    right_margin: f64,
    bottom_margin: f64,
    cell_margin: f64,
    auto_page_break: bool,
    font: FontSpec,
    fill_color: Rgb,
    draw_color: Rgb,
    text_color: Rgb,
    line_width: f64,
    last_height: f64,
}

impl Default for EzPdf {
    fn default() -> Self {
        Self::new(DocumentOptions::default())
    }
}

impl EzPdf {
    /// Creates an empty document. No page exists until [`EzPdf::add_page`] is called.
    pub fn new(options: DocumentOptions) -> Self {
        let unit = options.unit;
        let default_margin = unit.from_points(DEFAULT_MARGIN_PT);
        let margins = options
            .margins
            .unwrap_or_else(|| Margins::uniform(default_margin));

        debug!(
            "Creating document '{}' ({}, {:?}, {} {}pt)",
            options.title, unit, options.format, options.font.family, options.font.size
        );

        Self {
            document: PdfDocument::empty(options.title),
            fonts: FontCache::default(),
            unit,
            default_format: options.format,
            orientation: options.orientation,
            page: None,
            page_count: 0,
            x: margins.left,
            y: margins.top,
            left_margin: margins.left,
            top_margin: margins.top,
            right_margin: margins.right,
            bottom_margin: options.bottom_margin.unwrap_or(default_margin * 2.0),
            cell_margin: default_margin / 10.0,
            auto_page_break: options.auto_page_break,
            font: options.font,
            fill_color: Rgb::BLACK,
            draw_color: Rgb::BLACK,
            text_color: Rgb::BLACK,
            line_width: unit.from_points(DEFAULT_LINE_WIDTH_PT),
            last_height: 0.0,
        }
    }

    /// Appends a page and moves the cursor to the top-left margin.
    ///
    /// `None` uses the document's default format.
    pub fn add_page(&mut self, format: Option<PageFormat>) {
        self.push_page(format);
    }

    fn push_page(&mut self, format: Option<PageFormat>) -> PdfLayerReference {
        let format = format.unwrap_or(self.default_format);
        let (width, height) = self.orientation.apply(format.size(self.unit));
        let layer_name = format!("Page {} Layer 1", self.page_count + 1);

        let (page_index, layer_index) =
            self.document
                .add_page(self.unit.to_mm(width), self.unit.to_mm(height), layer_name);
        let layer = self.document.get_page(page_index).get_layer(layer_index);

        self.page = Some(CurrentPage {
            layer: layer.clone(),
            format,
            width,
            height,
        });
        self.page_count += 1;
        self.x = self.left_margin;
        self.y = self.top_margin;
        self.last_height = 0.0;

        debug!(
            "Added page {} ({:?}, {:.2}x{:.2}{})",
            self.page_count, format, width, height, self.unit
        );
        layer
    }

    /// Sets the current font.
    pub fn set_font(&mut self, family: FontFamily, style: FontStyle, size: u8) {
        self.font = FontSpec::new(family, size).with_style(style);
        debug!("Font set to {} {:?} {}pt", family, style, size);
    }

    /// Sets the current font from its name and style letters, e.g. `("Arial", "B", 10)`.
    pub fn set_font_by_name(&mut self, family: &str, style: &str, size: u8) -> Result<()> {
        let family = family.parse()?;
        let style = style.parse()?;
        self.set_font(family, style, size);
        Ok(())
    }

    /// Changes only the size of the current font.
    pub fn set_font_size(&mut self, size: u8) {
        self.font.size = size;
    }

    /// Sets the color used for filled cells.
    pub fn set_fill_color(&mut self, r: u8, g: u8, b: u8) {
        self.fill_color = Rgb::new(r, g, b);
    }

    /// Sets the color used for cell borders.
    pub fn set_draw_color(&mut self, r: u8, g: u8, b: u8) {
        self.draw_color = Rgb::new(r, g, b);
    }

    /// Sets the color used for text.
    pub fn set_text_color(&mut self, r: u8, g: u8, b: u8) {
        self.text_color = Rgb::new(r, g, b);
    }

    /// Sets the border line width in user units.
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Sets the left, top and right margins.
    pub fn set_margins(&mut self, margins: Margins) {
        self.left_margin = margins.left;
        self.top_margin = margins.top;
        self.right_margin = margins.right;
    }

    /// Enables or disables the automatic page break and sets the bottom margin that triggers it.
    pub fn set_auto_page_break(&mut self, enabled: bool, bottom_margin: f64) {
        self.auto_page_break = enabled;
        self.bottom_margin = bottom_margin;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Moves to `y` and back to the left margin.
    pub fn set_y(&mut self, y: f64) {
        self.x = self.left_margin;
        self.y = y;
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn left_margin(&self) -> f64 {
        self.left_margin
    }

    pub fn right_margin(&self) -> f64 {
        self.right_margin
    }

    pub fn top_margin(&self) -> f64 {
        self.top_margin
    }

    pub fn bottom_margin(&self) -> f64 {
        self.bottom_margin
    }

    /// Horizontal padding between a cell edge and its text.
    pub fn cell_margin(&self) -> f64 {
        self.cell_margin
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn font(&self) -> FontSpec {
        self.font
    }

    pub fn fill_color(&self) -> Rgb {
        self.fill_color
    }

    pub fn auto_page_break(&self) -> bool {
        self.auto_page_break
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Height of the last cell drawn.
    pub fn last_height(&self) -> f64 {
        self.last_height
    }

    /// Width of the current page, or of the default format while no page exists.
    pub fn page_width(&self) -> f64 {
        self.page_size().0
    }

    /// Height of the current page, or of the default format while no page exists.
    pub fn page_height(&self) -> f64 {
        self.page_size().1
    }

    fn page_size(&self) -> (f64, f64) {
        match &self.page {
            Some(page) => (page.width, page.height),
            None => self
                .orientation
                .apply(self.default_format.size(self.unit)),
        }
    }

    /// The y position beyond which the automatic page break starts a new page.
    pub fn page_break_trigger(&self) -> f64 {
        self.page_height() - self.bottom_margin
    }

    /// Returns whether a block of height `h` at the current position crosses the page break.
    pub fn would_break(&self, h: f64) -> bool {
        self.auto_page_break && self.y + h > self.page_break_trigger()
    }

    /// Starts a new page of the current format when a block of height `h` does not fit.
    ///
    /// The x position is preserved. Returns whether a page was added.
    pub fn break_page_if_needed(&mut self, h: f64) -> bool {
        if !self.would_break(h) {
            return false;
        }

        let x = self.x;
        let format = self.page.as_ref().map(|page| page.format);
        debug!(
            "Automatic page break at y={:.3}{} (trigger {:.3})",
            self.y,
            self.unit,
            self.page_break_trigger()
        );
        self.add_page(format);
        self.x = x;
        true
    }

    /// Width of `text` in the current font, in user units.
    pub fn string_width(&self, text: &str) -> f64 {
        self.unit.from_points(self.font.string_width_pt(text))
    }

    /// Performs a line break: back to the left margin and down by `h`, or by the last cell height.
    pub fn ln(&mut self, h: Option<f64>) {
        self.x = self.left_margin;
        self.y += h.unwrap_or(self.last_height);
    }

    /// Draws a single-line cell at the current position.
    ///
    /// A width of `0` extends the cell to the right margin.
    pub fn cell(&mut self, w: f64, h: f64, text: &str, options: &CellOptions) -> Result<()> {
        self.ensure_page();
        self.break_page_if_needed(h);

        let w = if w == 0.0 {
            self.page_width() - self.right_margin - self.x
        } else {
            w
        };
        let (x, y) = (self.x, self.y);
        trace!(
            "cell at ({:.3}, {:.3}) {:.3}x{:.3} {:?} {:?}",
            x,
            y,
            w,
            h,
            options.align,
            text
        );

        let border = options.border;
        if options.fill || border.is_all() {
            self.rect(x, y, w, h, options.fill, border.is_all());
        }
        if !border.is_all() && !border.is_none() {
            self.border_sides(x, y, w, h, border);
        }

        if !text.is_empty() {
            let text_width = self.string_width(text);
            let dx = text_offset(options.align, w, text_width, self.cell_margin);
            let font_size = self.unit.from_points(f64::from(self.font.size));
            let baseline = text_baseline(y, h, font_size);
            self.text(x + dx, baseline, text, text_width)?;
        }

        self.last_height = h;
        match options.line_break {
            LineBreak::Right => self.x += w,
            LineBreak::NextLine => {
                self.y += h;
                self.x = self.left_margin;
            }
            LineBreak::Below => self.y += h,
        }

        Ok(())
    }

    /// Draws a cell whose text wraps onto as many lines of height `h` as needed.
    ///
    /// Explicit `\n` characters force a line break. With a full border the frame encloses the
    /// whole block; other border sides apply to every line (top only to the first, bottom only to
    /// the last). A width of `0` extends the cell to the right margin.
    pub fn multi_cell(&mut self, w: f64, h: f64, text: &str, options: &CellOptions) -> Result<()> {
        self.ensure_page();

        let w = if w == 0.0 {
            self.page_width() - self.right_margin - self.x
        } else {
            w
        };
        let start_x = self.x;
        let start_y = self.y;
        let start_page = self.page_count;

        let lines = self.wrap_lines(text, w - 2.0 * self.cell_margin);
        for (index, line) in lines.iter().enumerate() {
            let line_options = CellOptions {
                border: line_border(options.border, index, lines.len()),
                line_break: LineBreak::Below,
                ..*options
            };
            self.x = start_x;
            self.cell(w, h, line, &line_options)?;
        }

        match options.line_break {
            LineBreak::NextLine => self.x = self.left_margin,
            LineBreak::Below => self.x = start_x,
            LineBreak::Right => {
                self.x = start_x + w;
                self.y = if self.page_count == start_page {
                    start_y
                } else {
                    self.top_margin
                };
            }
        }

        Ok(())
    }

    /// Splits `text` into lines no wider than `max_width` in the current font.
    pub fn wrap_lines(&self, text: &str, max_width: f64) -> Vec<String> {
        let text = text.replace('\r', "");
        let text = text.strip_suffix('\n').unwrap_or(&text);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let chars: Vec<char> = paragraph.chars().collect();
            if chars.is_empty() {
                lines.push(String::new());
                continue;
            }

            let mut start = 0;
            let mut index = 0;
            let mut last_space: Option<usize> = None;
            let mut width = 0.0;

            while index < chars.len() {
                let c = chars[index];
                if c == ' ' {
                    last_space = Some(index);
                }
                width += self.unit.from_points(self.font.char_width_pt(c));

                if width > max_width {
                    match last_space {
                        Some(space) if space > start => {
                            lines.push(chars[start..space].iter().collect());
                            index = space + 1;
                        }
                        _ => {
                            if index == start {
                                index += 1;
                            }
                            lines.push(chars[start..index].iter().collect());
                        }
                    }
                    start = index;
                    last_space = None;
                    width = 0.0;
                    continue;
                }
                index += 1;
            }

            if start < chars.len() {
                lines.push(chars[start..].iter().collect());
            }
        }

        lines
    }

    /// Serializes the document into memory. A blank page is added if none exists.
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        self.ensure_page();
        let mut writer = BufWriter::new(Vec::new());
        self.document.save(&mut writer)?;
        writer
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))
    }

    /// Writes the document to `path`. A blank page is added if none exists.
    pub fn export(mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.ensure_page();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.document.save(&mut writer)?;
        debug!("Exported {} page(s) to {}", self.page_count, path.display());
        Ok(())
    }

    fn ensure_page(&mut self) {
        self.layer();
    }

    /// Returns the layer of the current page, adding a page first if there is none.
    fn layer(&mut self) -> PdfLayerReference {
        if let Some(page) = &self.page {
            return page.layer.clone();
        }
        warn!("Drawing before the first page was added; adding one.");
        self.push_page(None)
    }

    /// Converts a top-left based user coordinate into a `printpdf` point.
    fn point(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.unit.to_mm(x),
            self.unit.to_mm(self.page_height() - y),
        )
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: bool, stroke: bool) {
        let layer = self.layer();
        let points = vec![
            (self.point(x, y), false),
            (self.point(x + w, y), false),
            (self.point(x + w, y + h), false),
            (self.point(x, y + h), false),
        ];

        if fill {
            layer.set_fill_color(self.fill_color.to_pdf_color());
        }
        if stroke {
            layer.set_outline_color(self.draw_color.to_pdf_color());
            layer.set_outline_thickness(self.unit.to_points(self.line_width));
        }

        layer.add_shape(Line {
            points,
            is_closed: true,
            has_fill: fill,
            has_stroke: stroke,
            is_clipping_path: false,
        });
    }

    fn border_sides(&mut self, x: f64, y: f64, w: f64, h: f64, border: Border) {
        let layer = self.layer();
        layer.set_outline_color(self.draw_color.to_pdf_color());
        layer.set_outline_thickness(self.unit.to_points(self.line_width));

        for (from, to) in border_segments(x, y, w, h, border) {
            layer.add_shape(Line {
                points: vec![
                    (self.point(from.0, from.1), false),
                    (self.point(to.0, to.1), false),
                ],
                is_closed: false,
                has_fill: false,
                has_stroke: true,
                is_clipping_path: false,
            });
        }
    }

    fn text(&mut self, x: f64, baseline: f64, text: &str, text_width: f64) -> Result<()> {
        let font = self.fonts.get_or_add(&self.document, &self.font)?;
        let layer = self.layer();
        let pdf_x = self.unit.to_mm(x);
        let pdf_y = self.unit.to_mm(self.page_height() - baseline);

        layer.set_fill_color(self.text_color.to_pdf_color());
        layer.use_text(text, self.font.size.into(), pdf_x, pdf_y, &font);

        if self.font.style.underline {
            let size = self.unit.from_points(f64::from(self.font.size));
            let top = baseline + 0.1 * size;
            let thickness = 0.05 * size;
            layer.add_shape(Line {
                points: vec![
                    (self.point(x, top), false),
                    (self.point(x + text_width, top), false),
                    (self.point(x + text_width, top + thickness), false),
                    (self.point(x, top + thickness), false),
                ],
                is_closed: true,
                has_fill: true,
                has_stroke: false,
                is_clipping_path: false,
            });
        }
        Ok(())
    }
}

/// Horizontal offset of text of `text_width` inside a cell of width `w`.
pub(crate) fn text_offset(align: Alignment, w: f64, text_width: f64, cell_margin: f64) -> f64 {
    match align {
        Alignment::Left => cell_margin,
        Alignment::Center => (w - text_width) / 2.0,
        Alignment::Right => w - cell_margin - text_width,
    }
}

/// Baseline that vertically centers text of `font_size` in a line of height `h` at `y`.
pub(crate) fn text_baseline(y: f64, h: f64, font_size: f64) -> f64 {
    y + 0.5 * h + 0.3 * font_size
}

/// Sides of `border` drawn on line `index` of a wrapped cell of `count` lines.
///
/// Left and right apply to every line, top only to the first and bottom only to the last.
pub(crate) fn line_border(border: Border, index: usize, count: usize) -> Border {
    Border {
        left: border.left,
        top: border.top && index == 0,
        right: border.right,
        bottom: border.bottom && index + 1 >= count,
    }
}

type Segment = ((f64, f64), (f64, f64));

/// Line segments drawn for the enabled sides of a cell, in L, T, R, B order.
pub(crate) fn border_segments(x: f64, y: f64, w: f64, h: f64, border: Border) -> Vec<Segment> {
    [
        (border.left, ((x, y), (x, y + h))),
        (border.top, ((x, y), (x + w, y))),
        (border.right, ((x + w, y), (x + w, y + h))),
        (border.bottom, ((x, y + h), (x + w, y + h))),
    ]
    .into_iter()
    .filter_map(|(enabled, segment)| enabled.then_some(segment))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> EzPdf {
        let mut pdf = EzPdf::new(DocumentOptions::new().with_margins(Margins::uniform(0.5)));
        pdf.add_page(None);
        pdf
    }

    #[test]
    fn new_page_resets_cursor_to_margins() {
        let mut pdf = document();
        pdf.set_xy(3.0, 4.0);
        pdf.add_page(Some(PageFormat::Letter));
        assert_eq!((pdf.x(), pdf.y()), (0.5, 0.5));
        assert_eq!(pdf.page_count(), 2);
        assert!((pdf.page_height() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn default_margins_are_one_centimetre() {
        let pdf = EzPdf::new(DocumentOptions::new().with_unit(Unit::Mm));
        assert!((pdf.left_margin() - 10.0).abs() < 0.01);
        assert!((pdf.bottom_margin() - 20.0).abs() < 0.01);
        assert!((pdf.cell_margin() - 1.0).abs() < 0.01);
    }

    #[test]
    fn cell_line_breaks_move_the_cursor() {
        let mut pdf = document();
        let options = CellOptions::new();
        pdf.cell(2.0, 0.5, "a", &options).unwrap();
        assert_eq!((pdf.x(), pdf.y()), (2.5, 0.5));

        pdf.cell(1.0, 0.5, "b", &options.with_line_break(LineBreak::Below))
            .unwrap();
        assert_eq!((pdf.x(), pdf.y()), (2.5, 1.0));

        pdf.cell(1.0, 0.25, "c", &options.with_line_break(LineBreak::NextLine))
            .unwrap();
        assert_eq!((pdf.x(), pdf.y()), (0.5, 1.25));
        assert_eq!(pdf.last_height(), 0.25);
    }

    #[test]
    fn zero_width_cell_extends_to_right_margin() {
        let mut pdf = document();
        pdf.set_x(1.0);
        pdf.cell(0.0, 0.5, "", &CellOptions::new()).unwrap();
        assert!((pdf.x() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn cell_past_trigger_starts_new_page_keeping_x() {
        let mut pdf = document();
        pdf.set_xy(2.0, pdf.page_break_trigger() - 0.1);
        pdf.cell(1.0, 0.5, "overflow", &CellOptions::new()).unwrap();
        assert_eq!(pdf.page_count(), 2);
        assert_eq!(pdf.x(), 3.0);
        assert_eq!(pdf.y(), 0.5);
    }

    #[test]
    fn disabled_auto_page_break_keeps_drawing_on_the_same_page() {
        let mut pdf = document();
        pdf.set_auto_page_break(false, 0.0);
        pdf.set_y(pdf.page_height() - 0.1);
        pdf.cell(1.0, 0.5, "off the edge", &CellOptions::new()).unwrap();
        assert_eq!(pdf.page_count(), 1);
    }

    #[test]
    fn wrap_lines_breaks_at_spaces() {
        let mut pdf = document();
        pdf.set_font(FontFamily::Courier, FontStyle::REGULAR, 10);
        // Courier 10pt: 6pt per glyph, so 1.05 inches fit 12 glyphs.
        let lines = pdf.wrap_lines("hello world again", 1.05);
        assert_eq!(lines, vec!["hello world", "again"]);
    }

    #[test]
    fn wrap_lines_splits_long_words_and_honours_newlines() {
        let mut pdf = document();
        pdf.set_font(FontFamily::Courier, FontStyle::REGULAR, 10);
        let lines = pdf.wrap_lines("abcdefghijklmnop\nq\n", 1.05);
        assert_eq!(lines, vec!["abcdefghijkl", "mnop", "q"]);
        assert_eq!(pdf.wrap_lines("", 1.05), vec![String::new()]);
    }

    #[test]
    fn multi_cell_advances_by_every_wrapped_line() {
        let mut pdf = document();
        pdf.set_font(FontFamily::Courier, FontStyle::REGULAR, 10);
        let width = 1.05 + 2.0 * pdf.cell_margin();
        let options = CellOptions::new()
            .with_border(Border::ALL)
            .with_line_break(LineBreak::NextLine);
        pdf.multi_cell(width, 0.25, "hello world again", &options)
            .unwrap();
        assert_eq!(pdf.x(), 0.5);
        assert!((pdf.y() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn multi_cell_to_the_right_returns_to_row_top() {
        let mut pdf = document();
        pdf.multi_cell(2.0, 0.5, "short", &CellOptions::new()).unwrap();
        assert_eq!((pdf.x(), pdf.y()), (2.5, 0.5));
    }

    #[test]
    fn set_font_by_name_rejects_unknown_fonts() {
        let mut pdf = document();
        assert!(pdf.set_font_by_name("Arial", "B", 12).is_ok());
        assert_eq!(pdf.font().family, FontFamily::Helvetica);
        assert!(pdf.font().style.bold);
        assert!(matches!(
            pdf.set_font_by_name("Papyrus", "", 12),
            Err(Error::UnknownFont(_))
        ));
    }

    #[test]
    fn text_offset_follows_alignment() {
        let margin = 0.04;
        assert_eq!(text_offset(Alignment::Left, 2.0, 0.5, margin), margin);
        assert!((text_offset(Alignment::Center, 2.0, 0.5, margin) - 0.75).abs() < 1e-9);
        assert!((text_offset(Alignment::Right, 2.0, 0.5, margin) - 1.46).abs() < 1e-9);
    }

    #[test]
    fn baseline_sits_below_the_line_center() {
        // 10pt in inches
        let size = 10.0 / 72.0;
        let baseline = text_baseline(1.0, 0.5, size);
        assert!((baseline - (1.25 + 0.3 * size)).abs() < 1e-12);
    }

    #[test]
    fn wrapped_full_border_frames_the_whole_block() {
        let first = line_border(Border::ALL, 0, 3);
        let middle = line_border(Border::ALL, 1, 3);
        let last = line_border(Border::ALL, 2, 3);

        assert!(first.left && first.top && first.right && !first.bottom);
        assert!(middle.left && !middle.top && middle.right && !middle.bottom);
        assert!(last.left && !last.top && last.right && last.bottom);
        assert_eq!(line_border(Border::ALL, 0, 1), Border::ALL);
    }

    #[test]
    fn wrapped_partial_border_keeps_only_requested_sides() {
        let border: Border = "TB".parse().unwrap();
        assert_eq!(line_border(border, 0, 2), "T".parse::<Border>().unwrap());
        assert_eq!(line_border(border, 1, 2), "B".parse::<Border>().unwrap());
        assert!(line_border(Border::NONE, 0, 1).is_none());
    }

    #[test]
    fn partial_border_draws_one_segment_per_side() {
        let border: Border = "LB".parse().unwrap();
        let segments = border_segments(1.0, 2.0, 3.0, 0.5, border);
        assert_eq!(
            segments,
            vec![((1.0, 2.0), (1.0, 2.5)), ((1.0, 2.5), (4.0, 2.5))]
        );
        assert_eq!(border_segments(0.0, 0.0, 1.0, 1.0, Border::ALL).len(), 4);
        assert!(border_segments(0.0, 0.0, 1.0, 1.0, Border::NONE).is_empty());
    }

    #[test]
    fn export_without_pages_adds_one() {
        let pdf = EzPdf::new(DocumentOptions::new());
        let bytes = pdf.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
