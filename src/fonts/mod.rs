//! Font selection utilities for the `ez_pdf` crate.
//!
//! Documents use the fourteen standard PDF fonts, so nothing has to be embedded or located on
//! disk.  Font names and style letters are parsed the same way classic cell-based PDF writers
//! accept them (`"times"`, `"Arial"`, `"BI"`, ...).

mod metrics;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};

use crate::error::{Error, Result};
use metrics::WidthTable;

/// Name of the font family used when none is configured.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "times";

/// Font size in points used when none is configured.
pub const DEFAULT_FONT_SIZE: u8 = 8;

/// One of the standard PDF font families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Fixed-width.
    Courier,
    /// Sans serif. `arial` is accepted as an alias.
    Helvetica,
    /// Serif.
    #[default]
    Times,
    /// Symbolic.
    Symbol,
    /// Symbolic.
    ZapfDingbats,
}

impl FromStr for FontFamily {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "courier" => Ok(FontFamily::Courier),
            "helvetica" | "arial" => Ok(FontFamily::Helvetica),
            "times" => Ok(FontFamily::Times),
            "symbol" => Ok(FontFamily::Symbol),
            "zapfdingbats" => Ok(FontFamily::ZapfDingbats),
            _ => Err(Error::UnknownFont(s.to_owned())),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontFamily::Courier => "courier",
            FontFamily::Helvetica => "helvetica",
            FontFamily::Times => "times",
            FontFamily::Symbol => "symbol",
            FontFamily::ZapfDingbats => "zapfdingbats",
        };
        f.write_str(name)
    }
}

/// Style flags applied on top of a font family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontStyle {
    /// Plain style without decorations.
    pub const REGULAR: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: false,
    };

    /// Sets the bold flag and returns the updated style.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the italic flag and returns the updated style.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the underline flag and returns the updated style.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

impl FromStr for FontStyle {
    type Err = Error;

    /// Parses any combination of `B`, `I` and `U`; the empty string is the regular style.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut style = FontStyle::REGULAR;
        for c in s.trim().chars() {
            match c.to_ascii_uppercase() {
                'B' => style.bold = true,
                'I' => style.italic = true,
                'U' => style.underline = true,
                _ => return Err(Error::UnknownFontStyle(s.to_owned())),
            }
        }
        Ok(style)
    }
}

/// A fully specified font: family, style and size in points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: u8,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            style: FontStyle::REGULAR,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontSpec {
    /// Creates a regular font of the given family and size.
    pub fn new(family: FontFamily, size: u8) -> Self {
        Self {
            family,
            style: FontStyle::REGULAR,
            size,
        }
    }

    /// Sets the style and returns the updated spec.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the `printpdf` builtin font matching the family and bold/italic flags.
    pub fn builtin(&self) -> BuiltinFont {
        let FontStyle { bold, italic, .. } = self.style;
        match (self.family, bold, italic) {
            (FontFamily::Courier, false, false) => BuiltinFont::Courier,
            (FontFamily::Courier, true, false) => BuiltinFont::CourierBold,
            (FontFamily::Courier, false, true) => BuiltinFont::CourierOblique,
            (FontFamily::Courier, true, true) => BuiltinFont::CourierBoldOblique,
            (FontFamily::Helvetica, false, false) => BuiltinFont::Helvetica,
            (FontFamily::Helvetica, true, false) => BuiltinFont::HelveticaBold,
            (FontFamily::Helvetica, false, true) => BuiltinFont::HelveticaOblique,
            (FontFamily::Helvetica, true, true) => BuiltinFont::HelveticaBoldOblique,
            (FontFamily::Times, false, false) => BuiltinFont::TimesRoman,
            (FontFamily::Times, true, false) => BuiltinFont::TimesBold,
            (FontFamily::Times, false, true) => BuiltinFont::TimesItalic,
            (FontFamily::Times, true, true) => BuiltinFont::TimesBoldItalic,
            (FontFamily::Symbol, _, _) => BuiltinFont::Symbol,
            (FontFamily::ZapfDingbats, _, _) => BuiltinFont::ZapfDingbats,
        }
    }

    fn width_table(&self) -> &'static WidthTable {
        let FontStyle { bold, italic, .. } = self.style;
        match self.family {
            FontFamily::Courier => &metrics::COURIER,
            // Oblique Helvetica shares the upright advance widths.
            FontFamily::Helvetica if bold => &metrics::HELVETICA_BOLD,
            FontFamily::Helvetica => &metrics::HELVETICA,
            FontFamily::Times if bold && italic => &metrics::TIMES_BOLD_ITALIC,
            FontFamily::Times if bold => &metrics::TIMES_BOLD,
            FontFamily::Times if italic => &metrics::TIMES_ITALIC,
            FontFamily::Times => &metrics::TIMES_ROMAN,
            FontFamily::Symbol => &metrics::SYMBOL,
            FontFamily::ZapfDingbats => &metrics::ZAPF_DINGBATS,
        }
    }

    /// Returns the width of a single character in points.
    pub fn char_width_pt(&self, c: char) -> f64 {
        f64::from(self.width_table().width(c).0) * f64::from(self.size) / 1000.0
    }

    /// Returns the width of `text` in points when set in this font.
    pub fn string_width_pt(&self, text: &str) -> f64 {
        let table = self.width_table();
        let mut missing = 0usize;
        let units: u64 = text
            .chars()
            .map(|c| {
                let (width, known) = table.width(c);
                if !known {
                    missing += 1;
                }
                u64::from(width)
            })
            .sum();

        if missing > 0 {
            warn!(
                "{} character(s) in {:?} have no {} metrics; using the average width.",
                missing, text, self.family
            );
        }

        units as f64 * f64::from(self.size) / 1000.0
    }
}

/// Builtin fonts registered with a document, added on first use.
#[derive(Default)]
pub(crate) struct FontCache {
    fonts: HashMap<(FontFamily, bool, bool), IndirectFontRef>,
}

impl FontCache {
    /// Returns the font reference for `spec`, registering the builtin font if needed.
    pub(crate) fn get_or_add(
        &mut self,
        document: &PdfDocumentReference,
        spec: &FontSpec,
    ) -> Result<IndirectFontRef> {
        let key = (spec.family, spec.style.bold, spec.style.italic);
        if let Some(font) = self.fonts.get(&key) {
            return Ok(font.clone());
        }

        let font = document.add_builtin_font(spec.builtin())?;
        self.fonts.insert(key, font.clone());
        Ok(font)
    }
}
