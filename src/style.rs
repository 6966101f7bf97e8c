//! Cell styling primitives: alignment, borders, line breaks and colors.

use std::str::FromStr;

use crate::error::Error;

/// Horizontal alignment of text inside a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for Alignment {
    type Err = Error;

    /// Accepts `L`, `C` and `R` (case-insensitive) as well as the spelled-out names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Alignment::Left),
            "c" | "center" | "centre" => Ok(Alignment::Center),
            "r" | "right" => Ok(Alignment::Right),
            _ => Err(Error::InvalidAlignment(s.to_owned())),
        }
    }
}

/// Sides of a cell that get a border stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Border {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Border {
    /// No border at all.
    pub const NONE: Border = Border {
        left: false,
        top: false,
        right: false,
        bottom: false,
    };

    /// A frame around the whole cell.
    pub const ALL: Border = Border {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };

    pub fn is_none(&self) -> bool {
        *self == Border::NONE
    }

    pub fn is_all(&self) -> bool {
        *self == Border::ALL
    }
}

impl From<bool> for Border {
    fn from(framed: bool) -> Self {
        if framed {
            Border::ALL
        } else {
            Border::NONE
        }
    }
}

impl FromStr for Border {
    type Err = Error;

    /// Parses `0`, `1` or any combination of the side letters `L`, `R`, `T` and `B`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "0" | "" => return Ok(Border::NONE),
            "1" => return Ok(Border::ALL),
            _ => {}
        }

        let mut border = Border::NONE;
        for c in trimmed.chars() {
            match c.to_ascii_uppercase() {
                'L' => border.left = true,
                'T' => border.top = true,
                'R' => border.right = true,
                'B' => border.bottom = true,
                _ => return Err(Error::InvalidBorder(s.to_owned())),
            }
        }
        Ok(border)
    }
}

/// Where the cursor goes after a cell has been drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineBreak {
    /// Stay on the line, to the right of the cell.
    #[default]
    Right,
    /// Move to the left margin of the next line.
    NextLine,
    /// Move below the cell, keeping the x position.
    Below,
}

impl From<bool> for LineBreak {
    fn from(new_line: bool) -> Self {
        if new_line {
            LineBreak::NextLine
        } else {
            LineBreak::Right
        }
    }
}

/// An RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn to_pdf_color(self) -> printpdf::Color {
        printpdf::Color::Rgb(printpdf::Rgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            None,
        ))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parses `r,g,b` with each channel in `0..=255`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::InvalidColor {
                input: s.to_owned(),
                reason: err.to_string(),
            })?;

        match channels.as_slice() {
            [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
            _ => Err(Error::InvalidColor {
                input: s.to_owned(),
                reason: "expected three channels".to_owned(),
            }),
        }
    }
}
