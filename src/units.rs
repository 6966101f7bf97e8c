//! Measurement units for document coordinates.
//!
//! All geometry handed to [`crate::document::EzPdf`] is expressed in the unit chosen when the
//! document was created.  Internally the values are converted to PDF points and from there to the
//! millimetres expected by `printpdf`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const POINTS_PER_INCH: f64 = 72.0;
const MM_PER_INCH: f64 = 25.4;

/// User unit used for every coordinate and size passed to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    /// PDF points (1/72 inch).
    Pt,
    /// Millimetres.
    Mm,
    /// Centimetres.
    Cm,
    /// Inches.
    #[default]
    In,
}

impl Unit {
    /// Number of PDF points in one user unit.
    pub fn scale(self) -> f64 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => POINTS_PER_INCH / MM_PER_INCH,
            Unit::Cm => POINTS_PER_INCH / (MM_PER_INCH / 10.0),
            Unit::In => POINTS_PER_INCH,
        }
    }

    /// Converts a length in points into this unit.
    pub fn from_points(self, points: f64) -> f64 {
        points / self.scale()
    }

    /// Converts a length in this unit into points.
    pub fn to_points(self, value: f64) -> f64 {
        value * self.scale()
    }

    /// Converts a length in this unit into a `printpdf` millimetre value.
    pub fn to_mm(self, value: f64) -> printpdf::Mm {
        printpdf::Mm(self.to_points(value) * MM_PER_INCH / POINTS_PER_INCH)
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Unit::Pt),
            "mm" => Ok(Unit::Mm),
            "cm" => Ok(Unit::Cm),
            "in" | "inch" | "inches" => Ok(Unit::In),
            _ => Err(Error::UnknownUnit(s.to_owned())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Pt => "pt",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Unit;

    #[test]
    fn inch_is_seventy_two_points() {
        assert_eq!(Unit::In.to_points(1.0), 72.0);
        assert!((Unit::In.to_mm(1.0).0 - 25.4).abs() < 1e-9);
    }

    #[test]
    fn centimetre_and_millimetre_agree() {
        let cm = Unit::Cm.to_points(1.0);
        let mm = Unit::Mm.to_points(10.0);
        assert!((cm - mm).abs() < 1e-9);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("MM".parse::<Unit>().unwrap(), Unit::Mm);
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::In);
        assert!("furlong".parse::<Unit>().is_err());
    }
}
