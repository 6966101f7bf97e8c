//! Page formats and orientation.

use std::str::FromStr;

use crate::error::Error;
use crate::units::Unit;

/// Paper size of a page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PageFormat {
    A3,
    A4,
    A5,
    Letter,
    #[default]
    Legal,
    /// Custom size as `(width, height)` in the document's user unit.
    Custom(f64, f64),
}

impl PageFormat {
    /// Returns the portrait `(width, height)` of the format in user units.
    pub fn size(self, unit: Unit) -> (f64, f64) {
        let points = match self {
            PageFormat::A3 => (841.89, 1190.55),
            PageFormat::A4 => (595.28, 841.89),
            PageFormat::A5 => (420.94, 595.28),
            PageFormat::Letter => (612.0, 792.0),
            PageFormat::Legal => (612.0, 1008.0),
            PageFormat::Custom(width, height) => return (width, height),
        };
        (unit.from_points(points.0), unit.from_points(points.1))
    }
}

impl FromStr for PageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a3" => Ok(PageFormat::A3),
            "a4" => Ok(PageFormat::A4),
            "a5" => Ok(PageFormat::A5),
            "letter" => Ok(PageFormat::Letter),
            "legal" => Ok(PageFormat::Legal),
            _ => Err(Error::UnknownPageFormat(s.to_owned())),
        }
    }
}

/// Page orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Applies the orientation to a portrait `(width, height)` pair.
    pub fn apply(self, (width, height): (f64, f64)) -> (f64, f64) {
        match self {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "portrait" => Ok(Orientation::Portrait),
            "l" | "landscape" => Ok(Orientation::Landscape),
            _ => Err(Error::UnknownOrientation(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Orientation, PageFormat};
    use crate::error::Error;
    use crate::units::Unit;

    #[test]
    fn legal_is_eight_and_a_half_by_fourteen_inches() {
        let (width, height) = PageFormat::Legal.size(Unit::In);
        assert!((width - 8.5).abs() < 1e-9);
        assert!((height - 14.0).abs() < 1e-9);
    }

    #[test]
    fn custom_sizes_are_taken_verbatim() {
        assert_eq!(PageFormat::Custom(100.0, 50.0).size(Unit::Mm), (100.0, 50.0));
    }

    #[test]
    fn landscape_swaps_dimensions() {
        let size = Orientation::Landscape.apply(PageFormat::Letter.size(Unit::Pt));
        assert_eq!(size, (792.0, 612.0));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("A4".parse::<PageFormat>().unwrap(), PageFormat::A4);
        assert!("tabloid".parse::<PageFormat>().is_err());
    }

    #[test]
    fn orientation_rejects_unknown_names_as_orientation_errors() {
        assert_eq!("L".parse::<Orientation>().unwrap(), Orientation::Landscape);
        assert!(matches!(
            "sideways".parse::<Orientation>(),
            Err(Error::UnknownOrientation(name)) if name == "sideways"
        ));
    }
}
