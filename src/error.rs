//! Error types for the ez_pdf crate.

use std::io;
use thiserror::Error;

/// Result type alias for ez_pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ez_pdf crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The width fractions of a row do not add up to 1.
    #[error("Cell widths must add up to 1. Currently widths {} add up to {sum}", format_widths(.widths))]
    InvalidCellWidths { widths: Vec<f64>, sum: f64 },

    /// The row could not be laid out, e.g. because it has no cells.
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// The font family is not one of the standard PDF fonts.
    #[error("Unknown font family: {0}")]
    UnknownFont(String),

    /// The font style string contains letters other than B, I and U.
    #[error("Unknown font style: {0}")]
    UnknownFontStyle(String),

    /// The page format name is not recognized.
    #[error("Unknown page format: {0}")]
    UnknownPageFormat(String),

    /// The measurement unit name is not recognized.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// The alignment is not one of L, C or R.
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    /// The border spec is not 0, 1 or a combination of L, R, T and B.
    #[error("Invalid border: {0}")]
    InvalidBorder(String),

    /// The color is not three comma separated channels in `0..=255`.
    #[error("Invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },

    /// The orientation is not portrait or landscape.
    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),

    /// Error reported by the PDF backend.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// I/O error while writing the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<printpdf::Error> for Error {
    fn from(err: printpdf::Error) -> Self {
        Error::Pdf(err.to_string())
    }
}

fn format_widths(widths: &[f64]) -> String {
    match widths {
        [] => String::from("(none)"),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} and {}", head, last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn invalid_widths_message_lists_every_width() {
        let err = Error::InvalidCellWidths {
            widths: vec![0.5, 0.25, 0.5],
            sum: 1.25,
        };
        assert_eq!(
            err.to_string(),
            "Cell widths must add up to 1. Currently widths 0.5, 0.25 and 0.5 add up to 1.25"
        );
    }

    #[test]
    fn invalid_color_message_names_the_input() {
        let err = Error::InvalidColor {
            input: "1,2".to_owned(),
            reason: "expected three channels".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid color \"1,2\": expected three channels"
        );
    }

    #[test]
    fn invalid_widths_message_handles_single_width() {
        let err = Error::InvalidCellWidths {
            widths: vec![0.9],
            sum: 0.9,
        };
        assert!(err.to_string().ends_with("widths 0.9 add up to 0.9"));
    }
}
