//! Row and cell layout helpers for building PDF documents with `printpdf`.
//!
//! [`EzPdf`] wraps a `printpdf` document with a drawing cursor and the classic cell primitives;
//! the row helpers in [`rows`] lay out one to five cells across the usable page width, each as a
//! fraction of it.

pub mod document;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod page;
pub mod rows;
pub mod samples;
pub mod style;
pub mod units;

pub use document::{CellOptions, DocumentOptions, EzPdf, Margins};
pub use error::{Error, Result};
pub use layout::RowLayout;
pub use rows::{CellSpec, RowOptions};
