//! Supporting services for the HTTP layer.

pub mod pdf_extract;

pub use pdf_extract::PdfTextExtractor;
