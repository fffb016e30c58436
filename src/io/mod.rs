//! PDF file I/O: loading and saving documents.

mod reader;
mod writer;

pub use reader::PdfReader;
pub use writer::PdfWriter;
