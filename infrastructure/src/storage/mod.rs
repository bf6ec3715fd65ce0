//! Filesystem adapters: the input document and the final report file.

mod document;
mod report_file;

pub use document::{DocumentError, read_document};
pub use report_file::FileReportSink;
