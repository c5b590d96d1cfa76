mod processor;
pub mod reader;
pub mod writer;

pub use processor::{clean, CsvProcessor};
