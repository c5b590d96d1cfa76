mod processor;
pub mod reader;

pub use processor::TxtProcessor;
