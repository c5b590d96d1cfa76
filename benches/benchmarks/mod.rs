pub mod parsing;
pub mod processing;
