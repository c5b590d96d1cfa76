// #![deny(clippy::missing_errors_doc)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::missing_assert_message)]

pub mod binning;
pub mod dataset;
pub mod processor;
pub mod processors;
pub mod report;
pub mod schema;
pub mod value;
