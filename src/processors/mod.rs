use crate::processor::{Processor, ProcessorError, ProcessorResult};
use crate::processors::csv::CsvProcessor;
use crate::processors::txt::TxtProcessor;
use crate::dataset::DatasetError;
use std::io;
use std::path::Path;
use thiserror::Error;

pub mod csv;
pub mod txt;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unable to read data source: {0}")]
    Io(#[from] io::Error),

    #[error("error processing csv: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("data source is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("invalid format: {0}")]
    InvalidFormat(#[from] DatasetError),

    #[error("expected at least two columns, found {0}")]
    TooFewColumns(usize),

    #[error("no delimiter out of {0:?} splits the header into more than one column")]
    NoDelimiter(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The input formats a processor can be picked for.
#[derive(clap::ValueEnum, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Format {
    /// Pick the format based on the file extension.
    #[default]
    Auto,

    /// Delimited by `;`, `,` or `|`.
    Csv,

    /// Delimited by runs of whitespace.
    Txt,
}

/// How [`Processor::print_result`] renders the result.
#[derive(clap::ValueEnum, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ReportFormat {
    /// A banner followed by a human-readable table.
    #[default]
    Table,

    /// Comma-separated values with a header line.
    Csv,
}

impl Format {
    /// Resolves [`Format::Auto`] from the extension of `path`.
    pub fn resolve(self, path: &Path) -> ProcessorResult<Format> {
        if self != Format::Auto {
            return Ok(self);
        }
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Format::Csv),
            "txt" | "tsv" | "dat" => Ok(Format::Txt),
            _ => Err(ProcessorError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn detect_processor<W>(
    path: &Path,
    format: Format,
    report: ReportFormat,
    output: W,
) -> ProcessorResult<Box<dyn Processor>>
where
    W: io::Write + 'static,
{
    let processor: Box<dyn Processor> = match format.resolve(path)? {
        Format::Txt => Box::new(TxtProcessor::new(path, output).with_report_format(report)),
        Format::Csv | Format::Auto => {
            Box::new(CsvProcessor::new(path, output).with_report_format(report))
        }
    };
    Ok(processor)
}
