use crate::processor::{Processor, ProcessorResult, ProcessorState};
use crate::processors::csv::writer::CsvWriter;
use crate::processors::txt::reader::read_whitespace;
use crate::processors::{ParseResult, ReportFormat};
use crate::report::print_table;
use crate::schema::Schema;
use crate::dataset::Dataset;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

const BANNER: &str = "Running TXT-file processor!";

/// Processes whitespace delimited files.
///
/// Sources are expected to be clean already: the result is the dataset sorted by the schema's
/// sort column, without dropping rows or adding categories.
pub struct TxtProcessor<W>
where
    W: Write,
{
    source: PathBuf,
    schema: Schema,
    report: ReportFormat,
    output: W,
    state: ProcessorState,
}

impl<W> TxtProcessor<W>
where
    W: Write,
{
    pub fn new(source: impl AsRef<Path>, output: W) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            schema: Schema::default(),
            report: ReportFormat::default(),
            output,
            state: ProcessorState::default(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_report_format(mut self, report: ReportFormat) -> Self {
        self.report = report;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn try_read(&self) -> ParseResult<Dataset> {
        let input = fs::read(&self.source)?;
        read_whitespace(&input)
    }
}

impl<W> Processor for TxtProcessor<W>
where
    W: Write,
{
    fn read(&mut self) -> bool {
        match self.try_read() {
            Ok(dataset) => {
                info!(
                    source = %self.source.display(),
                    columns = dataset.width(),
                    rows = dataset.height(),
                    "dataset loaded",
                );
                self.state.load(dataset);
                true
            }
            Err(err) => {
                error!(source = %self.source.display(), error = %err, "unable to read data source");
                false
            }
        }
    }

    fn run(&mut self) -> ProcessorResult<()> {
        let result = self.sort_by_column(self.state.dataset()?, &self.schema.sort_column, true)?;
        info!(rows = result.height(), column = %self.schema.sort_column, "sorted dataset");
        self.state.set_result(result);
        Ok(())
    }

    fn print_result(&mut self) -> ProcessorResult<()> {
        let result = self.state.result()?;
        match self.report {
            ReportFormat::Table => print_table(&mut self.output, BANNER, result)?,
            ReportFormat::Csv => CsvWriter::new(&mut self.output).write_dataset(result)?,
        }
        Ok(())
    }

    fn state(&self) -> &ProcessorState {
        &self.state
    }
}
