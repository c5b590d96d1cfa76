use crate::dataset::{Dataset, DatasetResult};
use crate::processor::{Processor, ProcessorError, ProcessorResult, ProcessorState};
use crate::processors::csv::reader::{detect, Detected};
use crate::processors::csv::writer::CsvWriter;
use crate::processors::{ParseResult, ReportFormat};
use crate::report::print_table;
use crate::schema::{Schema, CSV_DELIMITERS};
use crate::value::{is_numeric, parse_float, render};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const BANNER: &str = "Running CSV-file processor!";

/// Marks empty text cells as missing and drops every row holding a missing value.
///
/// Columns named in `skip` are neither marked nor used to drop rows. Returns the number of
/// dropped rows.
pub fn clean(dataset: &mut Dataset, skip: &[&str]) -> DatasetResult<usize> {
    dataset.mark_empty_as_missing(skip)?;
    dataset.drop_missing(skip)
}

/// Buckets the sort column into the category column according to the schema's bins.
fn categorize(dataset: &mut Dataset, schema: &Schema) -> ProcessorResult<()> {
    let column = dataset.column(&schema.sort_column)?;
    if !is_numeric(column.dtype()) {
        let (row, value) = dataset
            .values(&schema.sort_column)?
            .iter()
            .map(render)
            .enumerate()
            .find(|(_, value)| parse_float(value).is_none())
            .unwrap_or_default();
        return Err(ProcessorError::NonNumericValue { column: schema.sort_column.clone(), row, value });
    }
    Ok(dataset.set_column(&schema.category_column, schema.bins.expr(&schema.sort_column))?)
}

/// Processes files delimited by one of several candidate delimiters.
///
/// The result is the cleaned dataset with an additional category column, sorted by the
/// schema's sort column.
pub struct CsvProcessor<W>
where
    W: Write,
{
    source: PathBuf,
    delimiters: Vec<u8>,
    delimiter: Option<u8>,
    schema: Schema,
    report: ReportFormat,
    output: W,
    state: ProcessorState,
}

impl<W> CsvProcessor<W>
where
    W: Write,
{
    pub fn new(source: impl AsRef<Path>, output: W) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            delimiters: CSV_DELIMITERS.to_vec(),
            delimiter: None,
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

    /// Replaces the delimiters tried by [`read`](Processor::read), in order of priority.
    pub fn with_delimiters(mut self, delimiters: &[u8]) -> Self {
        self.delimiters = delimiters.to_vec();
        self
    }

    pub fn with_report_format(mut self, report: ReportFormat) -> Self {
        self.report = report;
        self
    }

    /// Returns the delimiter accepted by the last successful read.
    pub fn delimiter(&self) -> Option<u8> {
        self.delimiter
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn try_read(&self) -> ParseResult<Detected> {
        let input = fs::read(&self.source)?;
        detect(&input, &self.delimiters)
    }
}

impl<W> Processor for CsvProcessor<W>
where
    W: Write,
{
    fn read(&mut self) -> bool {
        let Detected { delimiter, dataset } = match self.try_read() {
            Ok(detected) => detected,
            Err(err) => {
                error!(source = %self.source.display(), error = %err, "unable to read data source");
                return false;
            }
        };

        let columns = dataset.column_names().join(", ");
        let separator = char::from(delimiter);
        info!(
            source = %self.source.display(),
            delimiter = %separator,
            columns = dataset.width(),
            rows = dataset.height(),
            "dataset loaded",
        );
        if let Err(err) = writeln!(self.output, "Columns read: [{}] using separator '{}'", columns, separator) {
            warn!(error = %err, "unable to report columns read");
        }

        self.delimiter = Some(delimiter);
        self.state.load(dataset);
        true
    }

    fn run(&mut self) -> ProcessorResult<()> {
        let dataset = self.state.dataset_mut()?;

        let dropped = clean(dataset, &[self.schema.category_column.as_str()])?;
        info!(rows.dropped = dropped, rows.remaining = dataset.height(), "dropped rows with missing values");

        categorize(dataset, &self.schema)?;

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
