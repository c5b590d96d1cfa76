use crate::dataset::{Dataset, DatasetError};
use crate::processors::ParseError;
use polars::prelude::{Expr, PolarsError};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("no dataset loaded: read must succeed before run")]
    NotLoaded,

    #[error("no result available: run must complete before the result can be printed")]
    NoResult,

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("non-numeric value {value:?} in column {column} at row {row}")]
    NonNumericValue { column: String, row: usize, value: String },

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid dataset: {0}")]
    Dataset(#[source] DatasetError),

    #[error("error parsing input: {0}")]
    Parse(#[from] ParseError),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl From<DatasetError> for ProcessorError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::MissingColumn(column) => ProcessorError::MissingColumn(column),
            DatasetError::Polars(PolarsError::ColumnNotFound(column)) => {
                ProcessorError::MissingColumn(column.to_string())
            }
            err => ProcessorError::Dataset(err),
        }
    }
}

pub type ProcessorResult<T> = Result<T, ProcessorError>;

/// The lifecycle of a [`Processor`].
///
/// ```text
/// Uninitialized --read--> Loaded --run--> Resulted --print_result--> Resulted
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stage {
    Uninitialized,
    Loaded,
    Resulted,
}

/// The tables a processor works on: the dataset loaded by `read` and the result of `run`.
#[derive(Debug, Default)]
pub struct ProcessorState {
    dataset: Option<Dataset>,
    result: Option<Dataset>,
}

impl ProcessorState {
    pub fn stage(&self) -> Stage {
        match (&self.dataset, &self.result) {
            (None, _) => Stage::Uninitialized,
            (Some(_), None) => Stage::Loaded,
            (Some(_), Some(_)) => Stage::Resulted,
        }
    }

    /// Replaces the dataset and discards any previous result.
    pub fn load(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.result = None;
    }

    pub fn dataset(&self) -> ProcessorResult<&Dataset> {
        self.dataset.as_ref().ok_or(ProcessorError::NotLoaded)
    }

    pub fn dataset_mut(&mut self) -> ProcessorResult<&mut Dataset> {
        self.dataset.as_mut().ok_or(ProcessorError::NotLoaded)
    }

    pub fn set_result(&mut self, result: Dataset) {
        self.result = Some(result);
    }

    pub fn result(&self) -> ProcessorResult<&Dataset> {
        self.result.as_ref().ok_or(ProcessorError::NoResult)
    }
}

/// A format specific loader that reads a data source, transforms it and reports the result.
pub trait Processor {
    /// Loads the dataset from the data source.
    ///
    /// Returns `true` only if the source was parsed into at least two columns. Parse failures are
    /// logged and reported as `false`, leaving the processor state untouched.
    fn read(&mut self) -> bool;

    /// Transforms the loaded dataset into the result.
    fn run(&mut self) -> ProcessorResult<()>;

    /// Writes the result to the processor's output.
    fn print_result(&mut self) -> ProcessorResult<()>;

    fn state(&self) -> &ProcessorState;

    fn stage(&self) -> Stage {
        self.state().stage()
    }

    fn dataset(&self) -> Option<&Dataset> {
        self.state().dataset().ok()
    }

    fn result(&self) -> Option<&Dataset> {
        self.state().result().ok()
    }

    /// Returns a copy of `dataset` stably sorted by `column`.
    fn sort_by_column(&self, dataset: &Dataset, column: &str, ascending: bool) -> ProcessorResult<Dataset> {
        Ok(dataset.sorted_by(column, ascending)?)
    }

    /// Returns a single-row dataset holding the mean of every column over the rows matching
    /// the boolean expression `filter`.
    ///
    /// Only numeric cells contribute to a mean. Columns without numeric cells among the
    /// matching rows have a missing mean.
    fn compute_group_means(&self, dataset: &Dataset, filter: Expr) -> ProcessorResult<Dataset> {
        Ok(dataset.means_where(filter)?)
    }
}
