use crate::value::{infer_column, is_missing_token, is_numeric};
use polars::prelude::{
    col, lit, when, AnyValue, Column, DataFrame, DataType, Expr, IntoLazy, PolarsError,
    PolarsResult, SortMultipleOptions, NULL,
};
use std::collections::HashSet;
use thiserror::Error;

/// Name of the hidden column holding each row's position in the source.
pub const ROW_LABEL: &str = "__row_label__";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unknown column: {0}")]
    MissingColumn(String),

    /// A row holds more cells than the header names.
    #[error("row {row} has {found} fields, expected at most {expected}")]
    RowTooLong { row: usize, expected: usize, found: usize },

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// An in-memory table of named columns with equal-length value sequences.
///
/// Each row carries the label of its position in the source, which survives dropping and
/// sorting rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
}

impl Dataset {
    /// Builds a dataset from a header line and raw row-major records.
    ///
    /// Duplicate header names are made unique by appending `.1`, `.2`, ... to later occurrences.
    /// Rows shorter than the header are padded with missing values and missing tokens become
    /// missing values. Column types are inferred from the cells.
    pub fn from_records<H, R>(headers: &[H], records: R) -> DatasetResult<Self>
    where
        H: AsRef<str>,
        R: IntoIterator<Item=Vec<String>>,
    {
        let names = dedup_names(headers);
        let width = names.len();
        let mut cells = vec![Vec::new(); width];

        for (row, record) in records.into_iter().enumerate() {
            if record.len() > width {
                return Err(DatasetError::RowTooLong { row, expected: width, found: record.len() });
            }
            let padding = width - record.len();
            let record = record.into_iter().map(Some).chain(std::iter::repeat(None).take(padding));
            for (column, raw) in cells.iter_mut().zip(record) {
                column.push(raw.filter(|raw: &String| !is_missing_token(raw)));
            }
        }

        let columns = names
            .iter()
            .zip(cells)
            .map(|(name, cells)| infer_column(name, cells))
            .collect::<Vec<_>>();
        Self::from_columns(columns)
    }

    /// Wraps the columns of a data frame, labelling its rows `0..n`.
    pub fn from_frame(frame: DataFrame) -> DatasetResult<Self> {
        Self::from_columns(frame.get_columns().to_vec())
    }

    fn from_columns(columns: Vec<Column>) -> DatasetResult<Self> {
        let height = columns.first().map_or(0, Column::len);
        let labels = (0..height as u32).collect::<Vec<u32>>();
        let mut all = Vec::with_capacity(columns.len() + 1);
        all.push(Column::new(ROW_LABEL.into(), labels));
        all.extend(columns);
        Ok(Self { frame: DataFrame::new(all)? })
    }

    /// Returns the data columns, without the row labels.
    pub fn columns(&self) -> &[Column] {
        &self.frame.get_columns()[1..]
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns().iter().map(|column| column.name().as_str()).collect()
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns().len()
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column(&self, name: &str) -> DatasetResult<&Column> {
        self.columns()
            .iter()
            .find(|column| column.name().as_str() == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }

    /// Returns all values of one column.
    pub fn values(&self, name: &str) -> DatasetResult<Vec<AnyValue<'_>>> {
        let column = self.column(name)?;
        let values = (0..column.len())
            .map(|row| column.get(row))
            .collect::<PolarsResult<Vec<_>>>()?;
        Ok(values)
    }

    /// Returns the source labels of all rows.
    pub fn labels(&self) -> DatasetResult<Vec<u32>> {
        let labels = self.frame.get_columns()[0].u32()?;
        Ok(labels.into_iter().flatten().collect())
    }

    /// Returns the source label and the cells of one row, in column order.
    pub fn row(&self, index: usize) -> DatasetResult<(AnyValue<'_>, Vec<AnyValue<'_>>)> {
        let label = self.frame.get_columns()[0].get(index)?;
        let cells = self.columns()
            .iter()
            .map(|column| column.get(index))
            .collect::<PolarsResult<Vec<_>>>()?;
        Ok((label, cells))
    }

    fn columns_except<'d>(&'d self, skip: &'d [&'d str]) -> impl Iterator<Item=&'d Column> + 'd {
        self.columns().iter().filter(move |column| !skip.contains(&column.name().as_str()))
    }

    /// Replaces empty strings in text columns with missing values.
    ///
    /// Columns named in `skip` are left untouched.
    pub fn mark_empty_as_missing(&mut self, skip: &[&str]) -> DatasetResult<()> {
        let replacements = self
            .columns_except(skip)
            .filter(|column| column.dtype() == &DataType::String)
            .map(|column| {
                let name = column.name().as_str();
                when(col(name).eq(lit("")))
                    .then(lit(NULL))
                    .otherwise(col(name))
                    .alias(name)
            })
            .collect::<Vec<_>>();
        if !replacements.is_empty() {
            self.frame = self.frame.clone().lazy().with_columns(replacements).collect()?;
        }
        Ok(())
    }

    /// Drops every row holding a missing value in any column not named in `skip`.
    ///
    /// Returns the number of dropped rows.
    pub fn drop_missing(&mut self, skip: &[&str]) -> DatasetResult<usize> {
        let present = self
            .columns_except(skip)
            .map(|column| col(column.name().as_str()).is_not_null())
            .reduce(|all, present| all.and(present));
        let Some(present) = present else {
            return Ok(0);
        };
        let before = self.height();
        self.frame = self.frame.clone().lazy().filter(present).collect()?;
        Ok(before - self.height())
    }

    /// Adds a column computed by `expr`, or replaces an existing column with the same name.
    pub fn set_column(&mut self, name: &str, expr: Expr) -> DatasetResult<()> {
        self.frame = self.frame.clone().lazy().with_column(expr.alias(name)).collect()?;
        Ok(())
    }

    /// Returns a copy of the dataset stably sorted by one column.
    ///
    /// Rows with equal values keep their original relative order. Missing values sort last.
    pub fn sorted_by(&self, name: &str, ascending: bool) -> DatasetResult<Self> {
        self.column(name)?;
        let options = SortMultipleOptions::default()
            .with_order_descending(!ascending)
            .with_nulls_last(true)
            .with_maintain_order(true);
        Ok(Self { frame: self.frame.sort([name], options)? })
    }

    /// Returns a single-row dataset holding the mean of every column over the rows matching
    /// `predicate`.
    ///
    /// Missing values are skipped. Non-numeric columns, and columns without values among the
    /// matching rows, have a missing mean.
    pub fn means_where(&self, predicate: Expr) -> DatasetResult<Self> {
        let means = self
            .columns()
            .iter()
            .map(|column| {
                let name = column.name().as_str();
                if is_numeric(column.dtype()) {
                    col(name).cast(DataType::Float64).mean().alias(name)
                } else {
                    lit(NULL).cast(DataType::Float64).alias(name)
                }
            })
            .collect::<Vec<_>>();
        let frame = self.frame.clone().lazy().filter(predicate).select(means).collect()?;
        Self::from_frame(frame)
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.frame.equals_missing(&other.frame)
    }
}

fn dedup_names<H: AsRef<str>>(headers: &[H]) -> Vec<String> {
    let mut seen = HashSet::from([ROW_LABEL.to_string()]);
    headers
        .iter()
        .map(|header| {
            let header = header.as_ref();
            let mut name = header.to_string();
            let mut suffix = 0;
            while !seen.insert(name.clone()) {
                suffix += 1;
                name = format!("{}.{}", header, suffix);
            }
            name
        })
        .collect()
}
