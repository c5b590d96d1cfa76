//! Cell level parsing and rendering between raw text and polars values.
use polars::prelude::{AnyValue, Column, DataType};
use serde::{Serialize, Serializer};

/// Raw cell contents that are read as a missing value: the default NA tokens of pandas.
pub const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing_token(raw: &str) -> bool {
    MISSING_TOKENS.contains(&raw)
}

/// Parses an integer literal, ignoring surrounding whitespace. Digit separators are rejected.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parses a plain or scientific decimal literal, ignoring surrounding whitespace.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Builds a column from raw cells, `None` marking missing cells.
///
/// The column is `Int64` if every present cell is an integer, `Float64` if every present cell is
/// a number and `String` (holding the raw text) otherwise.
pub fn infer_column(name: &str, cells: Vec<Option<String>>) -> Column {
    let integers = cells
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(raw) => parse_integer(raw).map(Some),
        })
        .collect::<Option<Vec<Option<i64>>>>();
    if let Some(values) = integers {
        return Column::new(name.into(), values);
    }

    let floats = cells
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(raw) => parse_float(raw).map(Some),
        })
        .collect::<Option<Vec<Option<f64>>>>();
    match floats {
        Some(values) => Column::new(name.into(), values),
        None => Column::new(name.into(), cells),
    }
}

pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Renders a value for display, showing missing values as `NaN`.
pub fn render(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "NaN".to_string(),
        AnyValue::String(text) => text.to_string(),
        AnyValue::StringOwned(text) => text.to_string(),
        value => value.to_string(),
    }
}

/// A value wrapped for serialization. Missing values serialize as `None`, which the [`csv`]
/// writer emits as an empty field.
pub struct Cell<'v, 'a>(pub &'v AnyValue<'a>);

impl Serialize for Cell<'_, '_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            AnyValue::Null => serializer.serialize_none(),
            AnyValue::String(text) => serializer.serialize_str(text),
            AnyValue::StringOwned(text) => serializer.serialize_str(text.as_str()),
            value => serializer.collect_str(value),
        }
    }
}
