use crate::dataset::Dataset;
use crate::processors::{ParseError, ParseResult};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A dataset together with the delimiter it was parsed with.
#[derive(Debug, PartialEq)]
pub struct Detected {
    pub delimiter: u8,
    pub dataset: Dataset,
}

/// Parses delimited text with the first record as header.
///
/// Records shorter than the header are padded with missing values, longer records are rejected.
/// Blank lines are skipped.
pub fn read_delimited(input: &[u8], delimiter: u8) -> ParseResult<Dataset> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input);
    let headers = reader.headers()?.iter().map(str::to_string).collect::<Vec<_>>();

    let mut records = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    Ok(Dataset::from_records(&headers, records)?)
}

/// Tries each delimiter in order and accepts the first one that yields more than one column.
///
/// A delimiter whose parse fails is skipped. No attempt is made to find the best delimiter: an
/// earlier delimiter that splits the header wins even if a later one would fit the rows better.
pub fn detect(input: &[u8], delimiters: &[u8]) -> ParseResult<Detected> {
    std::str::from_utf8(input)?;
    for &delimiter in delimiters {
        let separator = char::from(delimiter);
        match read_delimited(input, delimiter) {
            Ok(dataset) if dataset.width() > 1 => {
                debug!(delimiter = %separator, columns = dataset.width(), "delimiter accepted");
                return Ok(Detected { delimiter, dataset });
            }
            Ok(dataset) => {
                debug!(delimiter = %separator, columns = dataset.width(), "too few columns");
            }
            Err(err) => {
                warn!(delimiter = %separator, error = %err, "error parsing with delimiter");
            }
        }
    }
    let tried = delimiters.iter().map(|d| char::from(*d)).collect::<String>();
    Err(ParseError::NoDelimiter(tried))
}
