use crate::dataset::Dataset;
use crate::processors::{ParseError, ParseResult};

/// Parses text whose columns are separated by runs of whitespace, with the first non-blank line
/// as header.
///
/// Fails if the header names fewer than two columns.
pub fn read_whitespace(input: &[u8]) -> ParseResult<Dataset> {
    let text = std::str::from_utf8(input)?;
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let headers = lines
        .next()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .unwrap_or_default();
    if headers.len() < 2 {
        return Err(ParseError::TooFewColumns(headers.len()));
    }

    let records = lines.map(|line| line.split_whitespace().map(str::to_string).collect());
    Ok(Dataset::from_records(&headers, records)?)
}
