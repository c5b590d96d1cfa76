use crate::dataset::Dataset;
use crate::processors::ParseResult;
use crate::value::Cell;
use std::io;

pub struct CsvWriter<W>
where
    W: io::Write,
{
    writer: csv::Writer<W>,
}

impl<W> CsvWriter<W>
where
    W: io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer: csv::Writer::from_writer(writer) }
    }

    /// Writes the header line followed by every row of `dataset`. Row labels are not written.
    pub fn write_dataset(&mut self, dataset: &Dataset) -> ParseResult<()> {
        self.writer.write_record(dataset.column_names())?;
        for index in 0..dataset.height() {
            let (_, values) = dataset.row(index)?;
            self.writer.serialize(values.iter().map(Cell).collect::<Vec<_>>())?;
        }
        Ok(self.writer.flush()?)
    }
}
