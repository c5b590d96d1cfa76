use crate::dataset::Dataset;
use crate::processor::ProcessorResult;
use crate::value::{is_numeric, render};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io;

/// Renders a dataset as a table led by the source label of each row.
pub fn render_table(dataset: &Dataset) -> ProcessorResult<Table> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);

    let header = std::iter::once(Cell::new(""))
        .chain(dataset.column_names().into_iter().map(Cell::new));
    table.set_header(header);

    let alignments = dataset
        .columns()
        .iter()
        .map(|column| match is_numeric(column.dtype()) {
            true => CellAlignment::Right,
            false => CellAlignment::Left,
        })
        .collect::<Vec<_>>();
    for index in 0..dataset.height() {
        let (label, values) = dataset.row(index)?;
        let cells = std::iter::once(Cell::new(render(&label)).set_alignment(CellAlignment::Right))
            .chain(values.iter().zip(&alignments).map(|(value, alignment)| {
                Cell::new(render(value)).set_alignment(*alignment)
            }));
        table.add_row(cells);
    }
    Ok(table)
}

/// Writes `banner` on its own line followed by the rendered dataset.
pub fn print_table<W>(output: &mut W, banner: &str, dataset: &Dataset) -> ProcessorResult<()>
where
    W: io::Write,
{
    let table = render_table(dataset)?;
    writeln!(output, "{}", banner)?;
    writeln!(output, "{}", table)?;
    writeln!(output, "[{} rows x {} columns]", dataset.height(), dataset.width())?;
    Ok(output.flush()?)
}
