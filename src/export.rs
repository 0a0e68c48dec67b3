//! Writing the normalized output file.

use crate::model::{OutputColumn, OutputRow};
use crate::Result;
use anyhow::Context;
use csv::WriterBuilder;
use std::io;
use std::io::Write;
use std::path::Path;

/// Opens `path` for writing, or stdout when `path` is `None`.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        None => Box::new(io::stdout()),
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Unable to create file {}", path.display()))?,
        ),
    })
}

/// Writes the column headers followed by the rendered data rows.
pub(crate) fn write_table(
    writer: impl Write,
    delimiter: u8,
    columns: &[OutputColumn],
    rows: &[OutputRow],
) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    csv_writer
        .write_record(columns.iter().map(|c| c.to_string()))
        .context("Unable to write the header row")?;
    for row in rows {
        csv_writer
            .write_record(row.render(columns))
            .context("Unable to write a data row")?;
    }
    csv_writer.flush().context("Unable to flush the output")?;
    Ok(())
}
