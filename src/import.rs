//! Reading Shopify export files.

use crate::model::Mapping;
use crate::Result;
use anyhow::{bail, Context};
use csv::ReaderBuilder;
use std::io;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// The contents of an export file: the header mapping and the data rows.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    mapping: Mapping,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub(crate) fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Opens `path` for reading, or stdin when `path` is `None`.
pub(crate) fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        None => Box::new(BufReader::new(io::stdin())),
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("Unable to open file {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
    })
}

/// Reads a delimited export into a `Table`.
///
/// The first row becomes the header mapping and any additional rows covered
/// by `header_rows` are discarded. Rows are not required to be of uniform
/// length; short rows fail later, when a needed field cannot be reached.
pub(crate) fn read_table(reader: impl Read, delimiter: u8, header_rows: u32) -> Result<Table> {
    if header_rows == 0 {
        bail!("A header row is required to locate columns, but header_rows is 0");
    }
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut mapping = None;
    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("Unable to read row {}", index + 1))?;
        if index == 0 {
            mapping = Some(Mapping::new(record.iter())?);
            continue;
        }
        if (index as u32) < header_rows {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    match mapping {
        Some(mapping) => Ok(Table { mapping, rows }),
        None => bail!("The input is empty, expected at least a header row"),
    }
}
