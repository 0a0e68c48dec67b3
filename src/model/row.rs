use crate::model::{Amount, ExportDate, OutputColumn};

/// A single normalized output row.
///
/// Fields that a transaction type does not set are absent and render as
/// empty cells, so the same row type serves every output column layout.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct OutputRow {
    pub(crate) date: Option<ExportDate>,
    pub(crate) payee: String,
    pub(crate) category: String,
    pub(crate) memo: String,
    pub(crate) inflow: Option<Amount>,
    pub(crate) outflow: Option<Amount>,
}

impl OutputRow {
    /// Renders the cell for `column`, with an empty string for absent fields.
    pub fn cell(&self, column: OutputColumn) -> String {
        match column {
            OutputColumn::Date => self.date.map(|d| d.to_string()).unwrap_or_default(),
            OutputColumn::Payee => self.payee.clone(),
            OutputColumn::Category => self.category.clone(),
            OutputColumn::Memo => self.memo.clone(),
            OutputColumn::Outflow => self.outflow.map(|a| a.to_string()).unwrap_or_default(),
            OutputColumn::Inflow => self.inflow.map(|a| a.to_string()).unwrap_or_default(),
        }
    }

    /// Renders the row against the configured column layout.
    pub fn render(&self, columns: &[OutputColumn]) -> Vec<String> {
        columns.iter().map(|&column| self.cell(column)).collect()
    }
}
