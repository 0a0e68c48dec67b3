use serde::{Deserialize, Serialize};

/// Represents the columns that can appear in the output file.
///
/// The configuration's `output_columns` setting selects which of these are
/// written and in what order.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum OutputColumn {
    #[default]
    Date,
    Payee,
    Category,
    Memo,
    Outflow,
    Inflow,
}

serde_plain::derive_display_from_serialize!(OutputColumn);
serde_plain::derive_fromstr_from_deserialize!(OutputColumn);

impl OutputColumn {
    /// The column layout YNAB expects.
    pub fn default_columns() -> Vec<OutputColumn> {
        vec![
            OutputColumn::Date,
            OutputColumn::Payee,
            OutputColumn::Category,
            OutputColumn::Memo,
            OutputColumn::Outflow,
            OutputColumn::Inflow,
        ]
    }
}
