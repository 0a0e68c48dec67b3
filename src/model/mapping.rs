use crate::Result;
use anyhow::bail;
use std::collections::HashMap;

/// Maps header names from an export's header row to their column indexes.
///
/// Shopify has shuffled export columns over time, so fields are located by
/// header name rather than by position.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Mapping {
    headers: Vec<String>,
    index: HashMap<String, usize>,
}

impl Mapping {
    /// Create a new `Mapping` from the header row.
    pub fn new<S, I>(headers: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(ix, key)| (key.to_owned(), ix))
            .collect();
        if index.len() != headers.len() {
            bail!("Encountered a duplicate header");
        }
        Ok(Self { headers, index })
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn index_of(&self, header: &str) -> Option<usize> {
        self.index.get(header).copied()
    }

    /// The value under `header` in `row`, or an error when the header is
    /// missing or the row does not reach that column.
    pub fn field<'a>(&self, header: &str, row: &'a [String]) -> Result<&'a str> {
        let ix = match self.index_of(header) {
            Some(ix) => ix,
            None => bail!("The export has no '{header}' column"),
        };
        match row.get(ix) {
            Some(value) => Ok(value.as_str()),
            None => bail!(
                "The row has {} fields but '{header}' is at index {ix}",
                row.len()
            ),
        }
    }
}
