//! Source over rows already held in memory.

use crate::{
    record::Dataset,
    types::FieldName,
};

use super::{LoadResult, RecordSource};

/// Header plus positional rows, validated on every load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    fields: Vec<FieldName>,
    rows: Vec<Vec<String>>,
}

impl MemorySource {
    /// Source with `fields` as the header and no rows.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldName>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends one positional row.
    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(row);
        self
    }

    /// Appends one positional row.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }
}

impl RecordSource for MemorySource {
    fn load(&self) -> LoadResult<Dataset> {
        Dataset::from_rows(self.fields.clone(), self.rows.iter().cloned())
    }

    fn describe(&self) -> String {
        format!("in-memory rows ({})", self.rows.len())
    }
}
