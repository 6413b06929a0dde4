//! Record and dataset types.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    source::{LoadError, LoadResult},
    types::FieldName,
};

/// One data row, keyed by field name.
///
/// Every record produced by a load carries exactly the dataset's header
/// fields. Cells that were empty in the source hold `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: HashMap<FieldName, String>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Sets `field` to `value`, returning the previous value.
    ///
    /// Only affects this copy; records held by a store are never handed out
    /// mutably.
    pub fn insert(&mut self, field: impl Into<FieldName>, value: impl Into<String>) -> Option<String> {
        self.values.insert(field.into(), value.into())
    }

    /// Returns true when `field` is present.
    pub fn contains_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Iterates `(field, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates values in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.values().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<FieldName>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Immutable, ordered collection of records sharing one header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    fields: Vec<FieldName>,
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset from a header and positional rows.
    ///
    /// Every row must have exactly `fields.len()` cells; the first row that
    /// does not rejects the whole dataset with [`LoadError::RowWidth`].
    pub fn from_rows<I, R>(fields: Vec<FieldName>, rows: I) -> LoadResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = String>,
    {
        if fields.is_empty() {
            return Err(LoadError::MissingHeader);
        }

        let mut builder = DatasetBuilder::new(fields);
        for row in rows {
            builder.push_row(row.into_iter().collect())?;
        }
        Ok(builder.finish())
    }

    /// Ordered header fields.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Returns true when `field` is one of the header fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Records in source row order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Incremental dataset construction used by the sources.
#[derive(Debug)]
pub(crate) struct DatasetBuilder {
    fields: Vec<FieldName>,
    records: Vec<Record>,
}

impl DatasetBuilder {
    pub(crate) fn new(fields: Vec<FieldName>) -> Self {
        Self {
            fields,
            records: Vec::new(),
        }
    }

    pub(crate) fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    pub(crate) fn push_row(&mut self, cells: Vec<String>) -> LoadResult<()> {
        if cells.len() != self.fields.len() {
            return Err(LoadError::RowWidth {
                // 1-based, counting the header as line 1
                line: self.records.len() + 2,
                expected: self.fields.len(),
                found: cells.len(),
            });
        }

        let record = self.fields.iter().cloned().zip(cells).collect();
        self.records.push(record);
        Ok(())
    }

    pub(crate) fn finish(self) -> Dataset {
        Dataset {
            fields: self.fields,
            records: self.records,
        }
    }
}
