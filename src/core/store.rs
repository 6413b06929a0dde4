use std::{fmt, path::PathBuf};

use hashbrown::HashSet;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::{
    core::term::SearchTerm,
    record::{Dataset, Record},
    source::{
        LoadResult, RecordSource,
        csv::{CsvSource, CsvSourceConfig},
    },
    types::FieldName,
};

/// Query failure surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The named field is not part of the loaded header.
    UnknownField(FieldName),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(field) => write!(f, "unknown field: {field}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only record store that loads its dataset on first use.
///
/// The first query (or [`RecordStore::try_load`]) loads the dataset from the
/// source. A successful load is published once and reused for the store's
/// lifetime. A failed load is logged and left unpublished, so queries return
/// empty results and the next call retries the load.
///
/// Concurrent first callers block on a single load. Once published the
/// dataset is only ever borrowed immutably.
pub struct RecordStore {
    source: Box<dyn RecordSource>,
    dataset: OnceCell<Dataset>,
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl RecordStore {
    /// Store over any source. Nothing is read until the first query.
    pub fn new(source: impl RecordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            dataset: OnceCell::new(),
        }
    }

    /// Store over a delimited file at `path` with the default dialect.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(CsvSource::open(path))
    }

    /// Store over a delimited file described by `config`.
    pub fn with_config(config: CsvSourceConfig) -> Self {
        Self::new(CsvSource::new(config))
    }

    /// Loads the dataset now, returning the load error instead of logging it.
    ///
    /// A no-op after the first successful load.
    pub fn try_load(&self) -> LoadResult<&Dataset> {
        self.dataset.get_or_try_init(|| {
            debug!(source = %self.source.describe(), "loading dataset");
            let dataset = self.source.load()?;
            debug!(
                rows = dataset.len(),
                columns = dataset.fields().len(),
                "dataset loaded"
            );
            Ok(dataset)
        })
    }

    /// True once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Ordered header fields; empty while nothing is loaded.
    pub fn fields(&self) -> &[FieldName] {
        self.dataset().map(Dataset::fields).unwrap_or_default()
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// True when no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Distinct values of `field`, sorted ascending.
    pub fn distinct_values(&self, field: &str) -> Result<Vec<String>, StoreError> {
        let Some(dataset) = self.dataset() else {
            return Ok(Vec::new());
        };
        check_field(dataset, field)?;

        let mut seen = HashSet::new();
        let mut values: Vec<String> = dataset
            .records()
            .iter()
            .filter_map(|rec| rec.get(field))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect();
        values.sort_unstable();
        Ok(values)
    }

    /// Borrowed view of every record in source order.
    pub fn records(&self) -> &[Record] {
        self.dataset().map(Dataset::records).unwrap_or_default()
    }

    /// Owned copy of every record in source order.
    pub fn all_records(&self) -> Vec<Record> {
        self.records().to_vec()
    }

    /// Records whose `column` contains `term`, ignoring case.
    pub fn find_by_column_and_value(
        &self,
        column: &str,
        term: &str,
    ) -> Result<Vec<&Record>, StoreError> {
        let Some(dataset) = self.dataset() else {
            return Ok(Vec::new());
        };
        check_field(dataset, column)?;

        let term = SearchTerm::new(term);
        Ok(dataset
            .records()
            .iter()
            .filter(|rec| rec.get(column).is_some_and(|v| term.matches(v)))
            .collect())
    }

    /// Owned variant of [`RecordStore::find_by_column_and_value`].
    pub fn find_by_column_and_value_cloned(
        &self,
        column: &str,
        term: &str,
    ) -> Result<Vec<Record>, StoreError> {
        Ok(self
            .find_by_column_and_value(column, term)?
            .into_iter()
            .cloned()
            .collect())
    }

    /// Records with at least one field containing `term`, ignoring case.
    pub fn find_by_value(&self, term: &str) -> Vec<&Record> {
        let term = SearchTerm::new(term);
        self.records()
            .iter()
            .filter(|rec| term.matches_any(rec))
            .collect()
    }

    /// Owned variant of [`RecordStore::find_by_value`].
    pub fn find_by_value_cloned(&self, term: &str) -> Vec<Record> {
        self.find_by_value(term).into_iter().cloned().collect()
    }

    fn dataset(&self) -> Option<&Dataset> {
        match self.try_load() {
            Ok(dataset) => Some(dataset),
            Err(err) => {
                warn!(
                    source = %self.source.describe(),
                    error = %err,
                    "failed to load dataset; serving empty results until a retry succeeds"
                );
                None
            }
        }
    }
}

fn check_field(dataset: &Dataset, field: &str) -> Result<(), StoreError> {
    if dataset.has_field(field) {
        Ok(())
    } else {
        Err(StoreError::UnknownField(field.to_string()))
    }
}
