//! Delimited-text file source backed by the arrow CSV reader.

use std::{
    env,
    fs::File,
    io::Seek,
    path::{Path, PathBuf},
    sync::Arc,
};

use arrow::{
    array::{Array, StringArray},
    csv::{ReaderBuilder, reader::Format},
    datatypes::{DataType, Field, Schema},
};
use tracing::debug;

use crate::{
    record::{Dataset, DatasetBuilder},
    types::{DATA_FILE_ENV, DEFAULT_DATA_FILE},
};

use super::{LoadError, LoadResult, RecordSource};

/// Location and dialect of the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSourceConfig {
    /// File to read.
    pub path: PathBuf,
    /// Field separator byte.
    pub delimiter: u8,
    /// Quote byte.
    pub quote: u8,
}

impl Default for CsvSourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvSourceConfig {
    /// Default dialect reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Default config with the path taken from `JOBSTORE_DATA_FILE` when set.
    pub fn from_env() -> Self {
        match env::var_os(DATA_FILE_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    /// Replaces the field separator.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replaces the quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    fn to_format(&self) -> Format {
        Format::default()
            .with_header(true)
            .with_delimiter(self.delimiter)
            .with_quote(self.quote)
    }
}

/// Reads a header row plus data rows from a delimited file.
///
/// All columns are read as text; empty cells become `""`. Rows whose field
/// count differs from the header fail the load.
#[derive(Debug, Clone)]
pub struct CsvSource {
    config: CsvSourceConfig,
}

impl CsvSource {
    /// Source over `config`.
    pub fn new(config: CsvSourceConfig) -> Self {
        Self { config }
    }

    /// Source reading `path` with the default dialect.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(CsvSourceConfig::new(path))
    }

    /// Active configuration.
    pub fn config(&self) -> &CsvSourceConfig {
        &self.config
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn read_header(&self, file: &mut File) -> LoadResult<Vec<String>> {
        let (schema, _) = self.config.to_format().infer_schema(&mut *file, Some(0))?;
        file.rewind()?;

        let fields: Vec<String> = schema.fields().iter().map(|f| f.name().clone()).collect();
        if fields.is_empty() {
            return Err(LoadError::MissingHeader);
        }
        Ok(fields)
    }
}

impl RecordSource for CsvSource {
    fn load(&self) -> LoadResult<Dataset> {
        let mut file = File::open(&self.config.path)?;
        let fields = self.read_header(&mut file)?;

        let text_schema = Schema::new(
            fields
                .iter()
                .map(|name| Field::new(name, DataType::Utf8, true))
                .collect::<Vec<_>>(),
        );
        let reader = ReaderBuilder::new(Arc::new(text_schema))
            .with_format(self.config.to_format())
            .build(file)?;

        let mut builder = DatasetBuilder::new(fields);
        for batch in reader {
            let batch = batch?;
            let columns = batch
                .columns()
                .iter()
                .zip(builder.fields())
                .map(|(col, name)| {
                    col.as_any().downcast_ref::<StringArray>().ok_or_else(|| {
                        LoadError::Message(format!("column {name} was not read as text"))
                    })
                })
                .collect::<LoadResult<Vec<_>>>()?;

            builder.reserve(batch.num_rows());
            for row in 0..batch.num_rows() {
                let cells = columns
                    .iter()
                    .map(|col| {
                        if col.is_null(row) {
                            String::new()
                        } else {
                            col.value(row).to_string()
                        }
                    })
                    .collect();
                builder.push_row(cells)?;
            }
        }

        let dataset = builder.finish();
        debug!(
            path = %self.config.path.display(),
            rows = dataset.len(),
            columns = dataset.fields().len(),
            "parsed csv source"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("csv file {}", self.config.path.display())
    }
}
