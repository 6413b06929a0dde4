//! Shared primitive aliases and defaults.

/// Column name taken from the source header.
pub type FieldName = String;

/// Data file used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "data/job_data.csv";

/// Environment variable that overrides [`DEFAULT_DATA_FILE`].
pub const DATA_FILE_ENV: &str = "JOBSTORE_DATA_FILE";
