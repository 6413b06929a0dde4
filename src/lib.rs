//! Read-only, lazily-loaded tabular record store for lookup and search.
//!
//! A [`core::store::RecordStore`] reads its dataset (a header row plus
//! delimited data rows) the first time it is queried and keeps it for its
//! lifetime. It answers three kinds of queries: distinct values of a column,
//! case-insensitive substring search on one column, and the same search
//! across every column.
//!
//! # Examples
//!
//! ```
//! use jobstore::{core::store::RecordStore, source::memory::MemorySource};
//!
//! let store = RecordStore::new(
//!     MemorySource::new(["id", "title", "employer"])
//!         .with_row(["1", "Software Engineer", "Acme Inc"])
//!         .with_row(["2", "Data Analyst", "Acme Analytics"]),
//! );
//!
//! assert_eq!(
//!     store.distinct_values("employer").expect("known field"),
//!     vec!["Acme Analytics", "Acme Inc"],
//! );
//! assert_eq!(store.find_by_column_and_value("employer", "acme").expect("known field").len(), 2);
//! assert_eq!(store.find_by_value("analyst")[0].get("id"), Some("2"));
//! assert!(store.distinct_values("salary").is_err());
//! ```
//!
//! Reading a CSV file:
//! ```no_run
//! use jobstore::{core::store::RecordStore, source::csv::CsvSourceConfig};
//!
//! let store = RecordStore::with_config(CsvSourceConfig::from_env());
//! for job in store.find_by_value("rust") {
//!     println!("{:?}", job.get("name"));
//! }
//! ```
#![deny(missing_docs)]

/// Record store and matching helpers.
pub mod core;
/// Record and dataset types.
pub mod record;
/// Dataset sources and load errors.
pub mod source;
/// Shared aliases and defaults.
pub mod types;
