//! Error type for the conversion pipeline.

use tracing::error;

use crate::ParseError;

/// Error returned by the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The Western date is malformed or does not exist.
    #[error(transparent)]
    InvalidDate(#[from] ParseError),

    /// The date lies outside the modelled Myanmar years.
    #[error("Myanmar year {year} is outside the supported era ({min}..={max})")]
    UnsupportedEra {
        /// Myanmar year the date falls in
        year: i64,
        /// Earliest supported year
        min: i64,
        /// Latest supported year
        max: i64,
    },

    /// A constant table has no entry for an input it should cover.
    #[error("no entry in the {table} table for {key}")]
    InternalTableMiss {
        /// Name of the table that missed
        table: &'static str,
        /// Key that was looked up
        key: i64,
    },

    /// The conversion settings are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConversionError {
    /// Logs a lookup that a constant table should have covered.
    pub(crate) fn table_miss(table: &'static str, key: i64) -> Self {
        error!(table, key, "lookup table does not cover key");
        Self::InternalTableMiss { table, key }
    }
}
