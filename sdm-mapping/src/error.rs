//! Mapping error types

use std::fmt;

use sdm_schema::SchemaError;
use sdm_tabular::{FieldType, TabularError};
use thiserror::Error;

use crate::coerce::LiteralKind;
use crate::consistency::ConsistencyReport;
use crate::table::Table;

/// Where in the input an error was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowContext {
    pub table: Table,
    /// 0-based row index within the table's batch
    pub row: usize,
    /// Natural key of the row, when it could be read
    pub key: Option<String>,
}

impl fmt::Display for RowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table '{}' row {}", self.table, self.row)?;
        if let Some(key) = &self.key {
            write!(f, " (key '{key}')")?;
        }
        Ok(())
    }
}

/// Mapping-specific errors
///
/// Every variant except [`MappingError::Referential`] aborts the table that
/// raised it; nothing is skipped silently.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A mapper tried to emit a class or predicate the schema does not
    /// declare, or a literal whose datatype disagrees with the property range
    #[error("Schema violation in table '{table}': {message}")]
    SchemaViolation { table: Table, message: String },

    /// A required column is absent from the batch
    #[error("Column not found: {column} in table {table}")]
    MissingColumn { table: Table, column: &'static str },

    /// A column's declared type does not coerce to the kind the table expects
    #[error("Column '{column}' in table '{table}' is {actual}, expected {expected}")]
    ColumnType {
        table: Table,
        column: &'static str,
        expected: LiteralKind,
        actual: FieldType,
    },

    /// A column's declared type has no literal form
    #[error("Cannot coerce column '{column}' in table '{table}': unsupported type {field_type}")]
    Coercion {
        table: Table,
        column: String,
        field_type: FieldType,
    },

    /// A required value is null
    #[error("Null value in required column '{column}' at {at}")]
    NullValue { at: RowContext, column: &'static str },

    /// An enumerated column holds a value outside its closed set
    #[error("Unknown {domain} '{value}' in column '{column}' at {at}")]
    UnknownVariant {
        at: RowContext,
        column: &'static str,
        domain: &'static str,
        value: String,
    },

    /// Row values are individually valid but contradict each other
    #[error("Invalid row at {at}: {message}")]
    InvalidRow { at: RowContext, message: String },

    /// The consistency pass found violations and strictness is `strict`
    #[error("{}", summarize(.0))]
    Referential(Box<ConsistencyReport>),

    /// Malformed batch
    #[error(transparent)]
    Tabular(#[from] TabularError),

    /// The schema could not be built for the configured namespace
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

fn summarize(report: &ConsistencyReport) -> String {
    match report.violations().first() {
        Some(first) => format!(
            "{} referential violation(s); first: {}",
            report.len(),
            first
        ),
        None => "referential check failed".to_string(),
    }
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
