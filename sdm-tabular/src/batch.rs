//! Columnar batch format for typed relational rows.
//!
//! A `ColumnBatch` stores one table's rows as typed column vectors together
//! with the schema that names and types each column.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, TabularError};

/// Tabular field types.
///
/// This is the declared type of a column. Consumers decide how each type
/// converts (or refuses to convert) to their own value space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Bytes,
    Date,
    Timestamp,
    TimestampTz,
    Decimal { precision: u8, scale: i8 },
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::Int32 => f.write_str("int32"),
            FieldType::Int64 => f.write_str("int64"),
            FieldType::Float32 => f.write_str("float32"),
            FieldType::Float64 => f.write_str("float64"),
            FieldType::String => f.write_str("string"),
            FieldType::Bytes => f.write_str("bytes"),
            FieldType::Date => f.write_str("date"),
            FieldType::Timestamp => f.write_str("timestamp"),
            FieldType::TimestampTz => f.write_str("timestamptz"),
            FieldType::Decimal { precision, scale } => {
                write!(f, "decimal({precision},{scale})")
            }
        }
    }
}

/// Field information for a column in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Column name.
    pub name: String,
    /// Field type.
    pub field_type: FieldType,
    /// Whether the field allows nulls.
    pub nullable: bool,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, field_type: FieldType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable,
        }
    }
}

/// Schema for a column batch.
#[derive(Debug, Clone)]
pub struct BatchSchema {
    /// Field definitions in column order.
    pub fields: Vec<FieldInfo>,
    name_to_index: HashMap<String, usize>,
}

impl BatchSchema {
    /// Create a new batch schema from field definitions.
    pub fn new(fields: Vec<FieldInfo>) -> Self {
        let name_to_index = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();

        Self {
            fields,
            name_to_index,
        }
    }

    /// Get field index by name.
    #[inline]
    pub fn index_by_name(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Get field info by name.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldInfo> {
        self.index_by_name(name).map(|i| &self.fields[i])
    }

    /// Number of fields in the schema.
    #[inline]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Column names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Column storage - typed arrays with optional values (nullable).
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Boolean(Vec<Option<bool>>),
    Int32(Vec<Option<i32>>),
    Int64(Vec<Option<i64>>),
    Float32(Vec<Option<f32>>),
    Float64(Vec<Option<f64>>),
    String(Vec<Option<String>>),
    Bytes(Vec<Option<Vec<u8>>>),
    /// Date: days since 1970-01-01
    Date(Vec<Option<i32>>),
    /// Timestamp: microseconds since epoch (UTC)
    Timestamp(Vec<Option<i64>>),
    /// TimestampTz: microseconds since epoch with timezone
    TimestampTz(Vec<Option<i64>>),
    /// Decimal: (unscaled_value, precision, scale)
    Decimal {
        values: Vec<Option<i128>>,
        precision: u8,
        scale: i8,
    },
}

impl Column {
    /// Get the number of rows in this column.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Boolean(v) => v.len(),
            Self::Int32(v) | Self::Date(v) => v.len(),
            Self::Int64(v) | Self::Timestamp(v) | Self::TimestampTz(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::String(v) => v.len(),
            Self::Bytes(v) => v.len(),
            Self::Decimal { values, .. } => values.len(),
        }
    }

    /// Check if the column is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if value at index is null (out-of-range counts as null).
    #[inline]
    pub fn is_null(&self, idx: usize) -> bool {
        match self {
            Self::Boolean(v) => v.get(idx).map_or(true, |v| v.is_none()),
            Self::Int32(v) | Self::Date(v) => v.get(idx).map_or(true, |v| v.is_none()),
            Self::Int64(v) | Self::Timestamp(v) | Self::TimestampTz(v) => {
                v.get(idx).map_or(true, |v| v.is_none())
            }
            Self::Float32(v) => v.get(idx).map_or(true, |v| v.is_none()),
            Self::Float64(v) => v.get(idx).map_or(true, |v| v.is_none()),
            Self::String(v) => v.get(idx).map_or(true, |v| v.is_none()),
            Self::Bytes(v) => v.get(idx).map_or(true, |v| v.is_none()),
            Self::Decimal { values, .. } => values.get(idx).map_or(true, |v| v.is_none()),
        }
    }

    /// Get the field type of this column.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Boolean(_) => FieldType::Boolean,
            Self::Int32(_) => FieldType::Int32,
            Self::Int64(_) => FieldType::Int64,
            Self::Float32(_) => FieldType::Float32,
            Self::Float64(_) => FieldType::Float64,
            Self::String(_) => FieldType::String,
            Self::Bytes(_) => FieldType::Bytes,
            Self::Date(_) => FieldType::Date,
            Self::Timestamp(_) => FieldType::Timestamp,
            Self::TimestampTz(_) => FieldType::TimestampTz,
            Self::Decimal {
                precision, scale, ..
            } => FieldType::Decimal {
                precision: *precision,
                scale: *scale,
            },
        }
    }

    /// Get boolean value at index (returns None if wrong type or null).
    #[inline]
    pub fn get_bool(&self, idx: usize) -> Option<bool> {
        match self {
            Self::Boolean(v) => v.get(idx).and_then(|v| *v),
            _ => None,
        }
    }

    /// Get an integer value at index, widening Int32 to i64.
    #[inline]
    pub fn get_int(&self, idx: usize) -> Option<i64> {
        match self {
            Self::Int32(v) => v.get(idx).and_then(|v| *v).map(i64::from),
            Self::Int64(v) => v.get(idx).and_then(|v| *v),
            _ => None,
        }
    }

    /// Get a floating point value at index, widening Float32 to f64.
    #[inline]
    pub fn get_float(&self, idx: usize) -> Option<f64> {
        match self {
            Self::Float32(v) => v.get(idx).and_then(|v| *v).map(f64::from),
            Self::Float64(v) => v.get(idx).and_then(|v| *v),
            _ => None,
        }
    }

    /// Get string value at index (returns None if wrong type or null).
    #[inline]
    pub fn get_string(&self, idx: usize) -> Option<&str> {
        match self {
            Self::String(v) => v.get(idx).and_then(|v| v.as_deref()),
            _ => None,
        }
    }

    /// Get date value at index (days since epoch, returns None if wrong type or null).
    #[inline]
    pub fn get_date(&self, idx: usize) -> Option<i32> {
        match self {
            Self::Date(v) => v.get(idx).and_then(|v| *v),
            _ => None,
        }
    }
}

/// One table's rows in columnar form.
#[derive(Debug, Clone)]
pub struct ColumnBatch {
    /// Schema for this batch.
    pub schema: Arc<BatchSchema>,
    /// Column data in schema order.
    pub columns: Vec<Column>,
    /// Number of rows in the batch.
    pub num_rows: usize,
}

impl ColumnBatch {
    /// Create a new column batch.
    ///
    /// Fails if the column count, any column's row count, or any column's
    /// data type disagrees with the schema.
    pub fn new(schema: Arc<BatchSchema>, columns: Vec<Column>) -> Result<Self> {
        if columns.len() != schema.num_fields() {
            return Err(TabularError::Schema(format!(
                "Column count mismatch: schema has {} fields, got {} columns",
                schema.num_fields(),
                columns.len()
            )));
        }

        let num_rows = columns.first().map_or(0, |c| c.len());

        for (field, col) in schema.fields.iter().zip(&columns) {
            if col.len() != num_rows {
                return Err(TabularError::Schema(format!(
                    "Row count mismatch: column '{}' has {} rows, expected {}",
                    field.name,
                    col.len(),
                    num_rows
                )));
            }
            if col.field_type() != field.field_type {
                return Err(TabularError::TypeMismatch {
                    column: field.name.clone(),
                    declared: field.field_type,
                    actual: col.field_type(),
                });
            }
        }

        Ok(Self {
            schema,
            columns,
            num_rows,
        })
    }

    /// Build a batch from `(name, column)` pairs, deriving the schema from the
    /// column data. Every field is marked nullable.
    pub fn from_columns<N: Into<String>>(columns: Vec<(N, Column)>) -> Result<Self> {
        let (fields, columns): (Vec<_>, Vec<_>) = columns
            .into_iter()
            .map(|(name, col)| (FieldInfo::new(name, col.field_type(), true), col))
            .unzip();
        Self::new(Arc::new(BatchSchema::new(fields)), columns)
    }

    /// Get column by name.
    #[inline]
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.schema.index_by_name(name).map(|i| &self.columns[i])
    }

    /// Get column by index.
    #[inline]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Check if the batch is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Iterator over row indices, in input order.
    pub fn row_indices(&self) -> impl Iterator<Item = usize> {
        0..self.num_rows
    }
}
