//! Typed access to one row of a validated batch
//!
//! Every accessor reports failures with the row's [`RowContext`], so an error
//! names the table, row index and natural key it came from.

use std::str::FromStr;

use sdm_graph_ir::Term;
use sdm_tabular::{Column, ColumnBatch};

use crate::coerce::{self, Coerced};
use crate::error::{MappingError, MappingResult, RowContext};
use crate::kinds::UnknownKind;
use crate::table::{Table, TableSpec};

/// One row of a batch that has passed [`TableSpec::validate`]
pub struct RowView<'a> {
    spec: &'static TableSpec,
    batch: &'a ColumnBatch,
    row: usize,
    key: Option<String>,
}

impl<'a> RowView<'a> {
    pub fn new(table: Table, batch: &'a ColumnBatch, row: usize) -> Self {
        let spec = table.spec();
        let key = batch
            .column_by_name(spec.key)
            .and_then(|col| coerce::identifier(col, row));
        Self {
            spec,
            batch,
            row,
            key,
        }
    }

    pub fn table(&self) -> Table {
        self.spec.table
    }

    /// Natural key of the row, if non-null
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn context(&self) -> RowContext {
        RowContext {
            table: self.spec.table,
            row: self.row,
            key: self.key.clone(),
        }
    }

    fn column(&self, name: &'static str) -> Option<&'a Column> {
        self.batch.column_by_name(name)
    }

    fn null(&self, column: &'static str) -> MappingError {
        MappingError::NullValue {
            at: self.context(),
            column,
        }
    }

    /// Required identifier value rendered as text
    pub fn id(&self, column: &'static str) -> MappingResult<String> {
        self.opt_id(column)?.ok_or_else(|| self.null(column))
    }

    /// Optional identifier value rendered as text
    pub fn opt_id(&self, column: &'static str) -> MappingResult<Option<String>> {
        Ok(self
            .column(column)
            .and_then(|col| coerce::identifier(col, self.row)))
    }

    /// Required string value
    pub fn text(&self, column: &'static str) -> MappingResult<&'a str> {
        self.column(column)
            .and_then(|col| col.get_string(self.row))
            .ok_or_else(|| self.null(column))
    }

    /// Required boolean value
    pub fn flag(&self, column: &'static str) -> MappingResult<bool> {
        self.column(column)
            .and_then(|col| col.get_bool(self.row))
            .ok_or_else(|| self.null(column))
    }

    /// Required string value parsed into a closed enumeration
    pub fn kind<K>(&self, column: &'static str) -> MappingResult<K>
    where
        K: FromStr<Err = UnknownKind>,
    {
        self.text(column)?
            .parse()
            .map_err(|e: UnknownKind| MappingError::UnknownVariant {
                at: self.context(),
                column,
                domain: e.domain,
                value: e.value,
            })
    }

    /// Typed literal for an optional column; `None` when absent or null
    pub fn literal(&self, column: &'static str) -> MappingResult<Option<Term>> {
        let Some(col) = self.column(column) else {
            return Ok(None);
        };
        match coerce::coerce(col, self.row) {
            Coerced::Null => Ok(None),
            Coerced::Literal(term) => Ok(Some(term)),
            Coerced::Unsupported(field_type) => Err(MappingError::Coercion {
                table: self.spec.table,
                column: column.to_string(),
                field_type,
            }),
            Coerced::OutOfRange(days) => Err(MappingError::InvalidRow {
                at: self.context(),
                message: format!("date in column '{column}' out of range ({days} days from epoch)"),
            }),
        }
    }

    /// Typed literal for a required column
    pub fn required_literal(&self, column: &'static str) -> MappingResult<Term> {
        self.literal(column)?.ok_or_else(|| self.null(column))
    }
}
