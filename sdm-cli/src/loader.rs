//! Dataset documents
//!
//! A dataset is one JSON object keyed by table name, each holding an array of
//! row objects:
//!
//! ```json
//! { "area": [{ "area": "db", "topic_name": "Databases" }], "author": [] }
//! ```
//!
//! Columns are built from each table's declared column specs. Keys a table
//! does not declare are ignored and missing tables stay empty.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sdm_mapping::{
    aggregate_decisions, apply_decisions, epoch_days, ColumnSpec, Dataset, LiteralKind, Table,
};
use sdm_tabular::{Column, ColumnBatch};
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{CliError, CliResult};

type Row = Map<String, Value>;

fn cell_error(table: Table, row: usize, column: &str, msg: impl std::fmt::Display) -> CliError {
    CliError::Input(format!(
        "table '{table}' row {row} column '{column}': {msg}"
    ))
}

/// `YYYY-MM-DD`, with any trailing time part dropped.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// A natural key cell before the column type is settled
enum Key {
    Int(i64),
    Text(String),
}

/// Integer value of a JSON number, accepting integral floats such as `3.0`.
fn integral(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

fn build_column(table: Table, spec: &ColumnSpec, rows: &[Row]) -> CliResult<Column> {
    let cells: Vec<Option<&Value>> = rows
        .iter()
        .map(|r| r.get(spec.name).filter(|v| !v.is_null()))
        .collect();
    let bad = |row: usize, expected: &str| cell_error(table, row, spec.name, format!("expected {expected}"));

    let column = match spec.kind {
        LiteralKind::Identifier => {
            let mut keys = Vec::with_capacity(cells.len());
            for (i, cell) in cells.iter().enumerate() {
                keys.push(match cell {
                    None => None,
                    Some(Value::String(s)) => Some(Key::Text(s.clone())),
                    Some(Value::Number(n)) => Some(
                        integral(n)
                            .map(Key::Int)
                            .ok_or_else(|| bad(i, "a string or integer identifier"))?,
                    ),
                    Some(_) => return Err(bad(i, "a string or integer identifier")),
                });
            }
            if keys.iter().flatten().all(|k| matches!(k, Key::Int(_))) {
                Column::Int64(
                    keys.into_iter()
                        .map(|k| match k {
                            Some(Key::Int(n)) => Some(n),
                            _ => None,
                        })
                        .collect(),
                )
            } else {
                Column::String(
                    keys.into_iter()
                        .map(|k| {
                            k.map(|k| match k {
                                Key::Int(n) => n.to_string(),
                                Key::Text(s) => s,
                            })
                        })
                        .collect(),
                )
            }
        }
        LiteralKind::Boolean => Column::Boolean(
            cells
                .iter()
                .enumerate()
                .map(|(i, v)| v.map(|v| v.as_bool().ok_or_else(|| bad(i, "a boolean"))).transpose())
                .collect::<CliResult<_>>()?,
        ),
        LiteralKind::Integer => Column::Int64(
            cells
                .iter()
                .enumerate()
                .map(|(i, v)| v.map(|v| v.as_i64().ok_or_else(|| bad(i, "an integer"))).transpose())
                .collect::<CliResult<_>>()?,
        ),
        LiteralKind::Float => Column::Float64(
            cells
                .iter()
                .enumerate()
                .map(|(i, v)| v.map(|v| v.as_f64().ok_or_else(|| bad(i, "a number"))).transpose())
                .collect::<CliResult<_>>()?,
        ),
        LiteralKind::String => Column::String(
            cells
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    v.map(|v| v.as_str().map(str::to_string).ok_or_else(|| bad(i, "a string")))
                        .transpose()
                })
                .collect::<CliResult<_>>()?,
        ),
        LiteralKind::Date => Column::Date(
            cells
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    v.map(|v| {
                        v.as_str()
                            .and_then(parse_date)
                            .map(epoch_days)
                            .ok_or_else(|| bad(i, "a YYYY-MM-DD date"))
                    })
                    .transpose()
                })
                .collect::<CliResult<_>>()?,
        ),
    };
    Ok(column)
}

fn load_table(table: Table, value: Value) -> CliResult<ColumnBatch> {
    let Value::Array(items) = value else {
        return Err(CliError::Input(format!(
            "table '{table}' must be an array of row objects"
        )));
    };
    let rows = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(row) => Ok(row),
            other => Err(CliError::Input(format!(
                "table '{table}' row {i}: expected an object, found {other}"
            ))),
        })
        .collect::<CliResult<Vec<Row>>>()?;

    let mut columns = Vec::new();
    for spec in table.spec().columns {
        if rows.iter().any(|r| r.contains_key(spec.name)) {
            columns.push((spec.name, build_column(table, spec, &rows)?));
        }
    }
    let batch = ColumnBatch::from_columns(columns)
        .map_err(|e| CliError::Input(format!("table '{table}': {e}")))?;
    debug!(table = %table, rows = batch.num_rows, "loaded table");
    Ok(batch)
}

/// Parse a dataset document.
///
/// When both `paper` and `review` are present, each reviewed paper's
/// decision is set to its review majority.
pub fn parse_dataset(content: &str) -> CliResult<Dataset> {
    let doc: BTreeMap<String, Value> = serde_json::from_str(content)?;
    let mut dataset = Dataset::new();
    for (name, value) in doc {
        let table: Table = name.parse().map_err(CliError::Input)?;
        dataset.insert(table, load_table(table, value)?);
    }

    if let (Some(papers), Some(reviews)) = (dataset.get(Table::Paper), dataset.get(Table::Review)) {
        let decisions = aggregate_decisions(reviews)?;
        let papers = apply_decisions(papers, &decisions)?;
        dataset.insert(Table::Paper, papers);
    }
    Ok(dataset)
}
