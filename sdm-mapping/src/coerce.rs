//! Column value to typed literal coercion
//!
//! Coercion is a lookup on the column's declared [`FieldType`], never on the
//! runtime shape of a value:
//!
//! | FieldType | Literal |
//! |-----------|---------|
//! | Boolean | `xsd:boolean` |
//! | Int32, Int64 | `xsd:integer` |
//! | Float32, Float64 | `xsd:float` |
//! | Date | `xsd:date` |
//! | String | `xsd:string` |
//!
//! Bytes, Timestamp, TimestampTz and Decimal have no literal form here and
//! are rejected. Nulls produce no literal.

use std::fmt;

use chrono::NaiveDate;
use sdm_graph_ir::{Datatype, Term};
use sdm_tabular::{Column, FieldType};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// The kind of value a column carries once coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Boolean,
    Integer,
    Float,
    Date,
    String,
    /// Natural key used in resource identifiers: integer or string
    Identifier,
}

impl LiteralKind {
    /// Whether a column of kind `actual` satisfies a declaration of `self`
    pub fn accepts(self, actual: LiteralKind) -> bool {
        match self {
            LiteralKind::Identifier => {
                matches!(actual, LiteralKind::Integer | LiteralKind::String)
            }
            expected => expected == actual,
        }
    }

    /// Literal datatype this kind coerces to (identifiers have none)
    pub fn datatype(self) -> Option<Datatype> {
        match self {
            LiteralKind::Boolean => Some(Datatype::xsd_boolean()),
            LiteralKind::Integer => Some(Datatype::xsd_integer()),
            LiteralKind::Float => Some(Datatype::xsd_float()),
            LiteralKind::Date => Some(Datatype::xsd_date()),
            LiteralKind::String => Some(Datatype::xsd_string()),
            LiteralKind::Identifier => None,
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::Boolean => "boolean",
            LiteralKind::Integer => "integer",
            LiteralKind::Float => "float",
            LiteralKind::Date => "date",
            LiteralKind::String => "string",
            LiteralKind::Identifier => "identifier (integer or string)",
        })
    }
}

/// Literal kind for a declared field type, `None` if it has no literal form
pub fn literal_kind(field_type: FieldType) -> Option<LiteralKind> {
    match field_type {
        FieldType::Boolean => Some(LiteralKind::Boolean),
        FieldType::Int32 | FieldType::Int64 => Some(LiteralKind::Integer),
        FieldType::Float32 | FieldType::Float64 => Some(LiteralKind::Float),
        FieldType::Date => Some(LiteralKind::Date),
        FieldType::String => Some(LiteralKind::String),
        FieldType::Bytes
        | FieldType::Timestamp
        | FieldType::TimestampTz
        | FieldType::Decimal { .. } => None,
    }
}

/// Convert days since 1970-01-01 to a calendar date
pub fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Convert a calendar date to days since 1970-01-01
pub fn epoch_days(date: NaiveDate) -> i32 {
    chrono::Datelike::num_days_from_ce(&date) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Result of coercing one cell
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Coerced {
    Null,
    Literal(Term),
    /// Column type has no literal form
    Unsupported(FieldType),
    /// Date outside the representable calendar range
    OutOfRange(i32),
}

/// Coerce the cell at `row` of `col` to a typed literal
pub(crate) fn coerce(col: &Column, row: usize) -> Coerced {
    if col.is_null(row) {
        return Coerced::Null;
    }
    let term = match col {
        Column::Boolean(_) => col.get_bool(row).map(Term::boolean),
        Column::Int32(_) | Column::Int64(_) => col.get_int(row).map(Term::integer),
        Column::Float32(v) => v.get(row).copied().flatten().map(|x| Term::float(widen_f32(x))),
        Column::Float64(_) => col.get_float(row).map(Term::float),
        Column::String(_) => col.get_string(row).map(Term::string),
        Column::Date(_) => match col.get_date(row) {
            Some(days) => match date_from_epoch_days(days) {
                Some(date) => Some(Term::date(date)),
                None => return Coerced::OutOfRange(days),
            },
            None => None,
        },
        Column::Bytes(_)
        | Column::Timestamp(_)
        | Column::TimestampTz(_)
        | Column::Decimal { .. } => return Coerced::Unsupported(col.field_type()),
    };
    term.map_or(Coerced::Null, Coerced::Literal)
}

/// Lexical form of an identifier cell (integer or string), `None` if null
pub(crate) fn identifier(col: &Column, row: usize) -> Option<String> {
    match col {
        Column::Int32(_) | Column::Int64(_) => col.get_int(row).map(|n| n.to_string()),
        Column::String(_) => col.get_string(row).map(str::to_string),
        _ => None,
    }
}

/// Widen through the shortest decimal that round-trips the `f32`, so
/// `0.1f32` becomes `0.1` rather than `0.10000000149011612`.
fn widen_f32(x: f32) -> f64 {
    x.to_string().parse().unwrap_or(f64::from(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_kind_table() {
        assert_eq!(literal_kind(FieldType::Int32), Some(LiteralKind::Integer));
        assert_eq!(literal_kind(FieldType::Float32), Some(LiteralKind::Float));
        assert_eq!(literal_kind(FieldType::Date), Some(LiteralKind::Date));
        assert_eq!(literal_kind(FieldType::Timestamp), None);
        assert_eq!(
            literal_kind(FieldType::Decimal {
                precision: 10,
                scale: 2
            }),
            None
        );
    }

    #[test]
    fn test_identifier_accepts_int_and_string() {
        assert!(LiteralKind::Identifier.accepts(LiteralKind::Integer));
        assert!(LiteralKind::Identifier.accepts(LiteralKind::String));
        assert!(!LiteralKind::Identifier.accepts(LiteralKind::Date));
        assert!(!LiteralKind::Float.accepts(LiteralKind::Integer));
    }

    #[test]
    fn test_epoch_days_round_trip_known_dates() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(date_from_epoch_days(0), Some(epoch));
        assert_eq!(epoch_days(epoch), 0);

        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(epoch_days(d), 19_782);
        assert_eq!(date_from_epoch_days(19_782), Some(d));
        assert_eq!(date_from_epoch_days(i32::MAX), None);
    }

    #[test]
    fn test_coerce_by_declared_type() {
        assert_eq!(
            coerce(&Column::Boolean(vec![Some(true)]), 0),
            Coerced::Literal(Term::boolean(true))
        );
        assert_eq!(
            coerce(&Column::Int32(vec![Some(2024)]), 0),
            Coerced::Literal(Term::integer(2024))
        );
        assert_eq!(
            coerce(&Column::Float64(vec![Some(12.5)]), 0),
            Coerced::Literal(Term::float(12.5))
        );
        assert_eq!(
            coerce(&Column::Float32(vec![None]), 0),
            Coerced::Null
        );
        assert_eq!(
            coerce(&Column::String(vec![Some("Barcelona".into())]), 0),
            Coerced::Literal(Term::string("Barcelona"))
        );
        assert_eq!(
            coerce(&Column::Date(vec![Some(0)]), 0),
            Coerced::Literal(Term::date(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()))
        );
    }

    #[test]
    fn test_coerce_null_and_unsupported() {
        assert_eq!(coerce(&Column::String(vec![None]), 0), Coerced::Null);
        assert_eq!(
            coerce(&Column::Timestamp(vec![Some(1)]), 0),
            Coerced::Unsupported(FieldType::Timestamp)
        );
        // Nulls never reach the unsupported check
        assert_eq!(coerce(&Column::Bytes(vec![None]), 0), Coerced::Null);
    }

    #[test]
    fn test_identifier_lexical_form() {
        assert_eq!(identifier(&Column::Int64(vec![Some(10)]), 0), Some("10".into()));
        assert_eq!(
            identifier(&Column::String(vec![Some("P-9".into())]), 0),
            Some("P-9".into())
        );
        assert_eq!(identifier(&Column::Int64(vec![None]), 0), None);
        assert_eq!(identifier(&Column::Boolean(vec![Some(true)]), 0), None);
    }

    #[test]
    fn test_float32_keeps_its_shortest_form() {
        let Coerced::Literal(term) = coerce(&Column::Float32(vec![Some(0.1)]), 0) else {
            panic!("expected a literal");
        };
        let (value, _) = term.as_literal().unwrap();
        assert_eq!(value.lexical(), "0.1");
        assert_eq!(term, Term::float(0.1));
    }
}
