//! Relational tables and their declared column schemas
//!
//! Each table has a static [`TableSpec`]: its key column and every column the
//! mappers read, with the literal kind expected and whether the column must be
//! present. Batches are checked against their `TableSpec` before any row is mapped.

use std::fmt;
use std::str::FromStr;

use sdm_tabular::ColumnBatch;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce::LiteralKind::{Boolean, Date, Float, Identifier, Integer, String as Str};
use crate::coerce::{literal_kind, LiteralKind};
use crate::error::{MappingError, MappingResult};

/// The relational tables the engine understands, in mapping plan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Area,
    Author,
    Conference,
    Journal,
    Volume,
    Proceeding,
    Paper,
    Review,
    HasAuthor,
    HasTopic,
}

impl Table {
    /// Every table in mapping plan order
    pub const ALL: [Table; 10] = [
        Table::Area,
        Table::Author,
        Table::Conference,
        Table::Journal,
        Table::Volume,
        Table::Proceeding,
        Table::Paper,
        Table::Review,
        Table::HasAuthor,
        Table::HasTopic,
    ];

    /// Table name as used in input documents
    pub fn name(self) -> &'static str {
        match self {
            Table::Area => "area",
            Table::Author => "author",
            Table::Conference => "conference",
            Table::Journal => "journal",
            Table::Volume => "volume",
            Table::Proceeding => "proceeding",
            Table::Paper => "paper",
            Table::Review => "review",
            Table::HasAuthor => "has_author",
            Table::HasTopic => "has_topic",
        }
    }

    /// Declared column schema
    pub fn spec(self) -> &'static TableSpec {
        match self {
            Table::Area => &AREA,
            Table::Author => &AUTHOR,
            Table::Conference => &CONFERENCE,
            Table::Journal => &JOURNAL,
            Table::Volume => &VOLUME,
            Table::Proceeding => &PROCEEDING,
            Table::Paper => &PAPER,
            Table::Review => &REVIEW,
            Table::HasAuthor => &HAS_AUTHOR,
            Table::HasTopic => &HAS_TOPIC,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown table '{s}'"))
    }
}

/// One declared column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: LiteralKind,
    /// Required columns must be present and non-null on every row
    pub required: bool,
}

const fn req(name: &'static str, kind: LiteralKind) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        required: true,
    }
}

const fn opt(name: &'static str, kind: LiteralKind) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        required: false,
    }
}

/// Declared schema of one table
#[derive(Debug)]
pub struct TableSpec {
    pub table: Table,
    /// Column whose value identifies the row in error messages
    pub key: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl TableSpec {
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check a batch against the declared columns.
    ///
    /// Required columns must exist. Every declared column that exists must
    /// have a type that coerces to the declared kind (integer keys may be
    /// integer or string). Undeclared extra columns are ignored.
    pub fn validate(&self, batch: &ColumnBatch) -> MappingResult<()> {
        for spec in self.columns {
            let Some(field) = batch.schema.field_by_name(spec.name) else {
                if spec.required {
                    return Err(MappingError::MissingColumn {
                        table: self.table,
                        column: spec.name,
                    });
                }
                continue;
            };

            let actual = literal_kind(field.field_type).ok_or_else(|| MappingError::Coercion {
                table: self.table,
                column: spec.name.to_string(),
                field_type: field.field_type,
            })?;

            if !spec.kind.accepts(actual) {
                return Err(MappingError::ColumnType {
                    table: self.table,
                    column: spec.name,
                    expected: spec.kind,
                    actual: field.field_type,
                });
            }
        }

        for name in batch.schema.names() {
            if self.column(name).is_none() {
                debug!(table = %self.table, column = name, "ignoring undeclared column");
            }
        }

        Ok(())
    }
}

static AREA: TableSpec = TableSpec {
    table: Table::Area,
    key: "area",
    columns: &[req("area", Identifier), req("topic_name", Str)],
};

static AUTHOR: TableSpec = TableSpec {
    table: Table::Author,
    key: "author",
    columns: &[
        req("author", Identifier),
        req("name", Str),
        opt("birthdate", Date),
        opt("sex", Str),
        opt("origin_country", Str),
        opt("url", Str),
        opt("h_index", Float),
        opt("institution", Str),
    ],
};

static CONFERENCE: TableSpec = TableSpec {
    table: Table::Conference,
    key: "conference",
    columns: &[
        req("conference", Identifier),
        req("title", Str),
        req("organizer", Identifier),
        req("type", Str),
        opt("location", Str),
        opt("start_date", Date),
        opt("end_date", Date),
        opt("year", Integer),
        opt("conference_series", Str),
    ],
};

static JOURNAL: TableSpec = TableSpec {
    table: Table::Journal,
    key: "journal",
    columns: &[
        req("journal", Identifier),
        req("title", Str),
        req("organizer", Identifier),
    ],
};

static VOLUME: TableSpec = TableSpec {
    table: Table::Volume,
    key: "volume",
    columns: &[
        req("volume", Identifier),
        req("journal", Identifier),
        opt("issn", Str),
        opt("published_date", Date),
        opt("publisher", Str),
    ],
};

static PROCEEDING: TableSpec = TableSpec {
    table: Table::Proceeding,
    key: "proceeding",
    columns: &[
        req("proceeding", Identifier),
        req("conference", Identifier),
        opt("issn", Str),
        opt("published_date", Date),
        opt("publisher", Str),
    ],
};

static PAPER: TableSpec = TableSpec {
    table: Table::Paper,
    key: "paper",
    columns: &[
        req("paper", Identifier),
        req("submission", Identifier),
        req("type", Str),
        req("venue_type", Str),
        req("venue", Identifier),
        req("organizer", Identifier),
        req("decision", Boolean),
        opt("title", Str),
        opt("abstract", Str),
        opt("word_count", Integer),
        opt("submitted_date", Date),
        // Required when decision is true; checked per row
        opt("doi", Str),
        opt("publication", Identifier),
    ],
};

static REVIEW: TableSpec = TableSpec {
    table: Table::Review,
    key: "review",
    columns: &[
        req("review", Identifier),
        req("submission", Identifier),
        req("reviewer", Identifier),
        opt("decision", Boolean),
        opt("content", Str),
        opt("review_date", Date),
    ],
};

static HAS_AUTHOR: TableSpec = TableSpec {
    table: Table::HasAuthor,
    key: "paper",
    columns: &[req("paper", Identifier), req("author", Identifier)],
};

static HAS_TOPIC: TableSpec = TableSpec {
    table: Table::HasTopic,
    key: "id",
    columns: &[
        req("id", Identifier),
        req("target", Str),
        req("area", Identifier),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_tabular::Column;

    #[test]
    fn test_table_names_round_trip() {
        for table in Table::ALL {
            assert_eq!(table.name().parse::<Table>().unwrap(), table);
            assert_eq!(table.spec().table, table);
        }
        assert!("papers".parse::<Table>().is_err());
    }

    #[test]
    fn test_key_is_declared() {
        for table in Table::ALL {
            let spec = table.spec();
            let key = spec.column(spec.key).unwrap();
            assert!(key.required, "{table} key must be required");
        }
    }

    #[test]
    fn test_validate_missing_required_column() {
        let batch = ColumnBatch::from_columns(vec![(
            "area",
            Column::String(vec![Some("area-0".into())]),
        )])
        .unwrap();
        let err = Table::Area.spec().validate(&batch).unwrap_err();
        assert!(matches!(
            err,
            MappingError::MissingColumn {
                column: "topic_name",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_optional_column_may_be_absent() {
        let batch = ColumnBatch::from_columns(vec![
            ("journal", Column::String(vec![Some("J1".into())])),
            ("title", Column::String(vec![Some("Data Letters".into())])),
            ("organizer", Column::Int64(vec![Some(4)])),
        ])
        .unwrap();
        Table::Journal.spec().validate(&batch).unwrap();
    }

    #[test]
    fn test_validate_wrong_kind() {
        let batch = ColumnBatch::from_columns(vec![
            ("area", Column::String(vec![Some("area-0".into())])),
            ("topic_name", Column::Int64(vec![Some(7)])),
        ])
        .unwrap();
        let err = Table::Area.spec().validate(&batch).unwrap_err();
        assert!(matches!(err, MappingError::ColumnType { column: "topic_name", .. }));
    }

    #[test]
    fn test_validate_unsupported_type_is_coercion_error() {
        let batch = ColumnBatch::from_columns(vec![
            ("review", Column::String(vec![Some("10-3".into())])),
            ("submission", Column::String(vec![Some("sub-10".into())])),
            ("reviewer", Column::Int64(vec![Some(3)])),
            ("review_date", Column::Timestamp(vec![Some(0)])),
        ])
        .unwrap();
        let err = Table::Review.spec().validate(&batch).unwrap_err();
        assert!(matches!(err, MappingError::Coercion { ref column, .. } if column == "review_date"));
    }
}
