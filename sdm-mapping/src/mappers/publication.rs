//! Journal volumes and conference proceedings

use sdm_tabular::ColumnBatch;
use sdm_vocab::sdm::{class, prop};

use super::each_row;
use crate::emit::TableFacts;
use crate::error::MappingResult;
use crate::resource::EntityKind;
use crate::table::Table;

const DETAILS: [(&str, &str); 3] = [
    ("issn", prop::PUBLICATION_ISSN),
    ("published_date", prop::PUBLISHED_DATE),
    ("publisher", prop::PUBLISHER),
];

struct Shape {
    table: Table,
    kind: EntityKind,
    class: &'static str,
    key: &'static str,
    venue_column: &'static str,
    venue: EntityKind,
}

fn map_publication(
    shape: &Shape,
    batch: &ColumnBatch,
    facts: &mut TableFacts<'_>,
) -> MappingResult<()> {
    each_row(shape.table, batch, facts, |row, facts| {
        let publication = facts.resource(shape.kind, &row.id(shape.key)?);
        facts.declare(&publication, shape.class)?;
        for (column, property) in DETAILS {
            facts.data(&publication, property, row.literal(column)?)?;
        }
        let venue = facts.resource(shape.venue, &row.id(shape.venue_column)?);
        facts.link(&venue, prop::HAS_PUBLISHED, &publication)
    })
}

pub(super) fn map_volume(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    let shape = Shape {
        table: Table::Volume,
        kind: EntityKind::Volume,
        class: class::VOLUME,
        key: "volume",
        venue_column: "journal",
        venue: EntityKind::Journal,
    };
    map_publication(&shape, batch, facts)
}

pub(super) fn map_proceeding(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    let shape = Shape {
        table: Table::Proceeding,
        kind: EntityKind::Proceeding,
        class: class::PROCEEDING,
        key: "proceeding",
        venue_column: "conference",
        venue: EntityKind::Conference,
    };
    map_publication(&shape, batch, facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sdm_graph_ir::{Term, Triple};
    use sdm_schema::Schema;
    use sdm_tabular::Column;
    use sdm_vocab::sdm::DEFAULT_NS;

    fn sdm(local: &str) -> Term {
        Term::iri(format!("{DEFAULT_NS}{local}"))
    }

    #[test]
    fn test_proceeding_published_by_conference() {
        let schema = Schema::academic(DEFAULT_NS).unwrap();
        let days = crate::coerce::epoch_days(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let batch = ColumnBatch::from_columns(vec![
            ("proceeding", Column::String(vec![Some("P-9".into())])),
            ("conference", Column::Int64(vec![Some(7)])),
            ("published_date", Column::Date(vec![Some(days)])),
            ("publisher", Column::String(vec![None])),
        ])
        .unwrap();
        let mut facts = TableFacts::new(&schema, Table::Proceeding);
        map_proceeding(&batch, &mut facts).unwrap();

        let triples = facts.graph().triples();
        assert_eq!(triples.len(), 3);
        assert!(triples.contains(&Triple::new(
            sdm("Conference_7"),
            sdm("hasPublished"),
            sdm("Proceeding_P-9")
        )));
        assert!(triples.contains(&Triple::new(
            sdm("Proceeding_P-9"),
            sdm("publishedDate"),
            Term::date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        )));
    }

    #[test]
    fn test_volume_requires_journal() {
        let schema = Schema::academic(DEFAULT_NS).unwrap();
        let batch = ColumnBatch::from_columns(vec![(
            "volume",
            Column::String(vec![Some("V1".into())]),
        )])
        .unwrap();
        let mut facts = TableFacts::new(&schema, Table::Volume);
        assert!(map_volume(&batch, &mut facts).is_err());
    }
}
