//! Many-to-many tables: paper authorship and topic assignment

use sdm_tabular::ColumnBatch;
use sdm_vocab::sdm::prop;

use super::each_row;
use crate::emit::TableFacts;
use crate::error::MappingResult;
use crate::kinds::TopicTarget;
use crate::resource::EntityKind;
use crate::table::Table;

pub(super) fn map_has_author(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::HasAuthor, batch, facts, |row, facts| {
        let paper = facts.resource(EntityKind::Paper, &row.id("paper")?);
        let author = facts.resource(EntityKind::Author, &row.id("author")?);
        facts.link(&paper, prop::HAS_AUTHOR, &author)
    })
}

pub(super) fn map_has_topic(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::HasTopic, batch, facts, |row, facts| {
        let target: TopicTarget = row.kind("target")?;
        let subject = facts.resource(target.entity(), &row.id("id")?);
        let area = facts.resource(EntityKind::Area, &row.id("area")?);
        facts.link(&subject, target.predicate(), &area)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_graph_ir::{Term, Triple};
    use sdm_schema::Schema;
    use sdm_tabular::Column;
    use sdm_vocab::sdm::DEFAULT_NS;

    fn sdm(local: &str) -> Term {
        Term::iri(format!("{DEFAULT_NS}{local}"))
    }

    #[test]
    fn test_topics_pick_subproperty_by_target() {
        let schema = Schema::academic(DEFAULT_NS).unwrap();
        let batch = ColumnBatch::from_columns(vec![
            (
                "id",
                Column::String(vec![Some("10".into()), Some("J1".into()), Some("P-9".into())]),
            ),
            (
                "target",
                Column::String(vec![
                    Some("paper".into()),
                    Some("journal".into()),
                    Some("proceeding".into()),
                ]),
            ),
            ("area", Column::String(vec![Some("db".into()); 3])),
        ])
        .unwrap();
        let mut facts = TableFacts::new(&schema, Table::HasTopic);
        map_has_topic(&batch, &mut facts).unwrap();

        assert_eq!(
            facts.graph().triples(),
            &[
                Triple::new(sdm("Paper_10"), sdm("paperRelatedTo"), sdm("Area_db")),
                Triple::new(sdm("Journal_J1"), sdm("venueRelatedTo"), sdm("Area_db")),
                Triple::new(
                    sdm("Proceeding_P-9"),
                    sdm("publicationRelatedTo"),
                    sdm("Area_db")
                ),
            ]
        );
    }

    #[test]
    fn test_has_author() {
        let schema = Schema::academic(DEFAULT_NS).unwrap();
        let batch = ColumnBatch::from_columns(vec![
            ("paper", Column::Int64(vec![Some(10), Some(10)])),
            ("author", Column::Int64(vec![Some(3), Some(5)])),
        ])
        .unwrap();
        let mut facts = TableFacts::new(&schema, Table::HasAuthor);
        map_has_author(&batch, &mut facts).unwrap();
        assert_eq!(facts.len(), 2);
    }
}
