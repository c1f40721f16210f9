use sdm_tabular::ColumnBatch;
use sdm_vocab::sdm::{class, prop};

use super::each_row;
use crate::emit::TableFacts;
use crate::error::MappingResult;
use crate::resource::EntityKind;
use crate::table::Table;

/// Optional author columns and the data property each feeds
const DETAILS: [(&str, &str); 6] = [
    ("birthdate", prop::HAS_BIRTH_DATE),
    ("sex", prop::HAS_SEX),
    ("origin_country", prop::ORIGIN_COUNTRY),
    ("url", prop::URL),
    ("h_index", prop::HAS_H_INDEX),
    ("institution", prop::AFFILIATED_WITH_INSTITUTION),
];

pub(super) fn map(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::Author, batch, facts, |row, facts| {
        let author = facts.resource(EntityKind::Author, &row.id("author")?);
        facts.declare(&author, class::AUTHOR)?;
        facts.data(
            &author,
            prop::HAS_PERSON_NAME,
            Some(row.required_literal("name")?),
        )?;
        for (column, property) in DETAILS {
            facts.data(&author, property, row.literal(column)?)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_graph_ir::Term;
    use sdm_schema::Schema;
    use sdm_tabular::Column;
    use sdm_vocab::sdm::DEFAULT_NS;

    #[test]
    fn test_nulls_skipped_and_types_follow_columns() {
        let schema = Schema::academic(DEFAULT_NS).unwrap();
        let batch = ColumnBatch::from_columns(vec![
            ("author", Column::Int64(vec![Some(3)])),
            ("name", Column::String(vec![Some("Ada Lovelace".into())])),
            ("h_index", Column::Float64(vec![Some(12.0)])),
            ("url", Column::String(vec![None])),
        ])
        .unwrap();
        let mut facts = TableFacts::new(&schema, Table::Author);
        map(&batch, &mut facts).unwrap();

        let objects: Vec<&Term> = facts.graph().iter().map(|t| &t.o).collect();
        assert_eq!(objects.len(), 3);
        assert!(objects.contains(&&Term::float(12.0)));
    }
}
