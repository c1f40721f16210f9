use sdm_tabular::ColumnBatch;
use sdm_vocab::sdm::{class, prop};

use super::each_row;
use crate::emit::TableFacts;
use crate::error::MappingResult;
use crate::resource::EntityKind;
use crate::table::Table;

const DETAILS: [(&str, &str); 3] = [
    ("decision", prop::DECISION),
    ("content", prop::CONTENT),
    ("review_date", prop::REVIEW_DATE),
];

pub(super) fn map(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::Review, batch, facts, |row, facts| {
        let review = facts.resource(EntityKind::Review, &row.id("review")?);
        facts.declare(&review, class::REVIEW)?;
        for (column, property) in DETAILS {
            facts.data(&review, property, row.literal(column)?)?;
        }
        let reviewer = facts.resource(EntityKind::Author, &row.id("reviewer")?);
        facts.link(&review, prop::HAS_REVIEWER, &reviewer)?;
        let submission = facts.resource(EntityKind::Submission, &row.id("submission")?);
        facts.link(&submission, prop::HAS_REVIEW, &review)
    })
}
