use sdm_tabular::ColumnBatch;
use sdm_vocab::sdm::{class, prop};

use super::each_row;
use crate::emit::TableFacts;
use crate::error::MappingResult;
use crate::resource::EntityKind;
use crate::table::Table;

pub(super) fn map(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::Area, batch, facts, |row, facts| {
        let area = facts.resource(EntityKind::Area, &row.id("area")?);
        facts.declare(&area, class::AREA)?;
        facts.data(
            &area,
            prop::HAS_TOPIC_NAME,
            Some(row.required_literal("topic_name")?),
        )
    })
}
