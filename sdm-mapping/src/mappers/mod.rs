//! Table mappers
//!
//! One function per table. Each validates its batch against its [`TableSpec`](crate::TableSpec),
//! then walks rows in input order emitting facts into the table's own
//! [`TableFacts`].

mod area;
mod author;
mod membership;
mod paper;
mod publication;
mod review;
mod venue;

use sdm_tabular::ColumnBatch;

use crate::emit::TableFacts;
use crate::error::MappingResult;
use crate::row::RowView;
use crate::table::Table;

/// Signature shared by every table mapper
pub(crate) type MapperFn = for<'s> fn(&ColumnBatch, &mut TableFacts<'s>) -> MappingResult<()>;

/// Mapping plan: every table paired with its mapper, in execution order
pub(crate) static PLAN: [(Table, MapperFn); 10] = [
    (Table::Area, area::map),
    (Table::Author, author::map),
    (Table::Conference, venue::map_conference),
    (Table::Journal, venue::map_journal),
    (Table::Volume, publication::map_volume),
    (Table::Proceeding, publication::map_proceeding),
    (Table::Paper, paper::map),
    (Table::Review, review::map),
    (Table::HasAuthor, membership::map_has_author),
    (Table::HasTopic, membership::map_has_topic),
];

pub(crate) fn mapper(table: Table) -> MapperFn {
    match table {
        Table::Area => area::map,
        Table::Author => author::map,
        Table::Conference => venue::map_conference,
        Table::Journal => venue::map_journal,
        Table::Volume => publication::map_volume,
        Table::Proceeding => publication::map_proceeding,
        Table::Paper => paper::map,
        Table::Review => review::map,
        Table::HasAuthor => membership::map_has_author,
        Table::HasTopic => membership::map_has_topic,
    }
}

/// Validate `batch` and run `emit` once per row, in input order
fn each_row<'s, F>(
    table: Table,
    batch: &ColumnBatch,
    facts: &mut TableFacts<'s>,
    mut emit: F,
) -> MappingResult<()>
where
    F: FnMut(&RowView<'_>, &mut TableFacts<'s>) -> MappingResult<()>,
{
    table.spec().validate(batch)?;
    for i in batch.row_indices() {
        facts.set_row(i);
        let row = RowView::new(table, batch, i);
        emit(&row, facts)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_covers_every_table_in_order() {
        let tables: Vec<Table> = PLAN.iter().map(|(t, _)| *t).collect();
        assert_eq!(tables, Table::ALL.to_vec());
    }
}
