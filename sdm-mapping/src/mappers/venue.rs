//! Conferences and journals
//!
//! Each venue row also tags its organizer with a role: conference organizers
//! are chairs, journal organizers are editors. The organizer itself is owned
//! by the author table.

use sdm_tabular::ColumnBatch;
use sdm_vocab::sdm::{class, prop};

use super::each_row;
use crate::emit::TableFacts;
use crate::error::MappingResult;
use crate::kinds::ConferenceKind;
use crate::resource::EntityKind;
use crate::row::RowView;
use crate::table::Table;

const CONFERENCE_DETAILS: [(&str, &str); 5] = [
    ("location", prop::HELD_IN),
    ("start_date", prop::START_DATE),
    ("end_date", prop::END_DATE),
    ("year", prop::HELD_IN_YEAR),
    ("conference_series", prop::CONFERENCE_SERIES),
];

fn organized_by(
    row: &RowView<'_>,
    facts: &mut TableFacts<'_>,
    venue: &str,
    role: &'static str,
) -> MappingResult<()> {
    let organizer = facts.resource(EntityKind::Author, &row.id("organizer")?);
    facts.tag(&organizer, role)?;
    facts.link(venue, prop::HAS_ORGANIZER, &organizer)
}

pub(super) fn map_conference(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::Conference, batch, facts, |row, facts| {
        let conference = facts.resource(EntityKind::Conference, &row.id("conference")?);
        let kind: ConferenceKind = row.kind("type")?;
        facts.declare(&conference, kind.class())?;
        facts.data(
            &conference,
            prop::HAS_VENUE_TITLE,
            Some(row.required_literal("title")?),
        )?;
        for (column, property) in CONFERENCE_DETAILS {
            facts.data(&conference, property, row.literal(column)?)?;
        }
        organized_by(row, facts, &conference, class::CHAIR)
    })
}

pub(super) fn map_journal(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::Journal, batch, facts, |row, facts| {
        let journal = facts.resource(EntityKind::Journal, &row.id("journal")?);
        facts.declare(&journal, class::JOURNAL)?;
        facts.data(
            &journal,
            prop::HAS_VENUE_TITLE,
            Some(row.required_literal("title")?),
        )?;
        organized_by(row, facts, &journal, class::EDITOR)
    })
}
