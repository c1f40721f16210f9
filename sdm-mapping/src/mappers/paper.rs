//! Papers and their submissions
//!
//! Publication facts are conditional on acceptance: only a paper whose
//! decision is true gets a DOI and a `publishedIn` link, and posters use
//! `posterPublishedIn` instead. When the decision is false the `doi` and
//! `publication` columns are not read at all.

use sdm_tabular::ColumnBatch;
use sdm_vocab::sdm::{class, prop};

use super::each_row;
use crate::emit::TableFacts;
use crate::error::{MappingError, MappingResult};
use crate::kinds::{PaperKind, VenueKind};
use crate::resource::EntityKind;
use crate::row::RowView;
use crate::table::Table;

const DETAILS: [(&str, &str); 3] = [
    ("title", prop::PAPER_TITLE),
    ("abstract", prop::PAPER_ABSTRACT),
    ("word_count", prop::PAPER_WORD_COUNT),
];

pub(super) fn map(batch: &ColumnBatch, facts: &mut TableFacts<'_>) -> MappingResult<()> {
    each_row(Table::Paper, batch, facts, |row, facts| {
        let paper = facts.resource(EntityKind::Paper, &row.id("paper")?);
        let kind: PaperKind = row.kind("type")?;
        let venue_kind: VenueKind = row.kind("venue_type")?;
        if kind == PaperKind::Poster && venue_kind == VenueKind::Journal {
            return Err(MappingError::InvalidRow {
                at: row.context(),
                message: "posters are only published in conference proceedings".to_string(),
            });
        }

        facts.declare(&paper, kind.class())?;
        for (column, property) in DETAILS {
            facts.data(&paper, property, row.literal(column)?)?;
        }

        let submission = facts.resource(EntityKind::Submission, &row.id("submission")?);
        facts.declare(&submission, class::SUBMISSION)?;
        facts.data(&submission, prop::SUBMISSION_DATE, row.literal("submitted_date")?)?;
        facts.link(&paper, prop::INCLUDED_IN, &submission)?;

        let organizer = facts.resource(EntityKind::Author, &row.id("organizer")?);
        facts.link(&submission, prop::ASSIGNED_BY, &organizer)?;
        let venue = facts.resource(venue_kind.entity(), &row.id("venue")?);
        facts.link(&submission, prop::SUBMITTED_TO, &venue)?;

        if row.flag("decision")? {
            publish(row, facts, &paper, kind, venue_kind)?;
        }
        Ok(())
    })
}

fn publish(
    row: &RowView<'_>,
    facts: &mut TableFacts<'_>,
    paper: &str,
    kind: PaperKind,
    venue_kind: VenueKind,
) -> MappingResult<()> {
    facts.data(paper, prop::PAPER_DOI, Some(row.required_literal("doi")?))?;
    let publication = facts.resource(venue_kind.publication(), &row.id("publication")?);
    let property = match kind {
        PaperKind::Poster => prop::POSTER_PUBLISHED_IN,
        PaperKind::Demo | PaperKind::Full | PaperKind::Short => prop::PUBLISHED_IN,
    };
    facts.link(paper, property, &publication)
}
