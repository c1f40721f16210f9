//! Paper acceptance derived from review decisions
//!
//! A paper is accepted when strictly more than half of the reviews of its
//! submission approve it. Loaders use this to set `paper.decision`: the review
//! majority replaces whatever the paper row says, and the row's own decision
//! only stands for submissions without counted reviews. A paper with neither
//! a decision nor reviews keeps a null decision and is rejected by the paper
//! mapper.

use std::collections::BTreeMap;
use std::sync::Arc;

use sdm_tabular::{BatchSchema, Column, ColumnBatch, FieldInfo, FieldType};
use tracing::debug;

use crate::coerce::LiteralKind;
use crate::error::{MappingError, MappingResult};
use crate::row::RowView;
use crate::table::Table;

const DECISION: &str = "decision";
const SUBMISSION: &str = "submission";

/// Majority decision per submission key.
///
/// Reviews with a null decision are not counted. Submissions whose reviews
/// all have null decisions are absent from the result.
pub fn aggregate_decisions(reviews: &ColumnBatch) -> MappingResult<BTreeMap<String, bool>> {
    let mut tally: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    let Some(decisions) = reviews.column_by_name(DECISION) else {
        return Ok(BTreeMap::new());
    };
    if !matches!(decisions, Column::Boolean(_)) {
        return Err(MappingError::ColumnType {
            table: Table::Review,
            column: DECISION,
            expected: LiteralKind::Boolean,
            actual: decisions.field_type(),
        });
    }

    for row in reviews.row_indices() {
        let Some(approve) = decisions.get_bool(row) else {
            continue;
        };
        let submission = RowView::new(Table::Review, reviews, row).id(SUBMISSION)?;
        let (yes, total) = tally.entry(submission).or_default();
        *yes += usize::from(approve);
        *total += 1;
    }

    Ok(tally
        .into_iter()
        .map(|(submission, (yes, total))| (submission, yes * 2 > total))
        .collect())
}

/// Set paper decisions from the review majority in `decisions`.
///
/// Rows whose submission has no entry keep their own decision. Adds a
/// `decision` column when the batch has none.
pub fn apply_decisions(
    papers: &ColumnBatch,
    decisions: &BTreeMap<String, bool>,
) -> MappingResult<ColumnBatch> {
    let existing = match papers.column_by_name(DECISION) {
        Some(Column::Boolean(values)) => Some(values),
        Some(other) => {
            return Err(MappingError::ColumnType {
                table: Table::Paper,
                column: DECISION,
                expected: LiteralKind::Boolean,
                actual: other.field_type(),
            })
        }
        None => None,
    };

    let (mut derived, mut overridden) = (0usize, 0usize);
    let mut values = Vec::with_capacity(papers.num_rows);
    for row in papers.row_indices() {
        let current = existing.and_then(|v| v[row]);
        let submission = RowView::new(Table::Paper, papers, row).opt_id(SUBMISSION)?;
        let majority = submission
            .as_ref()
            .and_then(|s| decisions.get(s).copied());
        let value = match (current, majority) {
            (_, None) => current,
            (Some(own), Some(m)) if own != m => {
                debug!(
                    row,
                    submission = submission.as_deref().unwrap_or_default(),
                    own,
                    majority = m,
                    "paper decision overridden by review majority"
                );
                overridden += 1;
                Some(m)
            }
            (_, Some(m)) => {
                derived += 1;
                Some(m)
            }
        };
        values.push(value);
    }
    debug!(
        derived,
        overridden,
        rows = papers.num_rows,
        "derived paper decisions from reviews"
    );

    let column = Column::Boolean(values);
    let mut fields = papers.schema.fields.clone();
    let mut columns = papers.columns.clone();
    match papers.schema.index_by_name(DECISION) {
        Some(i) => columns[i] = column,
        None => {
            fields.push(FieldInfo::new(DECISION, FieldType::Boolean, true));
            columns.push(column);
        }
    }
    Ok(ColumnBatch::new(Arc::new(BatchSchema::new(fields)), columns)?)
}
