use crate::error::{CliError, CliResult};
use comfy_table::{ContentArrangement, Table};
use sdm_graph_format::{write_graph_with, Format, OrderPolicy};
use sdm_graph_ir::Graph;
use sdm_mapping::{ConsistencyReport, TableStats};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Write `graph` to `out`, or stdout when no path is given.
pub fn write_output(
    graph: &Graph,
    format: Format,
    order: OrderPolicy,
    out: Option<&Path>,
) -> CliResult<()> {
    match out {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::Input(format!("failed to create {}: {e}", path.display()))
            })?;
            write_graph_with(graph, format, order, BufWriter::new(file))?;
        }
        None => write_graph_with(graph, format, order, io::stdout().lock())?,
    }
    Ok(())
}

/// Per-table row and fact counts.
pub fn stats_table(stats: &[TableStats]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["TABLE", "ROWS", "FACTS"]);

    let (mut rows, mut facts) = (0, 0);
    for s in stats {
        rows += s.rows;
        facts += s.facts;
        table.add_row(vec![
            s.table.to_string(),
            s.rows.to_string(),
            s.facts.to_string(),
        ]);
    }
    table.add_row(vec!["total".to_string(), rows.to_string(), facts.to_string()]);
    table.to_string()
}

/// Violation counts by kind, followed by one line per violation.
pub fn report_summary(report: &ConsistencyReport) -> String {
    if report.is_empty() {
        return "No referential violations.".to_string();
    }
    let counts = report.counts();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["VIOLATION", "COUNT"]);
    for (label, n) in [
        ("undeclared", counts.undeclared),
        ("duplicate", counts.duplicate),
        ("domain mismatch", counts.domain),
        ("range mismatch", counts.range),
    ] {
        table.add_row(vec![label.to_string(), n.to_string()]);
    }

    let mut out = table.to_string();
    for violation in report.violations() {
        out.push_str(&format!("\n  {violation}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_mapping::Table as SdmTable;

    #[test]
    fn stats_table_has_total_row() {
        let stats = [
            TableStats {
                table: SdmTable::Area,
                rows: 2,
                facts: 4,
            },
            TableStats {
                table: SdmTable::Author,
                rows: 1,
                facts: 3,
            },
        ];
        let rendered = stats_table(&stats);
        assert!(rendered.contains("area"));
        assert!(rendered.contains("total"));
        assert!(rendered.contains('7'));
    }

    #[test]
    fn empty_report_summary() {
        assert_eq!(
            report_summary(&ConsistencyReport::default()),
            "No referential violations."
        );
    }
}
