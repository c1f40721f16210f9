//! Mapping driver
//!
//! Runs the table mappers in plan order, each into its own [`TableFacts`],
//! concatenates their facts, and finishes with the consistency pass.

use sdm_graph_ir::Graph;
use sdm_schema::Schema;
use sdm_tabular::ColumnBatch;
use sdm_vocab::{prefixes, rdf, xsd};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::config::{MappingConfig, Strictness};
use crate::consistency::{self, ConsistencyReport, Ledger};
use crate::dataset::Dataset;
use crate::emit::TableFacts;
use crate::error::{MappingError, MappingResult};
use crate::mappers::{self, MapperFn, PLAN};
use crate::table::Table;

/// Row and fact counts for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub table: Table,
    pub rows: usize,
    pub facts: usize,
}

/// Result of a successful run
#[derive(Debug)]
pub struct MappingOutput {
    /// Instance facts in plan order, rows in input order within each table
    pub graph: Graph,
    /// Empty unless strictness is `warn`
    pub report: ConsistencyReport,
    /// One entry per table, in plan order
    pub stats: Vec<TableStats>,
}

impl MappingOutput {
    /// Total number of facts
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Maps a [`Dataset`] to instance facts using one schema's vocabulary
#[derive(Debug, Clone)]
pub struct MappingEngine {
    schema: Schema,
    config: MappingConfig,
}

impl MappingEngine {
    /// Identifiers are minted in the schema's namespace.
    pub fn new(schema: Schema, config: MappingConfig) -> Self {
        if schema.namespace() != config.namespace {
            debug!(
                schema = schema.namespace(),
                config = %config.namespace,
                "schema namespace overrides configured namespace"
            );
        }
        Self { schema, config }
    }

    /// Engine over the academic vocabulary in `config.namespace`
    pub fn from_config(config: MappingConfig) -> MappingResult<Self> {
        let schema = Schema::academic(&config.namespace)?;
        Ok(Self { schema, config })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    fn map_with(
        &self,
        table: Table,
        mapper: MapperFn,
        batch: &ColumnBatch,
    ) -> MappingResult<(Graph, Ledger)> {
        let mut facts = TableFacts::new(&self.schema, table);
        mapper(batch, &mut facts)?;
        debug!(
            table = %table,
            rows = batch.num_rows,
            facts = facts.len(),
            "mapped table"
        );
        Ok(facts.into_parts())
    }

    /// Map a single table without the consistency pass
    pub fn map_table(&self, table: Table, batch: &ColumnBatch) -> MappingResult<Graph> {
        let (graph, _) = self.map_with(table, mappers::mapper(table), batch)?;
        Ok(graph)
    }

    /// Map every table in plan order, then check cross-table consistency.
    ///
    /// With [`Strictness::Strict`] any referential violation fails the run
    /// with [`MappingError::Referential`]. With [`Strictness::Warn`] each
    /// violation is logged and returned in the output report.
    pub fn run(&self, dataset: &Dataset) -> MappingResult<MappingOutput> {
        let span = info_span!("mapping_run", strictness = %self.config.strictness);
        let _guard = span.enter();

        let mut graph = Graph::new();
        graph.add_prefix(prefixes::SDM, self.schema.namespace());
        graph.add_prefix(prefixes::RDF, rdf::NS);
        graph.add_prefix(prefixes::XSD, xsd::NS);

        let mut ledger = Ledger::default();
        let mut stats = Vec::with_capacity(PLAN.len());

        for &(table, mapper) in PLAN.iter() {
            let Some(batch) = dataset.get(table) else {
                debug!(table = %table, "no rows");
                stats.push(TableStats {
                    table,
                    rows: 0,
                    facts: 0,
                });
                continue;
            };
            let (facts, table_ledger) = self.map_with(table, mapper, batch)?;
            stats.push(TableStats {
                table,
                rows: batch.num_rows,
                facts: facts.len(),
            });
            graph.append(facts);
            ledger.append(table_ledger);
        }

        let report = consistency::check(&self.schema, &ledger);
        info!(
            facts = graph.len(),
            violations = report.len(),
            "mapping complete"
        );

        if !report.is_empty() {
            match self.config.strictness {
                Strictness::Strict => return Err(MappingError::Referential(Box::new(report))),
                Strictness::Warn => {
                    for violation in report.violations() {
                        warn!(%violation, "referential violation");
                    }
                }
            }
        }

        Ok(MappingOutput {
            graph,
            report,
            stats,
        })
    }
}
