use crate::config::SdmConfig;
use crate::error::CliResult;
use crate::output::write_output;
use sdm_graph_format::{Format, OrderPolicy};
use sdm_schema::Schema;
use std::path::Path;

pub fn run(
    config: &SdmConfig,
    out: Option<&Path>,
    format: Option<Format>,
    namespace: Option<String>,
) -> CliResult<()> {
    let mapping = config.mapping_config(namespace, None);
    let schema = Schema::academic(&mapping.namespace)?;
    let graph = schema.to_graph();
    tracing::info!(
        classes = schema.classes().len(),
        properties = schema.properties().len(),
        facts = graph.len(),
        "schema built"
    );
    write_output(&graph, config.format(format), OrderPolicy::Emission, out)
}
