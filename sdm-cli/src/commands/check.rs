use crate::config::SdmConfig;
use crate::error::{CliError, CliResult};
use crate::input::{read_input, resolve_input};
use crate::loader::parse_dataset;
use crate::output::{report_summary, stats_table};
use sdm_mapping::{MappingEngine, Strictness};
use std::path::Path;

/// Map in warn mode and report; fails when any violation is found.
pub fn run(config: &SdmConfig, input: &Path, namespace: Option<String>) -> CliResult<()> {
    let source = resolve_input(input)?;
    let dataset = parse_dataset(&read_input(&source)?)?;

    let engine =
        MappingEngine::from_config(config.mapping_config(namespace, Some(Strictness::Warn)))?;
    let output = engine.run(&dataset)?;

    println!("{}", stats_table(&output.stats));
    println!();
    println!("{}", report_summary(&output.report));

    if output.report.is_empty() {
        Ok(())
    } else {
        Err(CliError::Violations(output.report.len()))
    }
}
