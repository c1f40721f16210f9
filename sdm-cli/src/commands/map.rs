use crate::config::SdmConfig;
use crate::error::CliResult;
use crate::input::{read_input, resolve_input};
use crate::loader::parse_dataset;
use crate::output::write_output;
use colored::Colorize;
use sdm_graph_format::Format;
use sdm_mapping::{MappingEngine, Strictness};
use std::path::Path;

pub struct MapOpts<'a> {
    pub input: &'a Path,
    pub out: Option<&'a Path>,
    pub format: Option<Format>,
    pub strictness: Option<Strictness>,
    pub namespace: Option<String>,
    pub canonical: bool,
}

pub fn run(config: &SdmConfig, opts: MapOpts<'_>, quiet: bool) -> CliResult<()> {
    let source = resolve_input(opts.input)?;
    let dataset = parse_dataset(&read_input(&source)?)?;

    let engine = MappingEngine::from_config(config.mapping_config(opts.namespace, opts.strictness))?;
    let output = engine.run(&dataset)?;

    let format = config.format(opts.format);
    write_output(&output.graph, format, config.order(opts.canonical), opts.out)?;

    // Status goes to stderr so stdout stays a clean graph.
    if !quiet {
        if let Some(path) = opts.out {
            eprintln!(
                "{} {} facts to {} ({format})",
                "Wrote".green().bold(),
                output.len(),
                path.display()
            );
        }
        if !output.report.is_empty() {
            eprintln!(
                "{} {} referential violation(s); run 'sdm check' for details",
                "warning:".yellow().bold(),
                output.report.len()
            );
        }
    }
    Ok(())
}
