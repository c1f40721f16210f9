use clap::{Parser, Subcommand, ValueEnum};
use sdm_graph_format::Format;
use sdm_mapping::Strictness;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sdm",
    about = "Academic publishing knowledge-graph mapper",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file (defaults to ./sdm.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the schema (class and property declarations)
    Schema {
        /// Output file (stdout if omitted)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Output syntax
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Namespace for schema terms
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Map a dataset to instance facts
    Map {
        /// Dataset JSON file, or '-' for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Output syntax
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// How to treat referential violations
        #[arg(long, value_enum)]
        strictness: Option<StrictnessArg>,

        /// Namespace for schema terms and resource identifiers
        #[arg(long)]
        namespace: Option<String>,

        /// Sort and deduplicate triples before writing
        #[arg(long)]
        canonical: bool,
    },

    /// Map a dataset and report violations without writing a graph
    Check {
        /// Dataset JSON file, or '-' for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Namespace for schema terms and resource identifiers
        #[arg(long)]
        namespace: Option<String>,
    },
}

/// Output syntax accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    #[value(alias = "nt")]
    Ntriples,
    #[value(alias = "ttl")]
    Turtle,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ntriples => Format::NTriples,
            FormatArg::Turtle => Format::Turtle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrictnessArg {
    Strict,
    Warn,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Strict => Strictness::Strict,
            StrictnessArg::Warn => Strictness::Warn,
        }
    }
}
