use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
#[allow(dead_code)]
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Error from the mapping engine.
    Mapping(sdm_mapping::MappingError),
    /// Error from the schema builder.
    Schema(sdm_schema::SchemaError),
    /// Serializer or output I/O failure.
    Format(sdm_graph_format::FormatError),
    /// Config file issues.
    Config(String),
    /// Bad file path, unreadable input, parse failure.
    Input(String),
    /// `check` found referential violations.
    Violations(usize),
    /// Argument / usage errors.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Mapping(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Schema(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Format(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Violations(n) => write!(
                f,
                "{} {n} referential violation(s)\n  {} run 'sdm map --strictness warn' to write the graph anyway",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<sdm_mapping::MappingError> for CliError {
    fn from(e: sdm_mapping::MappingError) -> Self {
        CliError::Mapping(e)
    }
}

impl From<sdm_schema::SchemaError> for CliError {
    fn from(e: sdm_schema::SchemaError) -> Self {
        CliError::Schema(e)
    }
}

impl From<sdm_graph_format::FormatError> for CliError {
    fn from(e: sdm_graph_format::FormatError) -> Self {
        CliError::Format(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON parse error: {e}"))
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
