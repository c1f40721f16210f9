use crate::error::{CliError, CliResult};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where the dataset document comes from.
pub enum InputSource {
    /// From a file on disk.
    File(PathBuf),
    /// From stdin (piped), selected with `-`.
    Stdin,
}

/// `-` selects stdin, which must not be a terminal.
pub fn resolve_input(path: &Path) -> CliResult<InputSource> {
    if path.as_os_str() != "-" {
        return Ok(InputSource::File(path.to_path_buf()));
    }
    if io::stdin().is_terminal() {
        return Err(CliError::Usage(format!(
            "'--input -' reads from stdin, but stdin is a terminal\n  {} pipe a dataset, e.g. 'cat data.json | sdm map -i -'",
            colored::Colorize::bold(colored::Colorize::cyan("help:"))
        )));
    }
    Ok(InputSource::Stdin)
}

/// Read content from the resolved input source.
pub fn read_input(source: &InputSource) -> CliResult<String> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display()))),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
