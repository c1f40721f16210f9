use crate::error::{CliError, CliResult};
use sdm_graph_format::{Format, OrderPolicy};
use sdm_mapping::{MappingConfig, Strictness};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "sdm.toml";

/// Contents of `sdm.toml`. Every field is optional; command-line flags win.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdmConfig {
    pub mapping: MappingSection,
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingSection {
    pub namespace: Option<String>,
    pub strictness: Option<Strictness>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<Format>,
    pub canonical: Option<bool>,
}

impl SdmConfig {
    /// Resolve the mapping config: flag > file > default.
    pub fn mapping_config(
        &self,
        namespace: Option<String>,
        strictness: Option<Strictness>,
    ) -> MappingConfig {
        let mut config = MappingConfig::default();
        if let Some(ns) = namespace.or_else(|| self.mapping.namespace.clone()) {
            config = config.with_namespace(ns);
        }
        if let Some(s) = strictness.or(self.mapping.strictness) {
            config = config.with_strictness(s);
        }
        config
    }

    pub fn format(&self, flag: Option<Format>) -> Format {
        flag.or(self.output.format).unwrap_or_default()
    }

    /// `--canonical` can only turn canonical output on.
    pub fn order(&self, canonical_flag: bool) -> OrderPolicy {
        if canonical_flag || self.output.canonical.unwrap_or(false) {
            OrderPolicy::Canonical
        } else {
            OrderPolicy::Emission
        }
    }
}

fn parse_config(path: &Path) -> CliResult<SdmConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&content)
        .map_err(|e| CliError::Config(format!("invalid config {}: {e}", path.display())))
}

/// Load config from an explicit `--config` path, else `./sdm.toml` if present.
///
/// An explicit path that does not exist is an error; a missing implicit file
/// yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> CliResult<SdmConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return parse_config(path);
    }

    let implicit = Path::new(CONFIG_FILE);
    if implicit.is_file() {
        tracing::debug!(path = CONFIG_FILE, "using config from working directory");
        parse_config(implicit)
    } else {
        Ok(SdmConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdm_vocab::sdm::DEFAULT_NS;

    #[test]
    fn empty_file_gives_defaults() {
        let config: SdmConfig = toml::from_str("").unwrap();
        let mapping = config.mapping_config(None, None);
        assert_eq!(mapping.namespace, DEFAULT_NS);
        assert_eq!(mapping.strictness, Strictness::Strict);
        assert_eq!(config.format(None), Format::NTriples);
        assert_eq!(config.order(false), OrderPolicy::Emission);
    }

    #[test]
    fn flags_override_file() {
        let config: SdmConfig = toml::from_str(
            r#"
            [mapping]
            namespace = "http://file.example/#"
            strictness = "warn"

            [output]
            format = "turtle"
            canonical = true
            "#,
        )
        .unwrap();

        let from_file = config.mapping_config(None, None);
        assert_eq!(from_file.namespace, "http://file.example/#");
        assert_eq!(from_file.strictness, Strictness::Warn);
        assert_eq!(config.format(None), Format::Turtle);
        assert_eq!(config.order(false), OrderPolicy::Canonical);

        let flagged = config.mapping_config(
            Some("http://flag.example/#".into()),
            Some(Strictness::Strict),
        );
        assert_eq!(flagged.namespace, "http://flag.example/#");
        assert_eq!(flagged.strictness, Strictness::Strict);
        assert_eq!(config.format(Some(Format::NTriples)), Format::NTriples);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<SdmConfig>("[mapping]\nnamespaces = \"x\"").is_err());
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/sdm.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
