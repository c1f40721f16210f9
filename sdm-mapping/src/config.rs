//! Mapping run configuration

use std::fmt;
use std::str::FromStr;

use sdm_vocab::sdm::DEFAULT_NS;
use serde::{Deserialize, Serialize};

/// How the engine treats referential violations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Any violation fails the run
    #[default]
    Strict,
    /// Violations are logged and returned in the report
    Warn,
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strictness::Strict => "strict",
            Strictness::Warn => "warn",
        })
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Strictness::Strict),
            "warn" => Ok(Strictness::Warn),
            other => Err(format!("unknown strictness '{other}' (expected strict or warn)")),
        }
    }
}

/// Configuration for a [`MappingEngine`](crate::MappingEngine) run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Namespace for schema terms and resource identifiers
    pub namespace: String,
    pub strictness: Strictness,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NS.to_string(),
            strictness: Strictness::default(),
        }
    }
}

impl MappingConfig {
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}
