//! Endorsement configuration with TOML file support.

use crate::consult::{ConsultError, ConsultMode, HttpConsultor};
use crate::dependency::Dependency;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Host-facing configuration for the default endorser.
///
/// Can be loaded from a TOML file via [`EndorsementConfig::from_toml_file`]
/// or built programmatically (e.g. for tests). With no consultation
/// endpoint configured, the resulting plugins perform no I/O.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndorsementConfig {
    /// URL of an optional pre-endorsement consultation service.
    #[serde(default)]
    pub consult_endpoint: Option<String>,

    /// Per-request consultation timeout, in seconds.
    #[serde(default = "default_consult_timeout_secs")]
    pub consult_timeout_secs: u64,

    /// Whether consultation vetoes and failures block endorsement.
    #[serde(default)]
    pub consult_mode: ConsultMode,
}

fn default_consult_timeout_secs() -> u64 {
    5
}

impl Default for EndorsementConfig {
    fn default() -> Self {
        Self {
            consult_endpoint: None,
            consult_timeout_secs: default_consult_timeout_secs(),
            consult_mode: ConsultMode::default(),
        }
    }
}

impl EndorsementConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn consult_timeout(&self) -> Duration {
        Duration::from_secs(self.consult_timeout_secs)
    }

    /// Build the consultation dependency this config describes, if any.
    ///
    /// Returns `Ok(None)` when no endpoint is configured; the host then
    /// injects only the identity provider and the plugin signs without
    /// consulting anyone.
    pub fn consultation_dependency(&self) -> Result<Option<Dependency>, ConsultError> {
        match &self.consult_endpoint {
            None => Ok(None),
            Some(endpoint) => {
                let consultor = HttpConsultor::new(endpoint, self.consult_timeout())?;
                Ok(Some(Dependency::Consultor {
                    consultor: Arc::new(consultor),
                    mode: self.consult_mode,
                }))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed reading config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: EndorsementConfig = toml::from_str("").unwrap();
        assert!(cfg.consult_endpoint.is_none());
        assert_eq!(cfg.consult_timeout_secs, 5);
        assert_eq!(cfg.consult_mode, ConsultMode::Advisory);
    }

    #[test]
    fn full_toml_parses() {
        let cfg: EndorsementConfig = toml::from_str(
            r#"
            consult_endpoint = "http://localhost:9000/consult"
            consult_timeout_secs = 2
            consult_mode = "strict"
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.consult_endpoint.as_deref(),
            Some("http://localhost:9000/consult")
        );
        assert_eq!(cfg.consult_timeout(), Duration::from_secs(2));
        assert_eq!(cfg.consult_mode, ConsultMode::Strict);
    }

    #[test]
    fn garbage_toml_is_a_parse_error() {
        let err = toml::from_str::<EndorsementConfig>("consult_timeout_secs = \"soon\"");
        assert!(err.is_err());
    }

    #[test]
    fn no_endpoint_means_no_dependency() {
        let cfg = EndorsementConfig::default();
        assert!(cfg.consultation_dependency().unwrap().is_none());
    }

    #[test]
    fn endpoint_builds_consultor_dependency() {
        let cfg = EndorsementConfig {
            consult_endpoint: Some("http://localhost:9000".into()),
            ..Default::default()
        };
        let dep = cfg.consultation_dependency().unwrap().unwrap();
        assert_eq!(dep.kind(), "consultor");
    }
}
