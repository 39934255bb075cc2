//! Configuration types for DecisionService

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service configuration
///
/// ```yaml
/// audit_log_name: audit
/// enable_metrics: true
/// validate_rule_sets: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Audit log name; audit events are emitted only when set
    pub audit_log_name: Option<String>,

    /// Enable metrics collection
    pub enable_metrics: bool,

    /// Validate rule-sets when the service is built
    pub validate_rule_sets: bool,
}

impl ServiceConfig {
    /// Create a new service configuration
    pub fn new() -> Self {
        Self {
            audit_log_name: None,
            enable_metrics: true,
            validate_rule_sets: true,
        }
    }

    /// Set the audit log name
    pub fn with_audit_log_name(mut self, name: impl Into<String>) -> Self {
        self.audit_log_name = Some(name.into());
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    /// Enable build-time rule-set validation
    pub fn validate_rule_sets(mut self, enable: bool) -> Self {
        self.validate_rule_sets = enable;
        self
    }

    /// Parse configuration from YAML; missing keys take their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        tracing::debug!("Loading service config: {}", path.display());
        Self::from_yaml_str(&content)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}
