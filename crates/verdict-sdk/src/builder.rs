//! Builder pattern for DecisionService

use crate::config::ServiceConfig;
use crate::decision_service::DecisionService;
use crate::error::{Result, SdkError};
use crate::registry::RuleRegistry;
use crate::validator::RuleSetValidator;
use std::path::PathBuf;
use verdict_core::RuleSet;

/// Builder for DecisionService
///
/// # Example
///
/// ```rust,ignore
/// use verdict_sdk::DecisionServiceBuilder;
///
/// let service = DecisionServiceBuilder::new()
///     .audit_log_name("audit")
///     .register_rule_set(verify_supplier)
///     .build()
///     .await?;
///
/// // Settings from a YAML file; explicit builder calls still win
/// let service = DecisionServiceBuilder::new()
///     .with_config_file("verdict.yaml")
///     .enable_metrics(false)
///     .register_rule_set(verify_supplier)
///     .build()
///     .await?;
/// ```
#[derive(Debug, Default)]
pub struct DecisionServiceBuilder {
    config: Option<ServiceConfig>,
    config_file: Option<PathBuf>,
    audit_log_name: Option<String>,
    enable_metrics: Option<bool>,
    validate_rule_sets: Option<bool>,
    rule_sets: Vec<RuleSet>,
}

impl DecisionServiceBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audit log name audit events are emitted under
    pub fn audit_log_name(mut self, name: impl Into<String>) -> Self {
        self.audit_log_name = Some(name.into());
        self
    }

    /// Register a rule-set; its name is the key callers pass to `run_rules`
    pub fn register_rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_sets.push(rule_set);
        self
    }

    /// Register multiple rule-sets
    pub fn register_rule_sets(mut self, rule_sets: impl IntoIterator<Item = RuleSet>) -> Self {
        self.rule_sets.extend(rule_sets);
        self
    }

    /// Use a base configuration
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load the base configuration from a YAML file at build time
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = Some(enable);
        self
    }

    /// Validate rule-sets at build time
    pub fn validate_rule_sets(mut self, enable: bool) -> Self {
        self.validate_rule_sets = Some(enable);
        self
    }

    /// Build the decision service
    pub async fn build(self) -> Result<DecisionService> {
        let mut config = match (&self.config_file, self.config) {
            (Some(_), Some(_)) => {
                return Err(SdkError::Config(
                    "with_config and with_config_file are mutually exclusive".to_string(),
                ))
            }
            (Some(path), None) => ServiceConfig::from_file(path).await?,
            (None, Some(config)) => config,
            (None, None) => ServiceConfig::new(),
        };

        // Explicit builder settings override the base configuration
        if let Some(name) = self.audit_log_name {
            config.audit_log_name = Some(name);
        }
        if let Some(enable) = self.enable_metrics {
            config.enable_metrics = enable;
        }
        if let Some(enable) = self.validate_rule_sets {
            config.validate_rule_sets = enable;
        }

        let mut registry = RuleRegistry::new();
        for rule_set in self.rule_sets {
            if config.validate_rule_sets {
                Self::validate(&rule_set)?;
            }
            tracing::debug!(
                "Registering rule set '{}' ({} rules)",
                rule_set.name,
                rule_set.len()
            );
            registry.register(rule_set)?;
        }

        tracing::info!(
            "✓ Decision service ready: {} rule set(s) [{}]",
            registry.len(),
            registry.names().join(", ")
        );

        Ok(DecisionService::new(registry, config))
    }

    fn validate(rule_set: &RuleSet) -> Result<()> {
        let result = RuleSetValidator::validate(rule_set);

        for warning in &result.warnings {
            tracing::warn!("Rule set '{}': {}", rule_set.name, warning);
        }

        if !result.is_valid() {
            for error in &result.errors {
                tracing::warn!("Rule set '{}': {}", rule_set.name, error);
            }
            return Err(SdkError::InvalidRuleSet {
                rule_set: rule_set.name.clone(),
                errors: result.errors,
            });
        }

        Ok(())
    }
}
