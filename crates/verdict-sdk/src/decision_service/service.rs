//! Stateless decision service

use super::audit::AuditRecord;
use crate::builder::DecisionServiceBuilder;
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::registry::RuleRegistry;
use std::sync::Arc;
use std::time::Instant;
use verdict_core::Fact;
use verdict_runtime::{
    ExecutionResult, FactStore, FromExecution, Metrics, MetricsCollector, ResponseBuilder,
    RuleExecutor, RuleMatcher,
};

/// Runs registered rule-sets over caller-supplied facts.
///
/// The registry is frozen at build time, so a service can be shared across
/// threads behind an `Arc` and called concurrently. Each call owns its own
/// fact store, activation set and result; metrics are the only shared
/// mutable state and never feed back into a decision.
#[derive(Debug, Clone)]
pub struct DecisionService {
    registry: Arc<RuleRegistry>,
    config: ServiceConfig,
    metrics: Arc<MetricsCollector>,
}

impl DecisionService {
    pub(crate) fn new(registry: RuleRegistry, config: ServiceConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config,
            metrics: Arc::new(MetricsCollector::new()),
        }
    }

    /// Start building a service
    pub fn builder() -> DecisionServiceBuilder {
        DecisionServiceBuilder::new()
    }

    /// Generate an evaluation id: `eval_YYYYMMDDHHMMSS_xxxxxx`
    fn generate_evaluation_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);

        format!("eval_{}_{:06x}", datetime_str, random)
    }

    /// Run a rule-set over `facts` and shape the outcome as `R`.
    ///
    /// Enrichment rules write into `facts` in place. On error no fact has
    /// been modified.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut facts = vec![Fact::from(Business::new().with_name("test"))];
    /// let response: RuleResponse = service.run_rules(&mut facts, "VerifySupplier")?;
    /// ```
    pub fn run_rules<R: FromExecution>(
        &self,
        facts: &mut [Fact],
        rule_set_name: &str,
    ) -> Result<R> {
        let start = Instant::now();
        let evaluation_id = Self::generate_evaluation_id();
        let span = tracing::info_span!(
            "evaluation",
            id = %evaluation_id,
            rule_set = %rule_set_name
        );
        let _enter = span.enter();

        let outcome = self.evaluate(facts, rule_set_name, &evaluation_id);

        if self.config.enable_metrics {
            self.metrics.counter("evaluations_total").inc();
            self.metrics.record_execution_time("evaluation", start.elapsed());
        }

        match outcome {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::warn!("Evaluation {} failed: {}", evaluation_id, e);
                if self.config.enable_metrics {
                    self.metrics.record_error(e.kind());
                }
                Err(e)
            }
        }
    }

    fn evaluate<R: FromExecution>(
        &self,
        facts: &mut [Fact],
        rule_set_name: &str,
        evaluation_id: &str,
    ) -> Result<R> {
        let rule_set = self.registry.resolve(rule_set_name)?;

        let mut store = FactStore::load(facts);
        let activations = RuleMatcher::match_rules(rule_set, &store)?;
        let result = RuleExecutor::fire(&activations, &mut store)?;

        tracing::info!(
            "Evaluated '{}': {} fired, {} skipped, {} reason(s), response code {:?}",
            rule_set.name,
            result.fired_rules.len(),
            result.skipped_rules.len(),
            result.reasons.len(),
            result.response_code()
        );

        if self.config.enable_metrics {
            self.record_result(&result);
        }

        if let Some(audit_log) = &self.config.audit_log_name {
            let snapshot = store.iter().map(|(_, fact)| fact.clone()).collect();
            AuditRecord::new(evaluation_id, &rule_set.name, snapshot, &result).emit(audit_log);
        }

        Ok(ResponseBuilder::build(&store, result))
    }

    fn record_result(&self, result: &ExecutionResult) {
        self.metrics
            .counter("rules_fired_total")
            .add(result.fired_rules.len() as u64);
        self.metrics
            .counter("reasons_total")
            .add(result.reasons.len() as u64);
        if let Some(code) = result.response_code() {
            self.metrics.counter(&format!("response_{}", code.replace(' ', "_"))).inc();
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get the metrics collector
    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        &self.metrics
    }

    /// Registered rule-set names, sorted
    pub fn rule_set_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Whether a rule-set is registered under `name`
    pub fn has_rule_set(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}

impl From<RuleRegistry> for DecisionService {
    fn from(registry: RuleRegistry) -> Self {
        Self::new(registry, ServiceConfig::default())
    }
}
