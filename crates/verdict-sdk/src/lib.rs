//! Verdict Decision Service SDK
//!
//! High-level API for building and running a stateless decision service.

pub mod builder;
pub mod config;
pub mod decision_service;
pub mod error;
pub mod registry;
pub mod rule_sets;
pub mod validator;

// Re-export main types
pub use builder::DecisionServiceBuilder;
pub use config::ServiceConfig;
pub use decision_service::{AuditRecord, DecisionService};
pub use error::{Result, SdkError};
pub use registry::RuleRegistry;
pub use validator::{Diagnostic, DiagnosticSeverity, RuleSetValidator, ValidationResult};

// Re-export commonly used types from dependencies
pub use verdict_core::{
    Action, Business, Condition, Fact, Reason, Record, Rule, RuleCategory, RuleSet, Value,
};
pub use verdict_runtime::{
    ExecutionResult, FromExecution, Metrics, MetricsCollector, RuleResponse, RuntimeError,
};
