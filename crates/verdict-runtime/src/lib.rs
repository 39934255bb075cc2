//! Verdict Runtime - Evaluation core for the Verdict decision service
//!
//! One evaluation runs through four stages:
//! - [`FactStore`]: borrows the caller's facts for the duration of the call
//! - [`RuleMatcher`]: computes the ordered activation set for a rule-set
//! - [`RuleExecutor`]: fires activations, mutating facts and collecting reasons
//! - [`ResponseBuilder`]: shapes the [`ExecutionResult`] into the caller's response type

pub mod error;
pub mod executor;
pub mod matcher;
pub mod observability;
pub mod response;
pub mod result;
pub mod store;

// Re-export main types
pub use error::{Result, RuntimeError};
pub use executor::RuleExecutor;
pub use matcher::{Activation, Bindings, RuleMatcher};
pub use observability::{Metrics, MetricsCollector};
pub use response::{FromExecution, ResponseBuilder, RuleResponse};
pub use result::{Classification, Enrichment, ExecutionResult};
pub use store::FactStore;
