//! Response builder
//!
//! Turns the executor's [`ExecutionResult`] into the response shape the
//! caller asked for. [`FromExecution`] is the seam: any type implementing it
//! can be requested from the decision service.

use crate::result::ExecutionResult;
use crate::store::FactStore;
use serde::{Deserialize, Serialize};
use verdict_core::{Business, Reason};

/// Response types the decision service can produce
pub trait FromExecution: Sized {
    /// Build the response from the evaluated facts and the execution outcome
    fn from_execution(store: &FactStore<'_>, result: ExecutionResult) -> Self;
}

/// Supplier decision response.
///
/// Fields are private; a response is read-only once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResponse {
    business: Option<Business>,
    reasons: Vec<Reason>,
    response_code: Option<String>,
}

impl RuleResponse {
    /// Snapshot of the primary business after enrichment
    pub fn business(&self) -> Option<&Business> {
        self.business.as_ref()
    }

    /// Reasons in firing order
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Classification code; `None` when no filter or validation rule fired
    pub fn response_code(&self) -> Option<&str> {
        self.response_code.as_deref()
    }

    pub fn has_reason(&self, message: &str) -> bool {
        self.reasons.iter().any(|reason| reason.message == message)
    }
}

impl FromExecution for RuleResponse {
    fn from_execution(store: &FactStore<'_>, result: ExecutionResult) -> Self {
        let response_code = result.classification.map(|c| c.code);
        Self {
            business: store.primary_business().cloned(),
            reasons: result.reasons,
            response_code,
        }
    }
}

/// The raw execution outcome, for callers that want every detail
impl FromExecution for ExecutionResult {
    fn from_execution(_store: &FactStore<'_>, result: ExecutionResult) -> Self {
        result
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn build<R: FromExecution>(store: &FactStore<'_>, result: ExecutionResult) -> R {
        R::from_execution(store, result)
    }
}
