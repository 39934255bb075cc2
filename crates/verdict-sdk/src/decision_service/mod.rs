//! DecisionService - Main API for running rule-sets over facts
//!
//! The module is organized into:
//! - `service`: the stateless `DecisionService` facade
//! - `audit`: audit events emitted for each evaluation

mod audit;
mod service;

pub use audit::{AuditRecord, AUDIT_TARGET};
pub use service::DecisionService;
