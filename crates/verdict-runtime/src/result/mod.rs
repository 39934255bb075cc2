//! Execution result types

mod result;

pub use result::{Classification, Enrichment, ExecutionResult};
