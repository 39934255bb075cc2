//! Observability module
//!
//! In-process metrics for evaluations. Logging goes through `tracing`
//! directly at the call sites.

pub mod metrics;

pub use metrics::{Counter, Histogram, Metrics, MetricsCollector};
