//! Metrics collection and reporting

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Counter metric
#[derive(Debug)]
pub struct Counter {
    name: String,
    value: AtomicU64,
}

impl Counter {
    /// Create a new counter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Increment the counter
    pub fn inc(&self) {
        self.add(1);
    }

    /// Add a value to the counter
    pub fn add(&self, value: u64) {
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Reset the counter
    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Upper bounds (seconds) of the histogram buckets; observations above the
/// last bound only count towards the overflow bucket
pub const DEFAULT_BUCKETS: [f64; 11] = [
    0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0,
];

/// Running aggregates; memory does not grow with the number of observations
#[derive(Debug, Clone, PartialEq)]
struct Summary {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
    /// One slot per bound plus the overflow slot
    buckets: [u64; DEFAULT_BUCKETS.len() + 1],
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            buckets: [0; DEFAULT_BUCKETS.len() + 1],
        }
    }
}

/// Histogram metric for tracking distributions
#[derive(Debug)]
pub struct Histogram {
    name: String,
    summary: RwLock<Summary>,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: RwLock::new(Summary::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observe a value
    pub fn observe(&self, value: f64) {
        let slot = DEFAULT_BUCKETS
            .iter()
            .position(|bound| value <= *bound)
            .unwrap_or(DEFAULT_BUCKETS.len());

        let mut summary = self.summary.write().unwrap_or_else(PoisonError::into_inner);
        summary.count += 1;
        summary.sum += value;
        summary.min = summary.min.min(value);
        summary.max = summary.max.max(value);
        summary.buckets[slot] += 1;
    }

    /// Observe a duration in seconds
    pub fn observe_duration(&self, duration: Duration) {
        self.observe(duration.as_secs_f64());
    }

    fn read(&self) -> Summary {
        self.summary
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get count of observations
    pub fn count(&self) -> u64 {
        self.read().count
    }

    /// Get sum of all values
    pub fn sum(&self) -> f64 {
        self.read().sum
    }

    /// Get average value
    pub fn avg(&self) -> f64 {
        let summary = self.read();
        if summary.count == 0 {
            0.0
        } else {
            summary.sum / summary.count as f64
        }
    }

    /// Smallest observed value
    pub fn min(&self) -> Option<f64> {
        let summary = self.read();
        (summary.count > 0).then_some(summary.min)
    }

    /// Largest observed value
    pub fn max(&self) -> Option<f64> {
        let summary = self.read();
        (summary.count > 0).then_some(summary.max)
    }

    /// Cumulative bucket counts as `(upper bound, count)`, ending with
    /// `f64::INFINITY` holding the total
    pub fn buckets(&self) -> Vec<(f64, u64)> {
        let summary = self.read();
        let mut cumulative = 0;
        DEFAULT_BUCKETS
            .iter()
            .copied()
            .chain(std::iter::once(f64::INFINITY))
            .zip(summary.buckets.iter())
            .map(|(bound, count)| {
                cumulative += count;
                (bound, cumulative)
            })
            .collect()
    }

    /// Reset the histogram
    pub fn reset(&self) {
        *self.summary.write().unwrap_or_else(PoisonError::into_inner) = Summary::default();
    }
}

/// Metrics trait
pub trait Metrics: Send + Sync {
    /// Get a counter
    fn counter(&self, name: &str) -> Arc<Counter>;

    /// Get a histogram
    fn histogram(&self, name: &str) -> Arc<Histogram>;

    /// Record execution time
    fn record_execution_time(&self, operation: &str, duration: Duration);

    /// Record error
    fn record_error(&self, error_type: &str);
}

/// Metrics collector
#[derive(Debug, Default)]
pub struct MetricsCollector {
    counters: RwLock<HashMap<String, Arc<Counter>>>,
    histograms: RwLock<HashMap<String, Arc<Histogram>>>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all counter names, sorted
    pub fn counter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Reset all metrics
    pub fn reset_all(&self) {
        for counter in self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
        {
            counter.reset();
        }
        for histogram in self
            .histograms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
        {
            histogram.reset();
        }
    }
}

impl Metrics for MetricsCollector {
    fn counter(&self, name: &str) -> Arc<Counter> {
        self.counters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name)))
            .clone()
    }

    fn histogram(&self, name: &str) -> Arc<Histogram> {
        self.histograms
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(name)))
            .clone()
    }

    fn record_execution_time(&self, operation: &str, duration: Duration) {
        let hist = self.histogram(&format!("{}_duration", operation));
        hist.observe_duration(duration);
    }

    fn record_error(&self, error_type: &str) {
        let counter = self.counter(&format!("errors_{}", error_type));
        counter.inc();
    }
}
