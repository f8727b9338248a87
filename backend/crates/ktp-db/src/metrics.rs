use std::time::Duration;

use metrics::{counter, histogram};

/// Counters for registry commands, labelled by operation name.
#[derive(Debug, Clone)]
pub struct RegistryMetrics {
    prefix: &'static str,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "ktp_registry",
        }
    }

    /// Command planned, persisted and applied
    pub fn committed(&self, operation: &str) {
        counter!(format!("{}.commands.{}.ok", self.prefix, operation)).increment(1);
    }

    /// Command refused by the registry rules
    pub fn rejected(&self, operation: &str) {
        counter!(format!("{}.commands.{}.rejected", self.prefix, operation)).increment(1);
    }

    /// Command accepted but the write did not reach the database
    pub fn failed(&self, operation: &str) {
        counter!(format!("{}.commands.{}.failed", self.prefix, operation)).increment(1);
    }

    pub fn latency(&self, operation: &str, duration: Duration) {
        histogram!(format!("{}.commands.{}.latency_ms", self.prefix, operation))
            .record(duration.as_millis() as f64);
    }
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
