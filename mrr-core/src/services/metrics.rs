//! Metrics module for mrr-core.
//! Provides Prometheus counters for MRR reporting operations.

use prometheus::{opts, register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use std::sync::OnceLock;

/// Reporting operations counter
pub static MRR_OPERATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Customer-level discount evaluations, split by whether the discount applied
pub static DISCOUNT_EVALUATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Safe to call more than once.
pub fn init_metrics() {
    MRR_OPERATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "mrr_operations_total",
                "Total MRR reporting operations by operation"
            ),
            &["operation"]
        )
        .expect("Failed to register MRR_OPERATIONS_TOTAL")
    });

    DISCOUNT_EVALUATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "mrr_discount_evaluations_total",
                "Total customer-level discount evaluations by outcome"
            ),
            &["applied"]
        )
        .expect("Failed to register DISCOUNT_EVALUATIONS_TOTAL")
    });
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Record a reporting operation.
pub fn record_mrr_operation(operation: &str) {
    if let Some(counter) = MRR_OPERATIONS_TOTAL.get() {
        counter.with_label_values(&[operation]).inc();
    }
}

/// Record whether a customer-level discount was applied.
pub fn record_discount_evaluation(applied: bool) {
    if let Some(counter) = DISCOUNT_EVALUATIONS_TOTAL.get() {
        let label = if applied { "true" } else { "false" };
        counter.with_label_values(&[label]).inc();
    }
}
