//! Services module for mrr-core.

pub mod aggregator;
pub mod metrics;

pub use aggregator::Customer;
pub use metrics::{get_metrics, init_metrics};
