//! mrr-core: Monthly recurring revenue metrics for a billing customer.
//!
//! The [`Customer`](services::Customer) aggregator wraps an opaque customer record and
//! derives gross MRR, discount-adjusted MRR and status/pause summaries from the record's
//! subscriptions and discount.

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;

pub use error::MrrError;
pub use rust_decimal::Decimal;
