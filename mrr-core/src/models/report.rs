//! Serializable MRR report.

use rust_decimal::Decimal;
use serde::Serialize;

/// All reporting outputs for one customer, evaluated together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MrrReport {
    pub customer_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub gross_mrr: Decimal,
    pub discounted_mrr: Decimal,
    pub statuses: String,
    pub pause_collection_behavior: String,
    pub collection_resume_date: String,
}
