//! Subscription contract.

use crate::error::MrrError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription status as reported by the billing provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Unpaid,
    Canceled,
    Incomplete,
    IncompleteExpired,
    Paused,
    /// Any tag this crate does not know about, kept verbatim.
    Other(String),
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Unpaid => "unpaid",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Incomplete => "incomplete",
            SubscriptionStatus::IncompleteExpired => "incomplete_expired",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Other(tag) => tag,
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "active" => SubscriptionStatus::Active,
            "trialing" => SubscriptionStatus::Trialing,
            "past_due" => SubscriptionStatus::PastDue,
            "unpaid" => SubscriptionStatus::Unpaid,
            "canceled" => SubscriptionStatus::Canceled,
            "incomplete" => SubscriptionStatus::Incomplete,
            "incomplete_expired" => SubscriptionStatus::IncompleteExpired,
            "paused" => SubscriptionStatus::Paused,
            other => SubscriptionStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pause-collection state of a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseCollection {
    /// Collection behavior while paused, e.g. `mark_uncollectible`. May be empty.
    #[serde(default)]
    pub behavior: String,
    /// When collection resumes, in seconds since the unix epoch.
    #[serde(default)]
    pub resumes_at: Option<i64>,
}

/// A subscription as seen by the MRR aggregator.
///
/// How a subscription turns its price and interval into a monthly figure is up to
/// the implementor. Errors returned here reach the caller of the aggregator as-is.
pub trait Subscription {
    /// Monthly-equivalent revenue before any discount.
    fn gross_monthly_value(&self) -> Result<Decimal, MrrError>;

    /// Monthly-equivalent revenue after subscription-level discounts and coupons.
    fn discounted_monthly_value(&self) -> Result<Decimal, MrrError>;

    fn status(&self) -> SubscriptionStatus;

    fn pause_collection(&self) -> Option<&PauseCollection>;
}
