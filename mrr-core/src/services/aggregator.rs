//! Customer MRR aggregator.
//!
//! Wraps a [`CustomerRecord`] and derives MRR figures and summaries from its
//! subscriptions. The subscription list and discount wrapper are resolved on first
//! use and cached for the lifetime of the instance; the cache is a [`OnceLock`] so a
//! shared instance may be read from several threads.

use crate::config::{MrrConfig, ReportTimezone};
use crate::error::MrrError;
use crate::models::{CustomerRecord, Discount, MrrReport, Subscription};
use crate::services::metrics::{record_discount_evaluation, record_mrr_operation};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::OnceLock;

pub struct Customer<R: CustomerRecord> {
    record: R,
    timezone: ReportTimezone,
    subscriptions: OnceLock<Vec<R::Subscription>>,
    discount: OnceLock<R::Discount>,
}

impl<R: CustomerRecord> Customer<R> {
    /// Aggregator rendering resume dates in host local time.
    pub fn new(record: R) -> Self {
        Self::with_timezone(record, ReportTimezone::Local)
    }

    pub fn with_timezone(record: R, timezone: ReportTimezone) -> Self {
        Self {
            record,
            timezone,
            subscriptions: OnceLock::new(),
            discount: OnceLock::new(),
        }
    }

    pub fn from_config(record: R, config: &MrrConfig) -> Result<Self, MrrError> {
        Ok(Self::with_timezone(record, config.report_timezone()?))
    }

    pub fn id(&self) -> &str {
        self.record.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.record.name()
    }

    pub fn email(&self) -> Option<&str> {
        self.record.email()
    }

    /// Sum of each subscription's gross monthly value. Never discounted.
    pub fn gross_mrr(&self) -> Result<Decimal, MrrError> {
        record_mrr_operation("gross_mrr");
        sum_amounts(self.subscriptions(), "gross MRR", |sub| sub.gross_monthly_value())
    }

    /// Sum of the subscription-level discounted values, minus the customer-level
    /// discount deduction when that discount applies to MRR.
    ///
    /// The result is not clamped and can be negative.
    pub fn discounted_mrr(&self) -> Result<Decimal, MrrError> {
        record_mrr_operation("discounted_mrr");
        let mrr = sum_amounts(self.subscriptions(), "discounted MRR", |sub| {
            sub.discounted_monthly_value()
        })?;
        let deduction = self.discount_amount(mrr)?;

        mrr.checked_sub(deduction)
            .ok_or(MrrError::AmountOverflow("discounted MRR"))
    }

    /// Distinct status tags in first-seen order, comma-joined.
    ///
    /// Tags are compared as rendered, so `Other("active")` collapses into `Active`.
    pub fn sub_statuses(&self) -> String {
        record_mrr_operation("sub_statuses");
        let mut seen = HashSet::new();
        self.subscriptions()
            .iter()
            .map(|sub| sub.status().as_str().to_string())
            .filter(|tag| seen.insert(tag.clone()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Non-empty pause-collection behaviors in subscription order, comma-joined.
    pub fn pause_collection_behavior(&self) -> String {
        record_mrr_operation("pause_collection_behavior");
        self.subscriptions()
            .iter()
            .filter_map(|sub| sub.pause_collection())
            .map(|pause| pause.behavior.as_str())
            .filter(|behavior| !behavior.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Pause-collection resume timestamps rendered in the report timezone, comma-joined.
    pub fn collection_resume_date(&self) -> String {
        record_mrr_operation("collection_resume_date");
        self.subscriptions()
            .iter()
            .filter_map(|sub| sub.pause_collection())
            .filter_map(|pause| pause.resumes_at)
            .filter_map(|resumes_at| {
                let rendered = self.timezone.format_timestamp(resumes_at);
                if rendered.is_none() {
                    tracing::warn!(
                        customer_id = %self.id(),
                        resumes_at,
                        "Skipping unrepresentable resume timestamp"
                    );
                }
                rendered
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Evaluate every reporting operation once.
    pub fn report(&self) -> Result<MrrReport, MrrError> {
        Ok(MrrReport {
            customer_id: self.id().to_string(),
            name: self.name().map(str::to_string),
            email: self.email().map(str::to_string),
            gross_mrr: self.gross_mrr()?,
            discounted_mrr: self.discounted_mrr()?,
            statuses: self.sub_statuses(),
            pause_collection_behavior: self.pause_collection_behavior(),
            collection_resume_date: self.collection_resume_date(),
        })
    }

    fn subscriptions(&self) -> &[R::Subscription] {
        self.subscriptions.get_or_init(|| {
            let resolved = self.record.subscriptions().unwrap_or_default();
            tracing::debug!(
                customer_id = %self.record.id(),
                count = resolved.len(),
                "Resolved subscriptions"
            );
            resolved
        })
    }

    fn discount(&self) -> &R::Discount {
        self.discount.get_or_init(|| self.record.discount())
    }

    fn discount_amount(&self, mrr: Decimal) -> Result<Decimal, MrrError> {
        let discount = self.discount();
        if !discount.applies_to_mrr() {
            record_discount_evaluation(false);
            return Ok(Decimal::ZERO);
        }

        let deduction = discount.deduction_for(mrr)?;
        record_discount_evaluation(true);
        tracing::debug!(
            customer_id = %self.id(),
            mrr = %mrr,
            deduction = %deduction,
            "Applied customer discount"
        );
        Ok(deduction)
    }
}

fn sum_amounts<S>(
    subscriptions: &[S],
    what: &'static str,
    value: impl Fn(&S) -> Result<Decimal, MrrError>,
) -> Result<Decimal, MrrError> {
    subscriptions.iter().try_fold(Decimal::ZERO, |total, sub| {
        total
            .checked_add(value(sub)?)
            .ok_or(MrrError::AmountOverflow(what))
    })
}
