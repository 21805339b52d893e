//! Test helper module for mrr-core integration tests.
//!
//! Provides in-memory customer records and collaborator doubles.

#![allow(dead_code)]

use mrr_core::models::{CustomerRecord, Discount, PauseCollection, Subscription, SubscriptionStatus};
use mrr_core::{Decimal, MrrError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const TEST_CUSTOMER_ID: &str = "cus_22222222";

pub fn amount(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Subscription with precomputed monthly values.
#[derive(Debug, Clone)]
pub struct TestSubscription {
    pub gross: Decimal,
    pub discounted: Decimal,
    pub status: String,
    pub pause: Option<PauseCollection>,
    pub fail_valuation: bool,
    pub verbatim_status: bool,
}

impl TestSubscription {
    pub fn new(gross: i64, discounted: i64, status: &str) -> Self {
        Self {
            gross: amount(gross),
            discounted: amount(discounted),
            status: status.to_string(),
            pause: None,
            fail_valuation: false,
            verbatim_status: false,
        }
    }

    pub fn with_status(status: &str) -> Self {
        Self::new(0, 0, status)
    }

    pub fn paused(mut self, behavior: &str, resumes_at: Option<i64>) -> Self {
        self.pause = Some(PauseCollection {
            behavior: behavior.to_string(),
            resumes_at,
        });
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_valuation = true;
        self
    }

    /// Report the status as an unparsed `Other` tag, as a provider SDK might.
    pub fn verbatim(mut self) -> Self {
        self.verbatim_status = true;
        self
    }
}

impl Subscription for TestSubscription {
    fn gross_monthly_value(&self) -> Result<Decimal, MrrError> {
        if self.fail_valuation {
            return Err(MrrError::Valuation(anyhow::anyhow!("unsupported interval")));
        }
        Ok(self.gross)
    }

    fn discounted_monthly_value(&self) -> Result<Decimal, MrrError> {
        if self.fail_valuation {
            return Err(MrrError::Valuation(anyhow::anyhow!("unsupported interval")));
        }
        Ok(self.discounted)
    }

    fn status(&self) -> SubscriptionStatus {
        if self.verbatim_status {
            return SubscriptionStatus::Other(self.status.clone());
        }
        SubscriptionStatus::from_string(&self.status)
    }

    fn pause_collection(&self) -> Option<&PauseCollection> {
        self.pause.as_ref()
    }
}

/// Underlying discount record: a fixed deduction, optionally failing when asked.
#[derive(Debug, Clone)]
pub struct TestDiscountRecord {
    pub applies_to_mrr: bool,
    pub deduction: Decimal,
    pub fail_deduction: bool,
}

impl TestDiscountRecord {
    pub fn fixed(applies_to_mrr: bool, deduction: i64) -> Self {
        Self {
            applies_to_mrr,
            deduction: amount(deduction),
            fail_deduction: false,
        }
    }

    pub fn failing(applies_to_mrr: bool) -> Self {
        Self {
            applies_to_mrr,
            deduction: Decimal::ZERO,
            fail_deduction: true,
        }
    }
}

/// Discount wrapper built around the optional underlying record.
#[derive(Debug, Clone)]
pub struct TestDiscount {
    record: Option<TestDiscountRecord>,
    pub seen_amounts: Arc<std::sync::Mutex<Vec<Decimal>>>,
}

impl Discount for TestDiscount {
    fn applies_to_mrr(&self) -> bool {
        self.record.as_ref().is_some_and(|r| r.applies_to_mrr)
    }

    fn deduction_for(&self, amount: Decimal) -> Result<Decimal, MrrError> {
        if let Ok(mut seen) = self.seen_amounts.lock() {
            seen.push(amount);
        }
        match &self.record {
            Some(r) if r.fail_deduction => {
                Err(MrrError::Discount(anyhow::anyhow!("coupon lookup failed")))
            }
            Some(r) => Ok(r.deduction),
            None => Ok(Decimal::ZERO),
        }
    }
}

/// Customer record counting how often it is asked to wrap its fields.
#[derive(Debug, Clone, Default)]
pub struct TestCustomer {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subscriptions: Option<Vec<TestSubscription>>,
    pub discount: Option<TestDiscountRecord>,
    pub subscription_resolutions: Arc<AtomicUsize>,
    pub discount_resolutions: Arc<AtomicUsize>,
    pub seen_amounts: Arc<std::sync::Mutex<Vec<Decimal>>>,
}

impl TestCustomer {
    pub fn new(subscriptions: Vec<TestSubscription>) -> Self {
        Self {
            id: TEST_CUSTOMER_ID.to_string(),
            name: Some("Acme Corp".to_string()),
            email: Some("billing@acme.test".to_string()),
            subscriptions: Some(subscriptions),
            ..Default::default()
        }
    }

    pub fn without_subscriptions() -> Self {
        Self {
            subscriptions: None,
            ..Self::new(vec![])
        }
    }

    pub fn with_discount(mut self, discount: TestDiscountRecord) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn subscription_resolutions(&self) -> usize {
        self.subscription_resolutions.load(Ordering::SeqCst)
    }

    pub fn discount_resolutions(&self) -> usize {
        self.discount_resolutions.load(Ordering::SeqCst)
    }

    pub fn seen_amounts(&self) -> Vec<Decimal> {
        self.seen_amounts
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl CustomerRecord for TestCustomer {
    type Subscription = TestSubscription;
    type Discount = TestDiscount;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn subscriptions(&self) -> Option<Vec<TestSubscription>> {
        self.subscription_resolutions.fetch_add(1, Ordering::SeqCst);
        self.subscriptions.clone()
    }

    fn discount(&self) -> TestDiscount {
        self.discount_resolutions.fetch_add(1, Ordering::SeqCst);
        TestDiscount {
            record: self.discount.clone(),
            seen_amounts: Arc::clone(&self.seen_amounts),
        }
    }
}
