//! Customer record contract.

use super::{Discount, Subscription};

/// An externally supplied customer record, e.g. one fetched from the billing provider.
///
/// The aggregator calls [`subscriptions`](CustomerRecord::subscriptions) and
/// [`discount`](CustomerRecord::discount) at most once per instance and caches the result.
pub trait CustomerRecord {
    type Subscription: Subscription;
    type Discount: Discount;

    fn id(&self) -> &str;

    fn name(&self) -> Option<&str>;

    fn email(&self) -> Option<&str>;

    /// Wrap each underlying subscription record, preserving order.
    /// `None` when the record has no subscription list at all.
    fn subscriptions(&self) -> Option<Vec<Self::Subscription>>;

    /// Wrap the underlying discount field. Called even when that field is absent,
    /// in which case the wrapper must report that it does not apply to MRR.
    fn discount(&self) -> Self::Discount;
}
