//! Domain models for mrr-core.

mod customer;
mod discount;
mod report;
mod subscription;

pub use customer::CustomerRecord;
pub use discount::{Discount, NoDiscount};
pub use report::MrrReport;
pub use subscription::{PauseCollection, Subscription, SubscriptionStatus};
