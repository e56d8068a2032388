//! Trait seams for the hosted services the wizard delegates to. The engine
//! only consumes opaque references, client secrets, and success/failure
//! outcomes; the collaborators' internals live elsewhere.

use uuid::Uuid;
use veridia_core::models::{Category, SubmissionRecord};

use crate::error::CollaboratorError;
use crate::pricing::Discount;

/// Object storage for uploaded files. Returns opaque reference strings.
pub trait FileStore {
    fn upload(
        &self,
        bytes: &[u8],
        destination_folder: &str,
    ) -> impl Future<Output = Result<String, CollaboratorError>> + Send;

    fn long_lived_link(
        &self,
        path: &str,
        ttl_seconds: u64,
    ) -> impl Future<Output = Result<String, CollaboratorError>> + Send;
}

/// Relational persistence of the final submission record.
pub trait SubmissionSink {
    fn insert(
        &self,
        record: &SubmissionRecord,
    ) -> impl Future<Output = Result<Uuid, CollaboratorError>> + Send;
}

/// Payment processor front door: exchanges a final cents amount for a
/// client secret that drives the externally-rendered payment form.
pub trait PaymentGateway {
    fn create_intent(
        &self,
        amount_cents: i64,
        category: Category,
        coupon: Option<&str>,
    ) -> impl Future<Output = Result<String, CollaboratorError>> + Send;
}

/// Server-side coupon validation.
pub trait CouponService {
    fn validate(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Discount, CollaboratorError>> + Send;
}
