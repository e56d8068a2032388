use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The identification sub-form: government ID type, number, and the
/// uploaded document reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    pub id_type: String,
    pub id_number: String,
    pub id_file: Option<String>,
}

/// The shipping sub-form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Shipping {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

/// The authenticated patient the session belongs to, as reported by the
/// auth collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

/// Payment metadata captured from the payment collaborator. Never written
/// to progress snapshots; the engine never persists card data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentMeta {
    pub amount_cents: i64,
    pub coupon: Option<String>,
    /// Captured payment-method identifier, if the processor returned one.
    pub payment_method_id: Option<String>,
}
