//! veridia-core
//!
//! Pure domain types and S3 key conventions for the Veridia intake wizard.
//! No AWS SDK dependency — this is the shared vocabulary of the Veridia
//! system.

pub mod error;
pub mod models;
pub mod storage_keys;
