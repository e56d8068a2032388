//! veridia-storage
//!
//! S3-backed collaborators for the wizard engine: the per-category
//! progress snapshot store, the upload file store, and the submission
//! sink. Thin wrappers around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
pub mod snapshot;
pub mod submissions;
pub mod uploads;
