//! The per-category progress snapshot slot.
//!
//! Reads happen once, at session creation. A missing or corrupt snapshot
//! degrades to "no prior state" — progress loss is acceptable, a hard
//! failure is not.

use aws_sdk_s3::Client;
use veridia_core::models::{Category, WizardSnapshot};
use veridia_core::storage_keys;

use crate::error::StorageError;
use crate::objects;

/// Write the progress snapshot to the category's slot.
pub async fn save_progress(
    client: &Client,
    bucket: &str,
    category: Category,
    snapshot: &WizardSnapshot,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(snapshot)?;
    objects::put_object(
        client,
        bucket,
        &storage_keys::progress(category),
        body,
        Some("application/json"),
    )
    .await
}

/// Load the category's snapshot, if one exists. Corrupt or unreadable
/// snapshots are logged and treated as absent.
pub async fn load_progress(
    client: &Client,
    bucket: &str,
    category: Category,
) -> Option<WizardSnapshot> {
    let key = storage_keys::progress(category);
    let body = match objects::get_object(client, bucket, &key).await {
        Ok(body) => body,
        Err(StorageError::NotFound { .. }) => return None,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "snapshot read failed, starting fresh");
            return None;
        }
    };
    match serde_json::from_slice(&body) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "snapshot corrupt, starting fresh");
            None
        }
    }
}

/// Delete the category's snapshot. The caller must also reset the live
/// session state, or the two diverge while the engine keeps running.
pub async fn clear_progress(
    client: &Client,
    bucket: &str,
    category: Category,
) -> Result<(), StorageError> {
    objects::delete_object(client, bucket, &storage_keys::progress(category)).await
}
