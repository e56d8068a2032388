//! The S3 file store behind the wizard's upload coordinator.

use std::time::Duration;

use aws_sdk_s3::Client;
use uuid::Uuid;
use veridia_engine::collaborators::FileStore;
use veridia_engine::error::CollaboratorError;

use crate::objects;

/// Seven days — the SigV4 presigning ceiling.
const READ_LINK_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

pub struct S3FileStore {
    client: Client,
    bucket: String,
}

impl S3FileStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        S3FileStore {
            client,
            bucket: bucket.into(),
        }
    }
}

impl FileStore for S3FileStore {
    /// Store the bytes under a fresh name in the destination folder and
    /// return a long-lived read link as the opaque reference.
    async fn upload(
        &self,
        bytes: &[u8],
        destination_folder: &str,
    ) -> Result<String, CollaboratorError> {
        let key = format!("{destination_folder}{}", Uuid::new_v4());
        objects::put_object(&self.client, &self.bucket, &key, bytes.to_vec(), None)
            .await
            .map_err(|e| CollaboratorError::Upload(e.to_string()))?;
        self.long_lived_link(&key, READ_LINK_TTL_SECONDS).await
    }

    async fn long_lived_link(
        &self,
        path: &str,
        ttl_seconds: u64,
    ) -> Result<String, CollaboratorError> {
        objects::presign_get(
            &self.client,
            &self.bucket,
            path,
            Duration::from_secs(ttl_seconds),
        )
        .await
        .map_err(|e| CollaboratorError::Upload(e.to_string()))
    }
}
