//! The submission sink: persists the normalized record produced at the
//! terminal wizard transition.

use aws_sdk_s3::Client;
use tracing::info;
use uuid::Uuid;
use veridia_core::models::SubmissionRecord;
use veridia_core::storage_keys;
use veridia_engine::collaborators::SubmissionSink;
use veridia_engine::error::CollaboratorError;

use crate::objects;

pub struct S3SubmissionSink {
    client: Client,
    bucket: String,
}

impl S3SubmissionSink {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        S3SubmissionSink {
            client,
            bucket: bucket.into(),
        }
    }
}

impl SubmissionSink for S3SubmissionSink {
    async fn insert(&self, record: &SubmissionRecord) -> Result<Uuid, CollaboratorError> {
        let body = serde_json::to_vec_pretty(record)
            .map_err(|e| CollaboratorError::Insert(e.to_string()))?;
        objects::put_object(
            &self.client,
            &self.bucket,
            &storage_keys::submission(record.id),
            body,
            Some("application/json"),
        )
        .await
        .map_err(|e| CollaboratorError::Insert(e.to_string()))?;

        info!(id = %record.id, category = record.category.slug(), "submission stored");
        Ok(record.id)
    }
}
