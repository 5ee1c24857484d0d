//! S3 state bucket provisioning

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use snowclone_cloud::{CloudError, ObjectStore, Result};

/// S3-backed object store
pub struct S3Store {
    client: aws_sdk_s3::Client,
    region: String,
}

impl S3Store {
    pub fn new(config: &SdkConfig, region: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(config),
            region: region.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn create_bucket(&self, name: &str) -> Result<()> {
        tracing::debug!("Creating S3 bucket: {} ({})", name, self.region);

        let mut request = self.client.create_bucket().bucket(name);

        // us-east-1 rejects an explicit location constraint
        if self.region != "us-east-1" {
            let constraint = BucketLocationConstraint::from(self.region.as_str());
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(constraint)
                    .build(),
            );
        }

        request
            .send()
            .await
            .map_err(|e| CloudError::BucketCreationFailed(DisplayErrorContext(e).to_string()))?;

        Ok(())
    }
}
