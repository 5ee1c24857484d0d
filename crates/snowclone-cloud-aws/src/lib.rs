//! AWS implementation of the Snowclone cloud collaborators
//!
//! S3 provides the terraform remote-state bucket; DynamoDB provides the
//! project endpoint registry. Both clients are built from one shared SDK
//! configuration.

pub mod dynamo;
pub mod s3;

// Re-exports
pub use dynamo::{DynamoRegistry, ENDPOINT_TABLE};
pub use s3::S3Store;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load the shared AWS SDK configuration for a region
///
/// Credentials come from the usual provider chain (environment, profile,
/// instance metadata).
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}
